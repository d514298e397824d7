//! Configuration for walletscan
//!
//! # Example: Using defaults
//!
//! ```rust
//! use walletscan::WalletscanConfig;
//!
//! let config = WalletscanConfig::new("my-api-key").unwrap();
//! assert_eq!(config.base_url.as_str(), "https://api.etherscan.io/api");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use walletscan::WalletscanConfigBuilder;
//! use std::time::Duration;
//!
//! let config = WalletscanConfigBuilder::new("my-api-key")
//!     .base_url("https://api.basescan.org/api")
//!     .http_timeout(Duration::from_secs(30))
//!     .listen_port(3000)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.listen_port, 3000);
//! ```

use std::time::Duration;

use url::Url;

use crate::ConfigError;

pub mod constants;

use constants::{DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT, DEFAULT_LISTEN_PORT, env};

/// Configuration for walletscan
///
/// Use [`WalletscanConfigBuilder`] for a fluent API to construct instances,
/// or [`WalletscanConfig::from_env`] in binaries.
#[derive(Clone)]
pub struct WalletscanConfig {
    /// Indexer API key; never empty
    pub api_key: String,

    /// Indexer account API endpoint
    /// Default: https://api.etherscan.io/api
    pub base_url: Url,

    /// Timeout for one transfer-history request
    /// Default: 10 seconds
    pub http_timeout: Duration,

    /// Port for the HTTP surface
    /// Default: 8080
    pub listen_port: u16,
}

impl std::fmt::Debug for WalletscanConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletscanConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("http_timeout", &self.http_timeout)
            .field("listen_port", &self.listen_port)
            .finish()
    }
}

impl WalletscanConfig {
    /// Create config with defaults for everything except the API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        WalletscanConfigBuilder::new(api_key).build()
    }

    /// Load configuration from the process environment.
    ///
    /// A `.env` file is honoured when present. Only the API key is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use walletscan::WalletscanConfig;
    ///
    /// let vars = HashMap::from([
    ///     ("ETHERSCAN_API_KEY", "abc"),
    ///     ("ETHERSCAN_TIMEOUT_SECS", "5"),
    /// ]);
    /// let config = WalletscanConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.http_timeout.as_secs(), 5);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = WalletscanConfigBuilder::new(lookup(env::API_KEY).unwrap_or_default());

        if let Some(url) = lookup(env::BASE_URL) {
            builder = builder.base_url(url);
        }
        if let Some(raw) = lookup(env::TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::invalid_value(env::TIMEOUT_SECS, raw.as_str()))?;
            builder = builder.http_timeout(Duration::from_secs(secs));
        }
        if let Some(raw) = lookup(env::API_PORT) {
            let port = raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid_value(env::API_PORT, raw.as_str()))?;
            builder = builder.listen_port(port);
        }

        builder.build()
    }
}

/// Builder for [`WalletscanConfig`]
///
/// Validation (API key present, base URL parseable) happens in
/// [`build`](Self::build).
pub struct WalletscanConfigBuilder {
    api_key: String,
    base_url: String,
    http_timeout: Duration,
    listen_port: u16,
}

impl WalletscanConfigBuilder {
    /// Create a new builder with defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            listen_port: DEFAULT_LISTEN_PORT,
        }
    }

    /// Point at a different Etherscan-compatible indexer
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Set the HTTP listen port
    pub fn listen_port(mut self, port: u16) -> Self {
        self.listen_port = port;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<WalletscanConfig, ConfigError> {
        let api_key = self.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let base_url = Url::parse(self.base_url.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            details: e.to_string(),
        })?;

        Ok(WalletscanConfig {
            api_key,
            base_url,
            http_timeout: self.http_timeout,
            listen_port: self.listen_port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WalletscanConfig::new("key").unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.listen_port, 8080);
    }

    #[test]
    fn test_api_key_is_trimmed_and_required() {
        assert_eq!(WalletscanConfig::new("  key \n").unwrap().api_key, "key");
        assert_eq!(
            WalletscanConfig::new("   ").unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = WalletscanConfigBuilder::new("key")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = WalletscanConfig::from_lookup(lookup(&[
            (env::API_KEY, "abc"),
            (env::BASE_URL, "https://api.polygonscan.com/api"),
            (env::TIMEOUT_SECS, "3"),
            (env::API_PORT, "9000"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://api.polygonscan.com/api");
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.listen_port, 9000);
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let err = WalletscanConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn test_from_lookup_bad_numbers() {
        let err =
            WalletscanConfig::from_lookup(lookup(&[(env::API_KEY, "abc"), (env::API_PORT, "http")]))
                .unwrap_err();
        assert_eq!(err, ConfigError::invalid_value(env::API_PORT, "http"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = WalletscanConfig::new("super-secret").unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
