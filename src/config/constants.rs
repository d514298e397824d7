//! Defaults and environment variable names

use std::time::Duration;

/// Etherscan-compatible account API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/api";

/// HTTP timeout for a single transfer-history request
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Port the HTTP surface listens on
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Highest block number requested; effectively "latest"
pub const END_BLOCK: u64 = 999_999_999;

/// Environment variable names read by [`crate::WalletscanConfig::from_env`]
pub mod env {
    /// Indexer API key (required)
    pub const API_KEY: &str = "ETHERSCAN_API_KEY";

    /// Indexer base URL override
    pub const BASE_URL: &str = "ETHERSCAN_BASE_URL";

    /// Request timeout in whole seconds
    pub const TIMEOUT_SECS: &str = "ETHERSCAN_TIMEOUT_SECS";

    /// HTTP listen port
    pub const API_PORT: &str = "API_PORT";
}
