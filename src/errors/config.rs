// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration loading.

/// Errors raised while building a [`crate::WalletscanConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The indexer API key is absent or blank.
    #[error("API key must not be empty")]
    MissingApiKey,

    /// The indexer base URL does not parse.
    #[error("Invalid base URL {url:?}: {details}")]
    InvalidBaseUrl {
        /// The rejected URL text
        url: String,
        /// Parser message
        details: String,
    },

    /// A numeric setting could not be parsed.
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue {
        /// Setting name (usually the environment variable)
        key: String,
        /// The rejected text
        value: String,
    },
}

impl ConfigError {
    /// Create an `InvalidValue` error for a setting.
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}
