// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer history retrieval.
//!
//! These come from the indexing API boundary, not from the aggregation core.

/// Errors that can occur while fetching token transfer history.
///
/// # Examples
///
/// ```rust
/// use walletscan::FetchError;
///
/// let error = FetchError::api("Max rate limit reached");
/// assert!(!error.is_no_transactions());
/// assert!(FetchError::NoTransactions.is_no_transactions());
/// ```
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The indexer reported that the address has no token transactions.
    ///
    /// Callers map this sentinel to an empty transfer list; it is not a failure.
    #[error("No token transactions found")]
    NoTransactions,

    /// The HTTP request could not be built or sent, or timed out.
    #[error("Request to {operation} failed")]
    Request {
        /// Description of the request that failed
        operation: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The indexer answered with a non-success HTTP status.
    #[error("Indexer responded with status {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Leading part of the response body
        body: String,
    },

    /// The response body was not the expected JSON envelope.
    #[error("Failed to decode indexer response: {details}")]
    Decode {
        /// Details about the decode failure
        details: String,
    },

    /// The indexer returned an error message in its envelope.
    #[error("Indexer API error: {message}")]
    Api {
        /// Message reported by the indexer
        message: String,
    },
}

impl FetchError {
    /// Create a `Request` error for an operation.
    pub fn request(operation: impl Into<String>, source: reqwest::Error) -> Self {
        FetchError::Request {
            operation: operation.into(),
            source,
        }
    }

    /// Create a `Decode` error with details.
    pub fn decode(details: impl std::fmt::Display) -> Self {
        FetchError::Decode {
            details: details.to_string(),
        }
    }

    /// Create an `Api` error from an indexer message.
    pub fn api(message: impl Into<String>) -> Self {
        FetchError::Api {
            message: message.into(),
        }
    }

    /// Whether this is the "no transactions found" sentinel.
    pub fn is_no_transactions(&self) -> bool {
        matches!(self, FetchError::NoTransactions)
    }
}
