// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for wallet address validation.

/// Errors produced when a wallet address does not have the canonical
/// 42-character `0x`-prefixed hex form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Address is not exactly 42 characters long.
    #[error("Invalid ethereum address {address:?}: expected 42 characters, got {length}")]
    InvalidLength {
        /// The rejected input
        address: String,
        /// Its length in characters
        length: usize,
    },

    /// Address does not start with `0x`.
    #[error("Invalid ethereum address {address:?}: missing 0x prefix")]
    MissingPrefix {
        /// The rejected input
        address: String,
    },

    /// The 40 characters after the prefix are not all hex digits.
    #[error("Invalid ethereum address {address:?}: non-hex characters")]
    InvalidHex {
        /// The rejected input
        address: String,
    },
}

impl AddressError {
    /// The address text that was rejected.
    pub fn address(&self) -> &str {
        match self {
            AddressError::InvalidLength { address, .. }
            | AddressError::MissingPrefix { address }
            | AddressError::InvalidHex { address } => address,
        }
    }
}
