// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet address syntax validation
//!
//! Validation happens at the edges (tracker, HTTP handler) before any
//! transfer history is fetched. The aggregation core never re-validates.

use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::AddressError;

/// Length of a canonical `0x`-prefixed EVM address
pub const ADDRESS_LENGTH: usize = 42;

/// A syntactically valid EVM wallet address
///
/// Keeps the caller's original casing so responses echo it back unchanged.
///
/// # Examples
///
/// ```
/// use walletscan::WalletAddress;
///
/// let wallet = WalletAddress::parse("0xab66485175E65993F217B7470EA433574473A760").unwrap();
/// assert_eq!(wallet.lowercase(), "0xab66485175e65993f217b7470ea433574473a760");
///
/// assert!(WalletAddress::parse("ab66485175E65993F217B7470EA433574473A760").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress {
    original: String,
    address: Address,
}

impl WalletAddress {
    /// Validate a `0x`-prefixed, 42-character hex address.
    ///
    /// Checksum casing is not enforced.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let length = input.chars().count();
        if length != ADDRESS_LENGTH {
            return Err(AddressError::InvalidLength {
                address: input.to_string(),
                length,
            });
        }
        let Some(hex) = input.strip_prefix("0x") else {
            return Err(AddressError::MissingPrefix {
                address: input.to_string(),
            });
        };
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidHex {
                address: input.to_string(),
            });
        }
        let address = Address::from_str(input).map_err(|_| AddressError::InvalidHex {
            address: input.to_string(),
        })?;

        Ok(Self {
            original: input.to_string(),
            address,
        })
    }

    /// The address exactly as the caller supplied it
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Lowercase form used for comparisons
    pub fn lowercase(&self) -> String {
        self.original.to_ascii_lowercase()
    }

    /// Parsed 20-byte address
    pub fn address(&self) -> Address {
        self.address
    }
}

impl FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.original
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}
