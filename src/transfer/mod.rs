// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer records: raw indexer rows and their canonical form
//!
//! Indexer APIs have shipped the same ERC-20 transfer row under different field
//! casings over the years (`tokenName` vs `TokenName`, `value` vs
//! `TokenQuantity`). [`RawTransfer`] keeps the row as a loose key/value bag and
//! [`normalize`] resolves each logical field through an ordered alias list into
//! a [`CanonicalTransfer`].
//!
//! # Examples
//!
//! ```
//! use walletscan::{RawTransfer, TransferError, normalize};
//!
//! let raw: RawTransfer = serde_json::from_str(r#"{
//!     "contractAddress": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
//!     "TokenName": "USD Coin",
//!     "tokenSymbol": "USDC",
//!     "tokenDecimal": "6",
//!     "value": "1500000",
//!     "from": "0x1111111111111111111111111111111111111111",
//!     "to": "0x2222222222222222222222222222222222222222"
//! }"#).unwrap();
//!
//! let transfer = normalize(&raw).unwrap();
//! assert_eq!(transfer.display_name(), "USD Coin");
//! assert_eq!(transfer.decimals().as_u32(), 6);
//!
//! let broken: RawTransfer = serde_json::from_str(r#"{"contractAddress": "0xabc"}"#).unwrap();
//! assert!(matches!(normalize(&broken), Err(TransferError::MissingQuantity { .. })));
//! ```

pub mod aliases;
mod normalizer;
mod raw;

pub use normalizer::{CanonicalTransfer, normalize};
pub use raw::RawTransfer;
