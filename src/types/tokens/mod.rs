// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! # Type Relationships
//!
//! ```text
//! TokenQuantity (BigUint, raw transfer magnitude)
//!     |
//!     | credit / debit into a BigInt running balance
//!     ↓
//! BigInt (signed, raw)
//!     |
//!     | format_token_balance(TokenDecimals)
//!     ↓
//! TokenBalance (decimal string, human-readable)
//! ```

mod balance;
mod decimals;
mod quantity;

pub use balance::TokenBalance;
pub use decimals::TokenDecimals;
pub use quantity::TokenQuantity;
