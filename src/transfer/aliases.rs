// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Candidate field names for each logical transfer field, in lookup order
//!
//! The first alias holding a non-blank value wins.

/// Token contract address
pub const CONTRACT_ADDRESS: &[&str] = &["contractAddress", "ContractAddress"];

/// Token display name
pub const TOKEN_NAME: &[&str] = &["tokenName", "TokenName"];

/// Token display symbol
pub const TOKEN_SYMBOL: &[&str] = &["tokenSymbol", "TokenSymbol"];

/// Token decimal precision
pub const TOKEN_DECIMALS: &[&str] = &["tokenDecimal", "TokenDecimal"];

/// Raw transferred quantity
pub const QUANTITY: &[&str] = &["value", "TokenQuantity"];

/// Sender address
pub const FROM: &[&str] = &["from", "From"];

/// Receiver address
pub const TO: &[&str] = &["to", "To"];

/// Transaction hash, reported when a row is skipped
pub const TX_HASH: &[&str] = &["hash", "Hash"];
