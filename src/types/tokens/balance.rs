// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Rendered token balance

use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use serde::{Deserialize, Serialize};

/// Final, human-readable holding of one token for a wallet
///
/// `balance` is already formatted with the token's decimals (see
/// [`crate::format_token_balance`]). Only non-zero balances are ever produced
/// by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Token contract address, as reported by the indexer
    pub address: String,
    /// Display name; never empty
    pub name: String,
    /// Display symbol; may be empty
    pub symbol: String,
    /// Decimal-formatted balance, e.g. `"1.5"` or `"-0.005"`
    pub balance: String,
}

impl TokenBalance {
    /// Numeric view of the rendered balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use walletscan::TokenBalance;
    ///
    /// let token = TokenBalance {
    ///     address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".into(),
    ///     name: "USD Coin".into(),
    ///     symbol: "USDC".into(),
    ///     balance: "1.5".into(),
    /// };
    /// assert_eq!(token.to_decimal().unwrap().to_string(), "1.5");
    /// ```
    pub fn to_decimal(&self) -> Result<BigDecimal, ParseBigDecimalError> {
        BigDecimal::from_str(&self.balance)
    }
}
