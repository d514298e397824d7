// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # walletscan
//!
//! Current ERC-20 token holdings for an EVM wallet, derived from the wallet's
//! raw transfer history.
//!
//! The heart of the crate is the balance aggregation engine
//! ([`summarize_token_balances`], [`BalanceAggregator`]): it folds transfer
//! rows into per-token balances with unbounded integer arithmetic and renders
//! each non-zero balance using the token's decimals. No floating point is used
//! anywhere on the balance path.
//!
//! Around it sit thin collaborators: [`EtherscanClient`] fetches history and
//! [`WalletTracker`] wires validation, retrieval and aggregation together.
//! [`mcp`] exposes the `wallet_tracker` tool over stdio, and [`server`]
//! exposes `GET /wallet/{address}`.
//!
//! ## Quick start
//!
//! ```
//! use walletscan::{RawTransfer, summarize_token_balances};
//!
//! let wallet = "0xab66485175E65993F217B7470EA433574473A760";
//! let rows: Vec<RawTransfer> = serde_json::from_str(r#"[
//!   {"contractAddress": "0x6b175474e89094c44da98b954eedeac495271d0f",
//!    "tokenName": "Dai Stablecoin", "tokenSymbol": "DAI", "tokenDecimal": "18",
//!    "value": "1234567890123456789",
//!    "from": "0x1111111111111111111111111111111111111111",
//!    "to": "0xab66485175e65993f217b7470ea433574473a760"}
//! ]"#).unwrap();
//!
//! let report = summarize_token_balances(wallet, &rows);
//! assert_eq!(report.tokens[0].balance, "1.234567890123456789");
//! assert_eq!(report.skipped, 0);
//! ```

mod address;
mod balances;
pub mod bootstrap;
pub mod config;
mod errors;
mod etherscan;
pub mod mcp;
pub mod server;
mod tracing;
mod tracker;
pub mod transfer;
mod types;

pub use address::{ADDRESS_LENGTH, WalletAddress};
pub use balances::{
    AggregationReport, BalanceAggregator, Direction, TokenAggregate, aggregate_transfers,
    format_token_balance, summarize_token_balances,
};
pub use config::{WalletscanConfig, WalletscanConfigBuilder};
pub use errors::{AddressError, ConfigError, FetchError, TransferError, WalletscanError};
pub use etherscan::{EtherscanClient, EtherscanResponse, NO_TRANSACTIONS_FOUND, TransferSource};
pub use tracker::{WalletReport, WalletResponse, WalletTracker, format_wallet_response};
pub use transfer::{CanonicalTransfer, RawTransfer, normalize};
pub use types::tokens::{TokenBalance, TokenDecimals, TokenQuantity};
