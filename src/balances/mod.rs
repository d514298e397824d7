// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Balance aggregation from transfer history
//!
//! The aggregation core: folds canonical transfers into per-token running
//! balances for one wallet using unbounded integers, then renders each
//! non-zero balance with its token's decimals.
//!
//! The core is synchronous, performs no I/O and holds no shared state. Each
//! call owns its accumulator, so separate wallets or batches can be aggregated
//! concurrently without locking.
//!
//! # Examples
//!
//! ```
//! use walletscan::{CanonicalTransfer, TokenDecimals, TokenQuantity, aggregate_transfers};
//!
//! let wallet = "0xAb66485175e65993f217b7470ea433574473a760";
//! let usdc = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
//! let other = "0x1111111111111111111111111111111111111111";
//!
//! let transfers = vec![
//!     CanonicalTransfer::new(usdc, other, wallet, TokenQuantity::from(2_500_000u64))
//!         .with_metadata("USD Coin", "USDC", TokenDecimals::USDC),
//!     CanonicalTransfer::new(usdc, wallet.to_lowercase(), other, TokenQuantity::from(1_000_000u64)),
//! ];
//!
//! let report = aggregate_transfers(wallet, transfers);
//! assert_eq!(report.tokens.len(), 1);
//! assert_eq!(report.tokens[0].balance, "1.5");
//! ```

mod aggregator;
mod render;

pub use aggregator::{
    AggregationReport, BalanceAggregator, Direction, TokenAggregate, aggregate_transfers,
    summarize_token_balances,
};
pub use render::format_token_balance;
