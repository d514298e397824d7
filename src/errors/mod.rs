// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the walletscan library.
//!
//! This module provides strongly-typed errors for all public APIs in walletscan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`TransferError`,
//!   `AddressError`, `FetchError`, `ConfigError`)
//! - **Unified error type** (`WalletscanError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! - [`TransferError`] - Per-record normalization failures. These are never fatal
//!   and never reach [`WalletscanError`]: the balance aggregator counts and skips
//!   the offending record.
//! - [`AddressError`] - Wallet address syntax failures, raised by callers before
//!   any aggregation happens.
//! - [`FetchError`] - Failures retrieving transfer history from the indexing API,
//!   including the "no transactions found" sentinel.
//! - [`ConfigError`] - Invalid or missing configuration.
//!
//! # Examples
//!
//! ```rust,ignore
//! use walletscan::{WalletTracker, WalletscanError};
//!
//! async fn example(tracker: &WalletTracker<impl walletscan::TransferSource>) {
//!     match tracker.get_wallet_tokens("0xab66485175E65993F217B7470EA433574473A760").await {
//!         Ok(response) => println!("{} tokens", response.tokens.len()),
//!         Err(WalletscanError::Address(e)) => eprintln!("Bad input: {e}"),
//!         Err(e) => eprintln!("Lookup failed: {e}"),
//!     }
//! }
//! ```

mod address;
mod config;
mod fetch;
mod transfer;

pub use address::AddressError;
pub use config::ConfigError;
pub use fetch::FetchError;
pub use transfer::TransferError;

/// Unified error type for all walletscan operations.
///
/// All module-specific error types automatically convert to `WalletscanError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum WalletscanError {
    /// Wallet address failed validation.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Transfer history could not be retrieved.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration is invalid or incomplete.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
