// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for walletscan integration tests
//!
//! Provides a mock [`TransferSource`] and row builders so tracker and server
//! tests run without network access.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use walletscan::{FetchError, RawTransfer, TransferSource, WalletAddress};

pub const WALLET: &str = "0xab66485175E65993F217B7470EA433574473A760";
pub const COUNTERPARTY: &str = "0x1111111111111111111111111111111111111111";
pub const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const WBTC: &str = "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599";

/// What the mock answers with
pub enum MockAnswer {
    Rows(Vec<RawTransfer>),
    NoTransactions,
    ApiError(String),
}

/// Mock TransferSource returning a canned answer and counting calls
pub struct MockTransferSource {
    answer: MockAnswer,
    calls: AtomicUsize,
}

impl MockTransferSource {
    pub fn with_rows(rows: Vec<RawTransfer>) -> Self {
        Self::new(MockAnswer::Rows(rows))
    }

    pub fn no_transactions() -> Self {
        Self::new(MockAnswer::NoTransactions)
    }

    pub fn failing(message: &str) -> Self {
        Self::new(MockAnswer::ApiError(message.to_string()))
    }

    fn new(answer: MockAnswer) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times token_transfers was called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransferSource for MockTransferSource {
    async fn token_transfers(&self, _wallet: &WalletAddress) -> Result<Vec<RawTransfer>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            MockAnswer::Rows(rows) => Ok(rows.clone()),
            MockAnswer::NoTransactions => Err(FetchError::NoTransactions),
            MockAnswer::ApiError(message) => Err(FetchError::api(message.as_str())),
        }
    }
}

/// A transfer row in the indexer's primary field casing
pub fn row(
    contract: &str,
    name: &str,
    symbol: &str,
    decimals: &str,
    value: &str,
    from: &str,
    to: &str,
) -> RawTransfer {
    serde_json::from_value(json!({
        "contractAddress": contract,
        "tokenName": name,
        "tokenSymbol": symbol,
        "tokenDecimal": decimals,
        "value": value,
        "from": from,
        "to": to,
    }))
    .unwrap()
}

/// A small but realistic history for [`WALLET`]
///
/// Final holdings: DAI 1.5, USDC 0 (omitted), WBTC 0.001; one row skipped.
pub fn sample_history() -> Vec<RawTransfer> {
    let wallet = WALLET.to_lowercase();
    vec![
        row(DAI, "Dai Stablecoin", "DAI", "18", "2000000000000000000", COUNTERPARTY, &wallet),
        row(USDC, "USD Coin", "USDC", "6", "5000000", COUNTERPARTY, WALLET),
        row(DAI, "Dai Stablecoin", "DAI", "18", "500000000000000000", WALLET, COUNTERPARTY),
        row(USDC, "USD Coin", "USDC", "6", "5000000", &wallet, COUNTERPARTY),
        row(WBTC, "Wrapped BTC", "WBTC", "8", "100000", COUNTERPARTY, WALLET),
        row(WBTC, "Wrapped BTC", "WBTC", "8", "not-a-number", COUNTERPARTY, WALLET),
    ]
}
