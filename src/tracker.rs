// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet lookups: validate, fetch, aggregate
//!
//! # Examples
//!
//! ```rust,no_run
//! use walletscan::{EtherscanClient, WalletTracker, WalletscanConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WalletscanConfig::from_env()?;
//! let tracker = WalletTracker::new(EtherscanClient::new(&config)?);
//!
//! let response = tracker
//!     .get_wallet_tokens("0xab66485175E65993F217B7470EA433574473A760")
//!     .await?;
//! println!("{}", walletscan::format_wallet_response(&response));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{Instrument, info};

use crate::tracing::spans;
use crate::{
    AggregationReport, TokenBalance, TransferSource, WalletAddress, WalletscanError,
    summarize_token_balances,
};

/// Token holdings for one wallet
///
/// `tokens` is always present and serializes as `[]` when the wallet holds
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletResponse {
    /// The wallet as the caller supplied it
    pub address: String,
    /// Non-zero balances sorted by display name
    pub tokens: Vec<TokenBalance>,
}

impl WalletResponse {
    /// Response for a wallet with no holdings
    pub fn empty(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            tokens: Vec::new(),
        }
    }
}

/// A [`WalletResponse`] together with aggregation diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletReport {
    /// The caller-facing response
    pub response: WalletResponse,
    /// Rows that contributed to balances
    pub processed: usize,
    /// Rows skipped for an unusable quantity
    pub skipped: usize,
}

/// Looks up token holdings through a [`TransferSource`]
///
/// Holds no mutable state; one tracker can serve concurrent lookups.
#[derive(Debug, Clone)]
pub struct WalletTracker<S> {
    source: S,
}

impl<S: TransferSource> WalletTracker<S> {
    /// Create a tracker over a transfer source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying transfer source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current token holdings for a wallet.
    ///
    /// Fails on an invalid address or a retrieval failure. An indexer reporting
    /// no transactions yields an empty token list, not an error.
    pub async fn get_wallet_tokens(&self, wallet: &str) -> Result<WalletResponse, WalletscanError> {
        Ok(self.get_wallet_report(wallet).await?.response)
    }

    /// Like [`get_wallet_tokens`](Self::get_wallet_tokens), also returning how
    /// many rows were processed and skipped.
    pub async fn get_wallet_report(&self, wallet: &str) -> Result<WalletReport, WalletscanError> {
        let wallet = WalletAddress::parse(wallet)?;
        let span = spans::get_wallet_tokens(wallet.as_str());
        self.lookup(wallet).instrument(span).await
    }

    async fn lookup(&self, wallet: WalletAddress) -> Result<WalletReport, WalletscanError> {
        let rows = match self.source.token_transfers(&wallet).await {
            Ok(rows) => rows,
            Err(e) if e.is_no_transactions() => {
                info!(wallet = %wallet, "No token transactions found");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        let AggregationReport {
            tokens,
            processed,
            skipped,
        } = summarize_token_balances(wallet.as_str(), &rows);

        Ok(WalletReport {
            response: WalletResponse {
                address: wallet.into(),
                tokens,
            },
            processed,
            skipped,
        })
    }
}

/// Plain-text summary of a wallet's holdings.
///
/// One line per token as `- Name (SYMBOL): balance`; the symbol is omitted
/// when empty and the name falls back to the contract address.
///
/// # Examples
///
/// ```
/// use walletscan::{WalletResponse, format_wallet_response};
///
/// let text = format_wallet_response(&WalletResponse::empty("0xab66485175E65993F217B7470EA433574473A760"));
/// assert_eq!(
///     text,
///     "Wallet Address: 0xab66485175E65993F217B7470EA433574473A760\nNo token balances found."
/// );
/// ```
pub fn format_wallet_response(response: &WalletResponse) -> String {
    if response.tokens.is_empty() {
        return format!(
            "Wallet Address: {}\nNo token balances found.",
            response.address
        );
    }

    let mut lines = vec![format!("Wallet Address: {}", response.address), "Tokens:".to_string()];
    for token in &response.tokens {
        let name = if token.name.is_empty() {
            &token.address
        } else {
            &token.name
        };
        if token.symbol.is_empty() {
            lines.push(format!("- {name}: {}", token.balance));
        } else {
            lines.push(format!("- {name} ({}): {}", token.symbol, token.balance));
        }
    }
    lines.join("\n")
}
