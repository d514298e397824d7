// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-token balance accumulation for one wallet

use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::{debug, info, warn};

use crate::tracing::spans;
use crate::{
    CanonicalTransfer, RawTransfer, TokenBalance, TokenDecimals, TokenQuantity, TransferError,
    format_token_balance, normalize,
};

/// How a transfer moves the target wallet's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Wallet received the tokens from someone else
    Incoming,
    /// Wallet sent the tokens to someone else
    Outgoing,
    /// Wallet sent the tokens to itself
    SelfTransfer,
    /// Wallet is neither sender nor receiver
    Unrelated,
}

impl Direction {
    /// Classify a transfer against a wallet, ignoring ASCII case.
    ///
    /// The four outcomes are mutually exclusive, so a self-transfer can never
    /// be counted as both a credit and a debit.
    pub fn classify(wallet: &str, from: &str, to: &str) -> Self {
        match (to.eq_ignore_ascii_case(wallet), from.eq_ignore_ascii_case(wallet)) {
            (true, false) => Direction::Incoming,
            (false, true) => Direction::Outgoing,
            (true, true) => Direction::SelfTransfer,
            (false, false) => Direction::Unrelated,
        }
    }
}

/// Running total and identity metadata for one token contract
///
/// Metadata comes from the first transfer seen for the contract and is never
/// overwritten by later records, even when they disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAggregate {
    address: String,
    name: String,
    symbol: String,
    decimals: TokenDecimals,
    balance: BigInt,
}

impl TokenAggregate {
    fn first_seen(transfer: &CanonicalTransfer) -> Self {
        Self {
            address: transfer.contract_address().to_string(),
            name: transfer.display_name().to_string(),
            symbol: transfer.display_symbol().to_string(),
            decimals: transfer.decimals(),
            balance: BigInt::zero(),
        }
    }

    /// Add a received quantity
    pub fn credit(&mut self, quantity: &TokenQuantity) {
        self.balance += quantity.to_bigint();
    }

    /// Subtract a sent quantity
    pub fn debit(&mut self, quantity: &TokenQuantity) {
        self.balance -= quantity.to_bigint();
    }

    /// Token contract address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Display name from the first record
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display symbol from the first record
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Decimals from the first record
    pub fn decimals(&self) -> TokenDecimals {
        self.decimals
    }

    /// Raw signed balance
    pub fn balance(&self) -> &BigInt {
        &self.balance
    }

    fn into_token_balance(self) -> TokenBalance {
        TokenBalance {
            balance: format_token_balance(Some(&self.balance), self.decimals),
            address: self.address,
            name: self.name,
            symbol: self.symbol,
        }
    }
}

/// Outcome of one aggregation call
///
/// `tokens` is empty both when the wallet had no transfers and when every
/// transfer was skipped; the counters tell the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationReport {
    /// Non-zero balances sorted by case-insensitive display name
    pub tokens: Vec<TokenBalance>,
    /// Records that contributed to an aggregate
    pub processed: usize,
    /// Records dropped because their quantity was missing or malformed
    pub skipped: usize,
}

impl AggregationReport {
    /// Total records seen, usable or not
    pub fn total_records(&self) -> usize {
        self.processed + self.skipped
    }
}

/// Folds transfers into per-token balances for one target wallet
///
/// Feed records with [`apply`](Self::apply), [`skip`](Self::skip) or
/// [`push`](Self::push) in any order, then call [`finish`](Self::finish).
/// Integer addition commutes, so the final balances do not depend on the
/// order of application.
#[derive(Debug, Clone)]
pub struct BalanceAggregator {
    wallet: String,
    aggregates: HashMap<String, TokenAggregate>,
    processed: usize,
    skipped: usize,
}

impl BalanceAggregator {
    /// Create an aggregator for a target wallet.
    ///
    /// The wallet is not validated here; callers check address syntax first.
    pub fn new(wallet: &str) -> Self {
        Self {
            wallet: wallet.to_ascii_lowercase(),
            aggregates: HashMap::new(),
            processed: 0,
            skipped: 0,
        }
    }

    /// Lowercased target wallet
    pub fn wallet(&self) -> &str {
        &self.wallet
    }

    /// Apply one usable transfer.
    pub fn apply(&mut self, transfer: &CanonicalTransfer) {
        let aggregate = self
            .aggregates
            .entry(transfer.contract_address().to_string())
            .or_insert_with(|| TokenAggregate::first_seen(transfer));

        match Direction::classify(&self.wallet, transfer.from(), transfer.to()) {
            Direction::Incoming => aggregate.credit(transfer.quantity()),
            Direction::Outgoing => aggregate.debit(transfer.quantity()),
            Direction::SelfTransfer | Direction::Unrelated => {}
        }

        self.processed += 1;
    }

    /// Record a transfer that could not be normalized.
    pub fn skip(&mut self, error: &TransferError) {
        warn!(
            contract = %error.contract(),
            tx_hash = error.tx_hash().unwrap_or("unknown"),
            error = %error,
            "Skipping transfer with unusable quantity"
        );
        self.skipped += 1;
    }

    /// Apply a normalization result, skipping it when it failed.
    pub fn push(&mut self, record: Result<CanonicalTransfer, TransferError>) {
        match record {
            Ok(transfer) => self.apply(&transfer),
            Err(error) => self.skip(&error),
        }
    }

    /// Current raw balance for a contract, if any transfer for it was applied
    pub fn balance_of(&self, contract: &str) -> Option<&BigInt> {
        self.aggregates.get(contract).map(TokenAggregate::balance)
    }

    /// Drop zero balances, sort and render the rest.
    pub fn finish(self) -> AggregationReport {
        let Self {
            wallet,
            aggregates,
            processed,
            skipped,
        } = self;

        if processed == 0 && skipped == 0 {
            debug!(wallet = %wallet, "No transfers to aggregate");
        } else if processed == 0 {
            warn!(wallet = %wallet, skipped, "Every transfer was skipped");
        }

        let mut remaining: Vec<TokenAggregate> = aggregates
            .into_values()
            .filter(|aggregate| !aggregate.balance.is_zero())
            .collect();

        remaining.sort_by_cached_key(|aggregate| {
            (aggregate.name.to_lowercase(), aggregate.address.clone())
        });

        let tokens: Vec<TokenBalance> = remaining
            .into_iter()
            .map(TokenAggregate::into_token_balance)
            .collect();

        info!(
            wallet = %wallet,
            tokens = tokens.len(),
            processed,
            skipped,
            "Aggregated token balances"
        );

        AggregationReport {
            tokens,
            processed,
            skipped,
        }
    }
}

/// Aggregate already-normalized transfers for a wallet.
pub fn aggregate_transfers<I>(wallet: &str, transfers: I) -> AggregationReport
where
    I: IntoIterator<Item = CanonicalTransfer>,
{
    let span = spans::aggregate_balances(wallet);
    let _guard = span.enter();

    let mut aggregator = BalanceAggregator::new(wallet);
    for transfer in transfers {
        aggregator.apply(&transfer);
    }
    aggregator.finish()
}

/// Normalize raw indexer rows and aggregate them for a wallet.
///
/// Rows with a missing or malformed quantity are counted in
/// [`AggregationReport::skipped`] and otherwise ignored.
pub fn summarize_token_balances(wallet: &str, transfers: &[RawTransfer]) -> AggregationReport {
    let span = spans::summarize_token_balances(wallet, transfers.len());
    let _guard = span.enter();

    let mut aggregator = BalanceAggregator::new(wallet);
    for raw in transfers {
        aggregator.push(normalize(raw));
    }
    aggregator.finish()
}
