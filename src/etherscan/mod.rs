// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer history retrieval
//!
//! [`TransferSource`] is the seam between the aggregation core and whatever
//! indexer supplies transfer rows. [`EtherscanClient`] implements it against
//! Etherscan-compatible `account/tokentx` endpoints.
//!
//! The "no transactions found" answer is surfaced as
//! [`FetchError::NoTransactions`]; callers map it to an empty history.

mod client;
mod response;

pub use client::EtherscanClient;
pub use response::{EtherscanResponse, NO_TRANSACTIONS_FOUND};

use async_trait::async_trait;

use crate::{FetchError, RawTransfer, WalletAddress};

/// Supplier of raw ERC-20 transfer rows for a wallet
///
/// Implementations should return rows in whatever order the indexer provides;
/// aggregation does not depend on order.
#[async_trait]
pub trait TransferSource: Send + Sync {
    /// Fetch every token transfer involving `wallet`.
    async fn token_transfers(&self, wallet: &WalletAddress) -> Result<Vec<RawTransfer>, FetchError>;
}

#[async_trait]
impl<T: TransferSource + ?Sized> TransferSource for std::sync::Arc<T> {
    async fn token_transfers(&self, wallet: &WalletAddress) -> Result<Vec<RawTransfer>, FetchError> {
        (**self).token_transfers(wallet).await
    }
}
