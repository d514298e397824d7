//! Span creation helpers for walletscan operations.
//!
//! Telemetry concerns are kept apart from business logic: instead of
//! `#[instrument]` attributes, each instrumented operation has a span helper
//! here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> T {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

/// Create span for folding canonical transfers into balances.
///
/// Parent: summarize_token_balances or get_wallet_tokens span
/// Children: None
#[inline]
pub(crate) fn aggregate_balances(wallet: &str) -> Span {
    tracing::debug_span!("walletscan.aggregate_balances", wallet = %wallet)
}

/// Create span for normalizing and aggregating raw indexer rows.
///
/// Parent: get_wallet_tokens span
/// Children: None
#[inline]
pub(crate) fn summarize_token_balances(wallet: &str, record_count: usize) -> Span {
    tracing::debug_span!(
        "walletscan.summarize_token_balances",
        wallet = %wallet,
        record_count = record_count,
    )
}

/// Create span for fetching token transfer history from the indexer.
///
/// Parent: get_wallet_tokens span
/// Children: HTTP request
#[inline]
pub(crate) fn fetch_token_transfers(wallet: &str) -> Span {
    tracing::debug_span!("walletscan.fetch_token_transfers", wallet = %wallet)
}

/// Create span for a full wallet lookup.
///
/// This is the main public API entry point.
///
/// Parent: None (root span for this operation)
/// Children: fetch_token_transfers, summarize_token_balances spans
#[inline]
pub(crate) fn get_wallet_tokens(wallet: &str) -> Span {
    tracing::info_span!("walletscan.get_wallet_tokens", wallet = %wallet)
}

/// Create span for serving one HTTP wallet request.
///
/// Parent: None
/// Children: get_wallet_tokens span
#[inline]
pub(crate) fn wallet_request(wallet: &str) -> Span {
    tracing::info_span!("walletscan.wallet_request", wallet = %wallet)
}

/// Create span for one MCP tool invocation.
///
/// Parent: None
/// Children: get_wallet_tokens span
#[inline]
pub(crate) fn tool_call(tool: &str, wallet: &str) -> Span {
    tracing::info_span!("walletscan.tool_call", tool = %tool, wallet = %wallet)
}
