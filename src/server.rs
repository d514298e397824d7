// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface: `GET /wallet/{address}`

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::{Instrument, error, info, warn};

use crate::tracing::spans;
use crate::{TransferSource, WalletAddress, WalletTracker, WalletscanError};

/// Body returned for a malformed wallet address
pub const INVALID_ADDRESS_MESSAGE: &str =
    "Invalid Ethereum address format. Expected 42 characters starting with 0x";

/// Body returned when transfer history could not be fetched
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch wallet token data. Please try again later.";

/// Build the router around a shared tracker.
pub fn router<S>(tracker: Arc<WalletTracker<S>>) -> Router
where
    S: TransferSource + 'static,
{
    Router::new()
        .route("/wallet/{address}", get(get_wallet::<S>))
        .with_state(tracker)
}

/// Serve the router on a bound listener until the process stops.
pub async fn serve<S>(listener: TcpListener, tracker: WalletTracker<S>) -> std::io::Result<()>
where
    S: TransferSource + 'static,
{
    let addr = listener.local_addr()?;
    info!(address = ?addr, "Starting server");

    axum::serve(listener, router(Arc::new(tracker))).await
}

/// Handler for `GET /wallet/{address}`.
async fn get_wallet<S>(
    State(tracker): State<Arc<WalletTracker<S>>>,
    Path(address): Path<String>,
) -> Response
where
    S: TransferSource + 'static,
{
    let span = spans::wallet_request(&address);
    async move {
        if WalletAddress::parse(&address).is_err() {
            warn!(address = %address, "Invalid Ethereum address format received");
            return (StatusCode::BAD_REQUEST, INVALID_ADDRESS_MESSAGE).into_response();
        }

        match tracker.get_wallet_tokens(&address).await {
            Ok(response) => Json(response).into_response(),
            Err(WalletscanError::Address(_)) => {
                (StatusCode::BAD_REQUEST, INVALID_ADDRESS_MESSAGE).into_response()
            }
            Err(e) => {
                error!(address = %address, error = %e, "Error fetching wallet data");
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE).into_response()
            }
        }
    }
    .instrument(span)
    .await
}
