// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for Etherscan-compatible `tokentx` endpoints

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{Instrument, debug, warn};
use url::Url;

use crate::config::constants::END_BLOCK;
use crate::tracing::spans;
use crate::{FetchError, RawTransfer, WalletAddress, WalletscanConfig};

use super::{EtherscanResponse, TransferSource};

/// Bytes of an error response body kept in [`FetchError::HttpStatus`]
const ERROR_BODY_LIMIT: usize = 512;

/// Transfer source backed by the Etherscan account API
///
/// # Examples
///
/// ```rust,no_run
/// use walletscan::{EtherscanClient, TransferSource, WalletAddress, WalletscanConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WalletscanConfig::from_env()?;
/// let client = EtherscanClient::new(&config)?;
/// let wallet = WalletAddress::parse("0xab66485175E65993F217B7470EA433574473A760")?;
/// let rows = client.token_transfers(&wallet).await?;
/// println!("{} transfer rows", rows.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl EtherscanClient {
    /// Build a client from configuration.
    pub fn new(config: &WalletscanConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| FetchError::request("building HTTP client", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full request URL for a wallet's token transfer history
    pub fn request_url(&self, wallet: &WalletAddress) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("module", "account")
            .append_pair("action", "tokentx")
            .append_pair("address", wallet.as_str())
            .append_pair("startblock", "0")
            .append_pair("endblock", &END_BLOCK.to_string())
            .append_pair("sort", "asc")
            .append_pair("apikey", &self.api_key);
        url
    }

    async fn fetch(&self, wallet: &WalletAddress) -> Result<Vec<RawTransfer>, FetchError> {
        debug!(wallet = %wallet, base_url = %self.base_url, "Requesting token transfers");

        let response = self
            .http
            .get(self.request_url(wallet))
            .send()
            .await
            .map_err(|e| FetchError::request("etherscan tokentx", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = read_error_body(response).await;
            warn!(wallet = %wallet, status = status.as_u16(), "Indexer returned an error status");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::request("reading etherscan response", e))?;
        let envelope: EtherscanResponse = serde_json::from_slice(&body)
            .map_err(|e| FetchError::decode(format!("decoding etherscan response: {e}")))?;

        let transfers = envelope.into_transfers()?;
        debug!(wallet = %wallet, rows = transfers.len(), "Received token transfers");
        Ok(transfers)
    }
}

#[async_trait]
impl TransferSource for EtherscanClient {
    async fn token_transfers(&self, wallet: &WalletAddress) -> Result<Vec<RawTransfer>, FetchError> {
        let span = spans::fetch_token_transfers(wallet.as_str());
        self.fetch(wallet).instrument(span).await
    }
}

/// Read at most [`ERROR_BODY_LIMIT`] bytes of an error body.
///
/// The rest of the body is never pulled off the connection. A read failure
/// keeps whatever arrived before it.
async fn read_error_body(mut response: Response) -> String {
    let mut body = Vec::with_capacity(ERROR_BODY_LIMIT);
    while body.len() < ERROR_BODY_LIMIT {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(ERROR_BODY_LIMIT - body.len());
                body.extend_from_slice(&chunk[..take]);
            }
            Ok(None) => break,
            Err(e) => {
                debug!(error = %e, "Error body read failed");
                break;
            }
        }
    }
    decode_error_body(&body).trim().to_string()
}

/// Decode a possibly truncated body, dropping a character split by the limit.
fn decode_error_body(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) if e.error_len().is_none() => {
            String::from_utf8_lossy(&bytes[..e.valid_up_to()]).into_owned()
        }
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
