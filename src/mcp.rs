// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Model Context Protocol surface: the `wallet_tracker` tool over stdio
//!
//! The tool takes `{"wallet_address": "0x..."}` and answers with the
//! plain-text summary from [`format_wallet_response`]. Lookup failures come
//! back as tool errors carrying the same messages as the HTTP surface, so the
//! session stays up.
//!
//! stdout carries the protocol; logs must go to stderr.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo, Tool},
    schemars, tool, tool_handler, tool_router,
    transport::stdio,
};
use serde::Deserialize;
use tracing::{Instrument, error, info, warn};

use crate::server::{FETCH_FAILED_MESSAGE, INVALID_ADDRESS_MESSAGE};
use crate::tracing::spans;
use crate::{TransferSource, WalletTracker, WalletscanError, format_wallet_response};

/// Name the tool is registered under
pub const WALLET_TRACKER_TOOL: &str = "wallet_tracker";

/// Arguments of the `wallet_tracker` tool
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct WalletTrackerRequest {
    /// The cryptocurrency wallet address to track
    pub wallet_address: String,
}

/// MCP server exposing a [`WalletTracker`] as the `wallet_tracker` tool
#[derive(Clone)]
pub struct WalletTrackerTool {
    tracker: Arc<WalletTracker<Arc<dyn TransferSource>>>,
    tool_router: ToolRouter<Self>,
}

impl WalletTrackerTool {
    /// Build the tool server over a transfer source.
    pub fn new<S: TransferSource + 'static>(source: S) -> Self {
        let source: Arc<dyn TransferSource> = Arc::new(source);
        Self {
            tracker: Arc::new(WalletTracker::new(source)),
            tool_router: Self::tool_router(),
        }
    }

    /// Tools this server advertises
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Serve the tool over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        info!(tool = WALLET_TRACKER_TOOL, "MCP server waiting for requests on stdio");
        let service = self.serve(stdio()).await?;
        let reason = service.waiting().await?;
        info!(reason = ?reason, "MCP session ended");
        Ok(())
    }
}

#[tool_router]
impl WalletTrackerTool {
    /// Track the balance of a cryptocurrency wallet.
    #[tool(
        name = "wallet_tracker",
        description = "Track the balance of a cryptocurrency wallet"
    )]
    pub async fn wallet_tracker(
        &self,
        Parameters(request): Parameters<WalletTrackerRequest>,
    ) -> Result<CallToolResult, McpError> {
        let span = spans::tool_call(WALLET_TRACKER_TOOL, &request.wallet_address);
        let result = self
            .tracker
            .get_wallet_tokens(&request.wallet_address)
            .instrument(span)
            .await;

        Ok(match result {
            Ok(response) => {
                CallToolResult::success(vec![Content::text(format_wallet_response(&response))])
            }
            Err(WalletscanError::Address(e)) => {
                warn!(
                    address = %request.wallet_address,
                    error = %e,
                    "Invalid Ethereum address format received"
                );
                CallToolResult::error(vec![Content::text(INVALID_ADDRESS_MESSAGE)])
            }
            Err(e) => {
                error!(
                    address = %request.wallet_address,
                    error = %e,
                    "Error fetching wallet data"
                );
                CallToolResult::error(vec![Content::text(FETCH_FAILED_MESSAGE)])
            }
        })
    }
}

#[tool_handler]
impl ServerHandler for WalletTrackerTool {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Current ERC-20 token holdings for an EVM wallet, derived from its transfer history"
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
