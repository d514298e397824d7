use tokio::net::TcpListener;
use tracing::info;

use crate::{EtherscanClient, WalletTracker, WalletscanConfig, mcp::WalletTrackerTool, server};

/// Main entry point for the application: the `wallet_tracker` MCP tool on stdio.
pub async fn run_mcp() -> anyhow::Result<()> {
    let config = WalletscanConfig::from_env()?;
    info!(config = ?config, "Loaded configuration");

    let client = EtherscanClient::new(&config)?;
    WalletTrackerTool::new(client).serve_stdio().await
}

/// HTTP entry point: `GET /wallet/{address}` on `API_PORT`.
pub async fn run() -> anyhow::Result<()> {
    // Load configuration (and .env) from the environment
    let config = WalletscanConfig::from_env()?;
    info!(config = ?config, "Loaded configuration");

    let client = EtherscanClient::new(&config)?;
    let tracker = WalletTracker::new(client);

    let listener = TcpListener::bind(("0.0.0.0", config.listen_port)).await?;

    // Start the API server
    server::serve(listener, tracker).await?;

    Ok(())
}

/// One-shot lookup: print the holdings of `wallet` and exit.
pub async fn lookup(wallet: &str) -> anyhow::Result<()> {
    let config = WalletscanConfig::from_env()?;
    let tracker = WalletTracker::new(EtherscanClient::new(&config)?);

    let report = tracker.get_wallet_report(wallet).await?;
    if report.skipped > 0 {
        info!(
            skipped = report.skipped,
            processed = report.processed,
            "Some transfers had unusable quantities"
        );
    }

    println!("{}", crate::format_wallet_response(&report.response));
    Ok(())
}
