use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use walletscan::bootstrap;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // No argument speaks MCP on stdio, `serve` starts the HTTP API and
    // anything else is looked up once
    let result = match std::env::args().nth(1).as_deref() {
        None => bootstrap::run_mcp().await,
        Some("serve") => bootstrap::run().await,
        Some(wallet) => bootstrap::lookup(wallet).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "walletscan failed");
            ExitCode::FAILURE
        }
    }
}
