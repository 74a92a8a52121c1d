use anyhow::{Context, Result};
use balance_ledger::{
    config::ServerConfig, http, processor::in_memory_processor::InMemoryLedgerProcessor,
    processor::shared::SharedLedger, telemetry,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let config = ServerConfig::from_env()?;
    let ledger = SharedLedger::new(InMemoryLedgerProcessor::new());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind `{}`", config.addr))?;
    info!(addr = %config.addr, "listening");

    axum::serve(listener, http::router(ledger))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("shutdown");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "Failed to listen for ctrl-c");
    }
}
