//! Ramyeon Assistant daemon entry point.

use anyhow::Result;
use ramyeond::config::DaemonConfig;
use ramyeond::server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("ramyeond v{} starting", env!("CARGO_PKG_VERSION"));

    let config = DaemonConfig::load();
    if config.gemini.api_key.is_none() {
        info!("no completion API key configured; open turns will serve the fallback");
    }

    server::run(config).await
}
