//! pipeline-hello binary: standalone mode.
//! Used by: process entry.

use pipeline_hello::{server, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::debug!(port = config.port, "configuration loaded");

    server::run(&config).await?;
    Ok(())
}
