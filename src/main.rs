//! Payroll Engine HTTP server.
//!
//! Usage: `payroll-engine [CONFIG_DIR]` (defaults to `./config`).

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./config".to_string());
    let loader = ConfigLoader::load(&config_dir)?;
    let bind_address = loader.config().server.bind_address.clone();

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, config_dir = %config_dir, "Payroll engine listening");

    axum::serve(listener, create_router(AppState::new(loader))).await?;
    Ok(())
}
