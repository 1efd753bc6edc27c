//! HTTP server for the offer engine.
//!
//! Reads `OFFER_CONFIG_DIR` (default `./config/default`) and `OFFER_BIND_ADDR`
//! (default `0.0.0.0:3000`) from the environment or a `.env` file.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use offer_engine::api::{AppState, create_router};
use offer_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_dir = env::var("OFFER_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("OFFER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        company = %config.company().name,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "Server listening");

    axum::serve(listener, router).await?;
    Ok(())
}
