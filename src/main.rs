//! Staffing Engine HTTP server.
//!
//! Environment:
//! - `STAFFING_CONFIG_DIR`: configuration directory (default `./config/default`)
//! - `STAFFING_BIND_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;

use staffing_engine::api::{AppState, create_router};
use staffing_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_dir =
        env::var("STAFFING_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("STAFFING_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let loader = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        company = %loader.config().company().name,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(address = %bind_addr, "Staffing engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
