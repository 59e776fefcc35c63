//! Thermo Convert HTTP Server Binary
//!
//! Main entry point for the temperature conversion REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin thermo-server
//!
//! PORT=8080 RUST_LOG=debug cargo run --bin thermo-server
//! ```
//!
//! # Environment Variables
//!
//! - `THERMO_CONFIG`: Optional TOML config file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT` / `APP_PORT`: Server port (default: 3000)
//! - `RUST_LOG`: Log level (default: info)

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use thermo_convert::config::ServerConfig;
use thermo_convert::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Thermo Convert HTTP Server");

    let state = AppState::default();
    let app = create_router(state);

    let addr = config.socket_addr()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/api-docs", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
