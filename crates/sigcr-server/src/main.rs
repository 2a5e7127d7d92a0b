//! SIGCR server entry point.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sigcr_server::{Server, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/sigcr.toml".to_string());

    let from_file = std::path::Path::new(&config_path).exists();
    let server_config = if from_file {
        ServerConfig::from_file(&config_path)?
    } else {
        ServerConfig::default()
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| server_config.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("SIGCR Dashboard Server v{}", env!("CARGO_PKG_VERSION"));
    if from_file {
        info!("Loaded configuration from {}", config_path);
    } else {
        info!("Using default configuration");
    }

    // A broken registry is a startup failure, never a per-request one
    sigcr_portfolio::catalog()
        .validate()
        .map_err(ServerError::from)?;

    let server = Server::new(server_config);
    server.start().await?;

    Ok(())
}
