//! # SIGCR Server
//!
//! Read-only JSON API for the resilience dashboard.
//!
//! ## Endpoints
//!
//! - `GET /health`, `GET /api/v1/health`
//! - `GET /api/v1/profiles` and `GET /api/v1/scenarios`
//! - `GET /api/v1/profiles/{profile}` - allocation
//! - `GET /api/v1/profiles/{profile}/stress` - crisis impacts
//! - `GET /api/v1/profiles/{profile}/score` - score and band
//! - `GET /api/v1/profiles/{profile}/dashboard` - all sections
//!
//! An unknown profile gets `400 Bad Request` with `{"error": ...}`.
//!
//! ## Usage
//!
//! ```ignore
//! use sigcr_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};

/// The SIGCR server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    ///
    /// Fails with [`ServerError::Config`] when `host` is not an IP address.
    pub async fn start(&self) -> ServerResult<()> {
        let addr = self.config.socket_addr()?;

        info!("Starting SIGCR server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
