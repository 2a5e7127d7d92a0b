//! Server error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sigcr_dashboard::DashboardError;
use sigcr_portfolio::PortfolioError;
use thiserror::Error;
use tracing::{error, warn};

/// Server error type.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the portfolio core.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// Error building a dashboard.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

impl ServerError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Portfolio(e) if e.is_unknown_profile() => StatusCode::BAD_REQUEST,
            Self::Dashboard(e) if e.is_unknown_profile() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            warn!(%status, "rejected request: {}", self);
        } else {
            error!(%status, "request failed: {}", self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Server result type.
pub type ServerResult<T> = Result<T, ServerError>;
