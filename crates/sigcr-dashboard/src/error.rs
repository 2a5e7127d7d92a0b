//! Error types for dashboard construction.

use sigcr_portfolio::PortfolioError;
use thiserror::Error;

/// Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors raised while building a dashboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Error from the portfolio core.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

impl DashboardError {
    /// Returns true if the caller asked for a profile that does not exist.
    #[must_use]
    pub fn is_unknown_profile(&self) -> bool {
        match self {
            Self::Portfolio(e) => e.is_unknown_profile(),
        }
    }
}
