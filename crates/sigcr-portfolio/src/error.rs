//! Error types for the catalog and the stress engine.
//!
//! This module defines the error types used throughout the portfolio crate.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// A profile key outside the closed profile set.
    #[error("Invalid configuration key: unknown profile '{key}' (expected one of: {expected})")]
    UnknownProfile {
        /// The key that was requested.
        key: String,
        /// Comma-separated list of the accepted keys.
        expected: String,
    },

    /// Invalid portfolio definition.
    #[error("Invalid portfolio '{name}': {reason}")]
    InvalidPortfolio {
        /// The portfolio name.
        name: String,
        /// The reason the portfolio is invalid.
        reason: String,
    },

    /// Invalid weight (negative).
    #[error("Invalid weight for holding '{symbol}': {value}")]
    InvalidWeight {
        /// The holding symbol.
        symbol: String,
        /// The invalid weight value.
        value: String,
    },

    /// A scenario set with nothing to average over.
    #[error("Scenario set is empty")]
    NoScenarios,
}

impl PortfolioError {
    /// Create an unknown profile error.
    #[must_use]
    pub fn unknown_profile(key: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::UnknownProfile {
            key: key.into(),
            expected: expected.into(),
        }
    }

    /// Create an invalid portfolio error.
    #[must_use]
    pub fn invalid_portfolio(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPortfolio {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid weight error.
    #[must_use]
    pub fn invalid_weight(symbol: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidWeight {
            symbol: symbol.into(),
            value: value.to_string(),
        }
    }

    /// Returns true if this error comes from a bad caller-supplied key.
    #[must_use]
    pub fn is_unknown_profile(&self) -> bool {
        matches!(self, Self::UnknownProfile { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::unknown_profile("Balanced", "conservative, moderate, aggressive");
        assert!(err.to_string().contains("Invalid configuration key"));
        assert!(err.to_string().contains("Balanced"));
        assert!(err.to_string().contains("aggressive"));

        let err = PortfolioError::invalid_portfolio("Conservative", "weights exceed 100");
        assert!(err.to_string().contains("Conservative"));
        assert!(err.to_string().contains("weights exceed 100"));

        let err = PortfolioError::invalid_weight("SPY", -5);
        assert!(err.to_string().contains("SPY"));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_error_kind() {
        assert!(PortfolioError::unknown_profile("x", "y").is_unknown_profile());
        assert!(!PortfolioError::NoScenarios.is_unknown_profile());
    }
}
