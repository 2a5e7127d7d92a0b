//! # SIGCR Portfolio
//!
//! Profile catalog and stress/resilience engine for the SIGCR dashboard.
//!
//! Three investor profiles map to fixed portfolios of Argentine bonds, local
//! equities, global ETFs and peso cash. Each portfolio is stressed against
//! the 2001, 2018 and 2023 crises and summarized as a resilience score.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O, no logging, no caching
//! - **Exact arithmetic**: weights, shocks and impacts are [`rust_decimal::Decimal`]
//! - **Static registries**: profiles and scenarios are built once and shared read-only
//!
//! ## Quick Start
//!
//! ```rust
//! use sigcr_portfolio::prelude::*;
//!
//! let portfolio = resolve_profile(ProfileId::Conservative);
//! let results = run_stress_scenarios(portfolio, standard_scenarios());
//! assert_eq!(results[0].impact_pct, dec!(-55.5));
//!
//! let score = resilience_score(portfolio, standard_scenarios()).unwrap();
//! assert_eq!(score, 57);
//! ```
//!
//! ## Module Overview
//!
//! - [`catalog`] - Profile and scenario registries, symbol classification
//! - [`portfolio`] - Portfolio and builder types
//! - [`stress`] - Scenarios and impact calculations
//! - [`score`] - Resilience score and exposure totals
//! - [`report`] - Full analysis in one call
//! - [`types`] - Asset classes, holdings and profile ids

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod portfolio;
pub mod report;
pub mod score;
pub mod stress;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{AssetClass, Holding, ProfileId};

pub use portfolio::{Portfolio, PortfolioBuilder};

pub use catalog::{
    catalog, classify, resolve_profile, resolve_profile_by_name, standard_scenarios, Catalog,
};

pub use stress::{
    average_impact, best_case, run_stress_scenario, run_stress_scenarios, scenario_impact,
    summarize_results, worst_case, ClassShocks, Scenario, StressResult, StressSummary,
};

pub use score::{
    allocation_by_class, exposure_totals, resilience_score, score_from_average, ClassAllocation,
    ExposureTotals,
};

pub use report::{analyze, ResilienceReport};

/// Prelude module for convenient imports.
///
/// ```rust
/// use sigcr_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};

    pub use crate::types::{AssetClass, Holding, ProfileId};

    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    // Catalog
    pub use crate::catalog::{classify, resolve_profile, resolve_profile_by_name, standard_scenarios};

    // Stress testing
    pub use crate::stress::{
        run_stress_scenarios, scenario_impact, summarize_results, Scenario, StressResult,
        StressSummary,
    };

    // Score
    pub use crate::score::{allocation_by_class, exposure_totals, resilience_score, ExposureTotals};

    pub use crate::report::{analyze, ResilienceReport};

    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
