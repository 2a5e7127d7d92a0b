//! # SIGCR Dashboard
//!
//! Presentation model for the resilience dashboard.
//!
//! [`build_dashboard`] runs the core engine for one profile and returns the
//! four dashboard sections as plain serializable data:
//!
//! 1. **Portfolio** - allocation rows and a weight chart series
//! 2. **Stress Test** - impact per crisis, rounded for display, and a chart series
//! 3. **Resilience Score** - the score and its band
//! 4. **Explainability** - protective/risky split and guidance messages
//!
//! Front ends render these sections; [`chart::render_bar_chart`] is shared by
//! the terminal ones.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod band;
pub mod chart;
pub mod error;
pub mod view;

pub use band::{GuidanceMessage, MessageLevel, ScoreBand, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
pub use chart::{render_bar_chart, ChartPoint};
pub use error::{DashboardError, DashboardResult};
pub use view::{
    build_dashboard, portfolio_section, AllocationRow, Dashboard, ExplainSection,
    PortfolioSection, ScoreSection, StressRow, StressSection,
};
