//! Stress testing for portfolios.
//!
//! This module provides:
//! - Scenario definitions (one shock per asset class)
//! - Impact calculation as a weighted average of class shocks
//! - Multi-scenario runs and worst/best summaries
//!
//! Impacts are exact decimals; no repricing is performed.

mod impact;
mod scenarios;

pub use impact::*;
pub use scenarios::*;
