//! Stress impact calculations.
//!
//! The impact of a scenario is the weighted average of the per-class shocks,
//! each holding weighted by its share of the portfolio.

use super::scenarios::Scenario;
use crate::Portfolio;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of one scenario applied to a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressResult {
    /// Scenario name.
    pub scenario_name: String,

    /// Portfolio-level impact in percent (negative for a loss).
    pub impact_pct: Decimal,
}

impl StressResult {
    /// Returns true if this is a gain.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.impact_pct > Decimal::ZERO
    }

    /// Returns true if this is a loss.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.impact_pct < Decimal::ZERO
    }

    /// Impact rounded to one decimal place, as shown in the stress table.
    #[must_use]
    pub fn rounded_impact(&self) -> Decimal {
        self.impact_pct.round_dp(1)
    }
}

/// Calculates the impact of a scenario on a portfolio.
///
/// ## Formula
///
/// ```text
/// impact = Σ (weight_i / 100) × shock(class(symbol_i)) × 100
/// ```
///
/// Unclassified symbols take the cash shock. An empty portfolio has zero
/// impact.
///
/// # Returns
///
/// The percentage change in portfolio value.
#[must_use]
pub fn scenario_impact(portfolio: &Portfolio, scenario: &Scenario) -> Decimal {
    let fraction: Decimal = portfolio
        .classified()
        .map(|(h, class)| h.weight_fraction() * scenario.shock(class))
        .sum();

    fraction * Decimal::ONE_HUNDRED
}

/// Runs a single scenario on a portfolio.
#[must_use]
pub fn run_stress_scenario(portfolio: &Portfolio, scenario: &Scenario) -> StressResult {
    StressResult {
        scenario_name: scenario.name.clone(),
        impact_pct: scenario_impact(portfolio, scenario),
    }
}

/// Runs multiple scenarios on a portfolio, in scenario order.
///
/// # Example
///
/// ```
/// use sigcr_portfolio::catalog::{resolve_profile, standard_scenarios};
/// use sigcr_portfolio::stress::run_stress_scenarios;
/// use sigcr_portfolio::ProfileId;
///
/// let portfolio = resolve_profile(ProfileId::Conservative);
/// let results = run_stress_scenarios(portfolio, standard_scenarios());
///
/// for result in &results {
///     println!("{}: {:.1}%", result.scenario_name, result.impact_pct);
/// }
/// ```
#[must_use]
pub fn run_stress_scenarios(portfolio: &Portfolio, scenarios: &[Scenario]) -> Vec<StressResult> {
    scenarios
        .iter()
        .map(|s| run_stress_scenario(portfolio, s))
        .collect()
}

/// Finds the worst-case result.
///
/// Ties keep the earliest scenario.
#[must_use]
pub fn worst_case(results: &[StressResult]) -> Option<&StressResult> {
    results
        .iter()
        .reduce(|worst, r| if r.impact_pct < worst.impact_pct { r } else { worst })
}

/// Finds the best-case result.
///
/// Ties keep the earliest scenario.
#[must_use]
pub fn best_case(results: &[StressResult]) -> Option<&StressResult> {
    results
        .iter()
        .reduce(|best, r| if r.impact_pct > best.impact_pct { r } else { best })
}

/// Average impact across results, or `None` for an empty set.
#[must_use]
pub fn average_impact(results: &[StressResult]) -> Option<Decimal> {
    if results.is_empty() {
        return None;
    }

    let total: Decimal = results.iter().map(|r| r.impact_pct).sum();
    Some(total / Decimal::from(results.len()))
}

/// Summary of stress test results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressSummary {
    /// Number of scenarios tested.
    pub scenario_count: usize,

    /// Worst-case impact percentage.
    pub worst_impact_pct: Decimal,

    /// Worst-case scenario name.
    pub worst_scenario: String,

    /// Best-case impact percentage.
    pub best_impact_pct: Decimal,

    /// Best-case scenario name.
    pub best_scenario: String,

    /// Average impact percentage.
    pub avg_impact_pct: Decimal,
}

/// Creates a summary of stress test results.
#[must_use]
pub fn summarize_results(results: &[StressResult]) -> Option<StressSummary> {
    let worst = worst_case(results)?;
    let best = best_case(results)?;
    let avg_impact_pct = average_impact(results)?;

    Some(StressSummary {
        scenario_count: results.len(),
        worst_impact_pct: worst.impact_pct,
        worst_scenario: worst.scenario_name.clone(),
        best_impact_pct: best.impact_pct,
        best_scenario: best.scenario_name.clone(),
        avg_impact_pct,
    })
}
