//! One-call analysis of a portfolio.

use crate::score::{exposure_totals, score_from_average, ExposureTotals};
use crate::stress::{run_stress_scenarios, summarize_results, Scenario, StressResult, StressSummary};
use crate::{Portfolio, PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};

/// Everything the dashboard shows for one portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResilienceReport {
    /// Portfolio name.
    pub portfolio_name: String,

    /// Per-scenario results in scenario order.
    pub results: Vec<StressResult>,

    /// Worst, best and average impact.
    pub summary: StressSummary,

    /// Resilience score.
    pub score: u32,

    /// Protective and risky weight totals.
    pub exposure: ExposureTotals,
}

/// Runs the full pipeline: stress results, summary, score and exposure.
///
/// # Errors
///
/// Returns [`PortfolioError::NoScenarios`] when `scenarios` is empty.
pub fn analyze(portfolio: &Portfolio, scenarios: &[Scenario]) -> PortfolioResult<ResilienceReport> {
    let results = run_stress_scenarios(portfolio, scenarios);
    let summary = summarize_results(&results).ok_or(PortfolioError::NoScenarios)?;
    let score = score_from_average(summary.avg_impact_pct);

    Ok(ResilienceReport {
        portfolio_name: portfolio.name.clone(),
        results,
        summary,
        score,
        exposure: exposure_totals(portfolio),
    })
}
