//! Resilience score.
//!
//! The score starts at 100, meaning no loss in any crisis, and subtracts the
//! average scenario impact. It is floored at zero.

use crate::stress::{average_impact, run_stress_scenarios, Scenario};
use crate::{Portfolio, PortfolioError, PortfolioResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Converts an average impact (percent) into a score.
///
/// ```text
/// score = max(0, round(100 + avg_impact))
/// ```
///
/// Ties round half to even.
#[must_use]
pub fn score_from_average(avg_impact: Decimal) -> u32 {
    let raw = (Decimal::ONE_HUNDRED + avg_impact).round();
    if raw <= Decimal::ZERO {
        0
    } else {
        raw.to_u32().unwrap_or(u32::MAX)
    }
}

/// Computes the resilience score of a portfolio over a scenario set.
///
/// # Errors
///
/// Returns [`PortfolioError::NoScenarios`] when `scenarios` is empty.
///
/// # Examples
///
/// ```
/// use sigcr_portfolio::catalog::{resolve_profile, standard_scenarios};
/// use sigcr_portfolio::score::resilience_score;
/// use sigcr_portfolio::ProfileId;
///
/// let score = resilience_score(resolve_profile(ProfileId::Conservative), standard_scenarios())?;
/// assert_eq!(score, 57);
/// # Ok::<(), sigcr_portfolio::PortfolioError>(())
/// ```
pub fn resilience_score(portfolio: &Portfolio, scenarios: &[Scenario]) -> PortfolioResult<u32> {
    let results = run_stress_scenarios(portfolio, scenarios);
    let avg = average_impact(&results).ok_or(PortfolioError::NoScenarios)?;
    Ok(score_from_average(avg))
}
