//! Dashboard sections.
//!
//! Each section mirrors one tab of the dashboard and is built from core
//! results only; nothing here does arithmetic beyond rounding for display.

use crate::band::{GuidanceMessage, ScoreBand};
use crate::chart::ChartPoint;
use crate::error::DashboardResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sigcr_portfolio::catalog::Catalog;
use sigcr_portfolio::{
    allocation_by_class, analyze, AssetClass, ClassAllocation, ExposureTotals, Portfolio,
    ProfileId, ResilienceReport, Scenario, StressSummary,
};
use tracing::debug;

/// One row of the allocation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Asset symbol.
    pub symbol: String,
    /// Weight (percent).
    pub weight: Decimal,
    /// Asset class.
    pub asset_class: AssetClass,
    /// Asset class label.
    pub class_label: String,
}

/// Allocation tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSection {
    /// Rows in declaration order.
    pub rows: Vec<AllocationRow>,
    /// Weight per asset class.
    pub by_class: Vec<ClassAllocation>,
    /// Symbol to weight series.
    pub chart: Vec<ChartPoint>,
    /// Sum of all weights.
    pub total_weight: Decimal,
    /// Weight not assigned to any holding.
    pub unallocated_weight: Decimal,
}

impl PortfolioSection {
    /// Builds the allocation tab for a portfolio.
    #[must_use]
    pub fn build(portfolio: &Portfolio) -> Self {
        let rows: Vec<AllocationRow> = portfolio
            .classified()
            .map(|(h, class)| AllocationRow {
                symbol: h.symbol.clone(),
                weight: h.weight,
                asset_class: class,
                class_label: class.label().to_string(),
            })
            .collect();
        let chart = rows
            .iter()
            .map(|r| ChartPoint::new(&r.symbol, r.weight))
            .collect();

        Self {
            rows,
            by_class: allocation_by_class(portfolio),
            chart,
            total_weight: portfolio.total_weight(),
            unallocated_weight: portfolio.unallocated_weight(),
        }
    }
}

/// One row of the stress table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressRow {
    /// Scenario name.
    pub scenario: String,
    /// Scenario description.
    pub description: Option<String>,
    /// Impact rounded to one decimal place (percent).
    pub impact_pct: Decimal,
}

/// Stress test tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressSection {
    /// Rows in scenario order.
    pub rows: Vec<StressRow>,
    /// Scenario to impact series.
    pub chart: Vec<ChartPoint>,
    /// Worst, best and average impact, unrounded.
    pub summary: StressSummary,
}

impl StressSection {
    fn from_report(report: &ResilienceReport, scenarios: &[Scenario]) -> Self {
        let rows: Vec<StressRow> = report
            .results
            .iter()
            .zip(scenarios)
            .map(|(result, scenario)| StressRow {
                scenario: result.scenario_name.clone(),
                description: scenario.description.clone(),
                impact_pct: result.rounded_impact(),
            })
            .collect();
        let chart = rows
            .iter()
            .map(|r| ChartPoint::new(&r.scenario, r.impact_pct))
            .collect();

        Self {
            rows,
            chart,
            summary: report.summary.clone(),
        }
    }
}

/// Resilience score tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSection {
    /// Score, floored at zero.
    pub score: u32,
    /// Narrative band.
    pub band: ScoreBand,
}

impl ScoreSection {
    /// Builds the score tab.
    #[must_use]
    pub fn new(score: u32) -> Self {
        Self {
            score,
            band: ScoreBand::from_score(score),
        }
    }
}

/// Explainability tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainSection {
    /// Weight in bonds and ETFs (percent).
    pub protective_pct: Decimal,
    /// Weight in equities and cash (percent).
    pub risky_pct: Decimal,
    /// Narrative band of the score.
    pub band: ScoreBand,
    /// Guidance for the band.
    pub messages: Vec<GuidanceMessage>,
}

impl ExplainSection {
    /// Builds the explainability tab.
    #[must_use]
    pub fn new(exposure: ExposureTotals, band: ScoreBand) -> Self {
        Self {
            protective_pct: exposure.protective_pct,
            risky_pct: exposure.risky_pct,
            band,
            messages: band.messages(),
        }
    }
}

/// The full dashboard for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Selected profile.
    pub profile: ProfileId,
    /// Selector label of the profile.
    pub profile_label: String,
    /// Allocation tab.
    pub portfolio: PortfolioSection,
    /// Stress test tab.
    pub stress: StressSection,
    /// Score tab.
    pub score: ScoreSection,
    /// Explainability tab.
    pub explain: ExplainSection,
}

impl Dashboard {
    /// Builds the dashboard of a profile from a catalog.
    ///
    /// # Errors
    ///
    /// Fails only if the catalog has no scenarios.
    pub fn build(catalog: &Catalog, profile: ProfileId) -> DashboardResult<Self> {
        let portfolio = catalog.portfolio(profile);
        let scenarios = catalog.scenarios();
        let report = analyze(portfolio, scenarios)?;

        let score = ScoreSection::new(report.score);
        debug!(
            profile = profile.key(),
            score = score.score,
            band = score.band.label(),
            "built dashboard"
        );

        Ok(Self {
            profile,
            profile_label: profile.label().to_string(),
            portfolio: PortfolioSection::build(portfolio),
            stress: StressSection::from_report(&report, scenarios),
            explain: ExplainSection::new(report.exposure, score.band),
            score,
        })
    }
}

/// Builds the dashboard of a profile from the compiled-in catalog.
///
/// # Errors
///
/// Fails only if the catalog has no scenarios.
///
/// # Examples
///
/// ```
/// use sigcr_dashboard::{build_dashboard, ScoreBand};
/// use sigcr_portfolio::ProfileId;
///
/// let dashboard = build_dashboard(ProfileId::Moderate)?;
/// assert_eq!(dashboard.score.score, 69);
/// assert_eq!(dashboard.score.band, ScoreBand::Medium);
/// # Ok::<(), sigcr_dashboard::DashboardError>(())
/// ```
pub fn build_dashboard(profile: ProfileId) -> DashboardResult<Dashboard> {
    Dashboard::build(sigcr_portfolio::catalog(), profile)
}

/// Builds only the allocation tab of a profile.
#[must_use]
pub fn portfolio_section(profile: ProfileId) -> PortfolioSection {
    PortfolioSection::build(sigcr_portfolio::resolve_profile(profile))
}
