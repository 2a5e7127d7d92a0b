//! Integration tests for sigcr-portfolio.
//!
//! These tests run the full pipeline over the compiled-in profiles and check
//! the figures the dashboard shows.

use sigcr_portfolio::prelude::*;
use sigcr_portfolio::catalog::catalog;

// =============================================================================
// HELPERS
// =============================================================================

fn impacts(profile: ProfileId) -> Vec<Decimal> {
    run_stress_scenarios(resolve_profile(profile), standard_scenarios())
        .into_iter()
        .map(|r| r.impact_pct)
        .collect()
}

fn score(profile: ProfileId) -> u32 {
    resilience_score(resolve_profile(profile), standard_scenarios()).unwrap()
}

// =============================================================================
// CATALOG
// =============================================================================

#[test]
fn test_catalog_validates() {
    catalog().validate().unwrap();
}

#[test]
fn test_every_symbol_is_classified_as_expected() {
    let conservative = resolve_profile(ProfileId::Conservative);
    let classes: Vec<_> = conservative.classified().map(|(_, c)| c).collect();
    assert_eq!(
        classes,
        vec![
            AssetClass::Bond,
            AssetClass::Bond,
            AssetClass::Bond,
            AssetClass::Bond,
            AssetClass::Etf,
            AssetClass::Cash,
        ]
    );
}

#[test]
fn test_unknown_profile_fails_fast() {
    let err = resolve_profile_by_name("Balanced").unwrap_err();
    assert!(matches!(err, PortfolioError::UnknownProfile { .. }));
    assert!(err.to_string().contains("Invalid configuration key"));
}

// =============================================================================
// STRESS IMPACTS
// =============================================================================

#[test]
fn test_conservative_impacts() {
    assert_eq!(impacts(ProfileId::Conservative), vec![dec!(-55.5), dec!(-40), dec!(-32.5)]);
}

#[test]
fn test_moderate_impacts() {
    assert_eq!(impacts(ProfileId::Moderate), vec![dec!(-39.5), dec!(-30), dec!(-24.75)]);
}

#[test]
fn test_aggressive_impacts() {
    assert_eq!(impacts(ProfileId::Aggressive), vec![dec!(-27), dec!(-22.75), dec!(-19.5)]);
}

#[test]
fn test_rounded_impacts_for_display() {
    let results = run_stress_scenarios(resolve_profile(ProfileId::Moderate), standard_scenarios());
    let rounded: Vec<_> = results.iter().map(StressResult::rounded_impact).collect();
    assert_eq!(rounded, vec![dec!(-39.5), dec!(-30.0), dec!(-24.8)]);
}

#[test]
fn test_worst_scenario_is_2001_for_every_profile() {
    for profile in ProfileId::ALL {
        let results = run_stress_scenarios(resolve_profile(profile), standard_scenarios());
        let summary = summarize_results(&results).unwrap();
        assert_eq!(summary.worst_scenario, "2001");
        assert_eq!(summary.best_scenario, "2023");
    }
}

// =============================================================================
// SCORE AND EXPOSURE
// =============================================================================

#[test]
fn test_concrete_scores() {
    assert_eq!(score(ProfileId::Conservative), 57);
    assert_eq!(score(ProfileId::Moderate), 69);
    assert_eq!(score(ProfileId::Aggressive), 77);
}

#[test]
fn test_score_is_deterministic() {
    for profile in ProfileId::ALL {
        assert_eq!(score(profile), score(profile));
    }
}

#[test]
fn test_exposure_totals() {
    let expected = [
        (ProfileId::Conservative, dec!(75), dec!(15)),
        (ProfileId::Moderate, dec!(70), dec!(20)),
        (ProfileId::Aggressive, dec!(65), dec!(35)),
    ];

    for (profile, protective, risky) in expected {
        let totals = exposure_totals(resolve_profile(profile));
        assert_eq!(totals.protective_pct, protective, "{}", profile);
        assert_eq!(totals.risky_pct, risky, "{}", profile);
    }
}

#[test]
fn test_report_serializes() {
    let report = analyze(resolve_profile(ProfileId::Conservative), standard_scenarios()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["score"], 57);
    assert_eq!(json["portfolio_name"], "Conservative");
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
}

// =============================================================================
// DEGENERATE INPUTS
// =============================================================================

#[test]
fn test_empty_portfolio() {
    let empty = Portfolio::from_holdings("Empty", vec![]);

    for scenario in standard_scenarios() {
        assert_eq!(scenario_impact(&empty, scenario), Decimal::ZERO);
    }
    let totals = exposure_totals(&empty);
    assert_eq!((totals.protective_pct, totals.risky_pct), (Decimal::ZERO, Decimal::ZERO));
    assert_eq!(resilience_score(&empty, standard_scenarios()).unwrap(), 100);
}

#[test]
fn test_custom_portfolio_through_builder() {
    let portfolio = Portfolio::builder("Dollarized")
        .add_holding("GD30", dec!(50))
        .add_holding("EEM", dec!(50))
        .build()
        .unwrap();

    // 2001: 0.5 × -0.7 + 0.5 × 0.2 = -0.25
    let results = run_stress_scenarios(&portfolio, standard_scenarios());
    assert_eq!(results[0].impact_pct, dec!(-25));
}
