//! Static profile and scenario registries.
//!
//! The registries are built once on first use and never mutated, so they can
//! be shared freely across threads and requests.

mod classification;
pub mod profiles;

pub use classification::{classify, members, BOND_SYMBOLS, EQUITY_SYMBOLS, ETF_SYMBOLS};

use crate::stress::{standard, Scenario};
use crate::types::ProfileId;
use crate::{Portfolio, PortfolioError, PortfolioResult};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::standard);

/// The profile portfolios and the scenario set they are stressed against.
#[derive(Debug, Clone)]
pub struct Catalog {
    portfolios: [Portfolio; 3],
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Creates a catalog from one portfolio per profile, in
    /// [`ProfileId::ALL`] order, and a scenario set.
    #[must_use]
    pub fn new(portfolios: [Portfolio; 3], scenarios: Vec<Scenario>) -> Self {
        Self {
            portfolios,
            scenarios,
        }
    }

    /// The compiled-in catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            ProfileId::ALL.map(profiles::for_profile),
            standard::all(),
        )
    }

    /// Returns the portfolio of a profile.
    #[must_use]
    pub fn portfolio(&self, profile: ProfileId) -> &Portfolio {
        &self.portfolios[profile.index()]
    }

    /// Iterates over the profiles in selector order.
    pub fn profiles(&self) -> impl Iterator<Item = (ProfileId, &Portfolio)> + '_ {
        ProfileId::ALL.into_iter().zip(self.portfolios.iter())
    }

    /// Returns the scenarios in declaration order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Checks the registry.
    ///
    /// Every portfolio must validate, and there must be at least one scenario
    /// with no two sharing a name.
    pub fn validate(&self) -> PortfolioResult<()> {
        for (_, portfolio) in self.profiles() {
            portfolio.validate()?;
        }

        if self.scenarios.is_empty() {
            return Err(PortfolioError::NoScenarios);
        }

        let mut names = HashSet::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            if !names.insert(scenario.name.as_str()) {
                return Err(PortfolioError::invalid_portfolio(
                    "scenarios",
                    format!("duplicate scenario '{}'", scenario.name),
                ));
            }
        }

        Ok(())
    }
}

/// Returns the process-wide catalog.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Resolves a profile to its fixed portfolio.
#[must_use]
pub fn resolve_profile(profile: ProfileId) -> &'static Portfolio {
    catalog().portfolio(profile)
}

/// Resolves a profile key to its portfolio.
///
/// Fails with [`PortfolioError::UnknownProfile`] for anything outside the
/// closed profile set; there is no default.
///
/// # Examples
///
/// ```
/// use sigcr_portfolio::catalog::resolve_profile_by_name;
///
/// let portfolio = resolve_profile_by_name("Moderado").unwrap();
/// assert_eq!(portfolio.name, "Moderate");
///
/// assert!(resolve_profile_by_name("Balanced").is_err());
/// ```
pub fn resolve_profile_by_name(key: &str) -> PortfolioResult<&'static Portfolio> {
    let profile: ProfileId = key.parse()?;
    Ok(resolve_profile(profile))
}

/// Returns the standard scenario set (2001, 2018, 2023).
#[must_use]
pub fn standard_scenarios() -> &'static [Scenario] {
    catalog().scenarios()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stress::ClassShocks;
    use crate::types::Holding;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_catalog_is_valid() {
        assert!(catalog().validate().is_ok());
    }

    #[test]
    fn test_profiles_in_selector_order() {
        let ids: Vec<_> = catalog().profiles().map(|(id, _)| id).collect();
        assert_eq!(ids, ProfileId::ALL.to_vec());

        for (id, portfolio) in catalog().profiles() {
            assert_eq!(portfolio.name, id.name());
        }
    }

    #[test]
    fn test_resolve_profile_is_shared() {
        let a = resolve_profile(ProfileId::Aggressive);
        let b = resolve_profile(ProfileId::Aggressive);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.holding_count(), 9);
    }

    #[test]
    fn test_resolve_by_name() {
        assert_eq!(resolve_profile_by_name("conservative").unwrap().name, "Conservative");
        assert_eq!(resolve_profile_by_name("Agresivo").unwrap().name, "Aggressive");

        let err = resolve_profile_by_name("Balanced").unwrap_err();
        assert!(err.is_unknown_profile());
    }

    #[test]
    fn test_weights_within_bounds() {
        for (_, portfolio) in catalog().profiles() {
            assert!(portfolio.holdings.iter().all(|h| h.weight >= Decimal::ZERO));
            assert!(portfolio.total_weight() <= Decimal::ONE_HUNDRED);
            assert_eq!(
                portfolio.total_weight() + portfolio.unallocated_weight(),
                Decimal::ONE_HUNDRED
            );
        }
    }

    #[test]
    fn test_scenarios() {
        let names: Vec<_> = standard_scenarios().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["2001", "2018", "2023"]);
    }

    #[test]
    fn test_validate_rejects_bad_registry() {
        let no_scenarios = Catalog::new(ProfileId::ALL.map(profiles::for_profile), vec![]);
        assert_eq!(no_scenarios.validate(), Err(PortfolioError::NoScenarios));

        let dup = Scenario::new("2001", ClassShocks::uniform(dec!(-0.1)));
        let duplicated = Catalog::new(
            ProfileId::ALL.map(profiles::for_profile),
            vec![dup.clone(), dup],
        );
        assert!(duplicated.validate().is_err());

        let overweight = Portfolio::from_holdings(
            "Conservative",
            vec![Holding::new("AL30", dec!(80)), Holding::new("SPY", dec!(30))],
        );
        let bad = Catalog::new(
            [overweight, profiles::moderate(), profiles::aggressive()],
            standard::all(),
        );
        assert!(matches!(
            bad.validate(),
            Err(PortfolioError::InvalidPortfolio { .. })
        ));
    }
}
