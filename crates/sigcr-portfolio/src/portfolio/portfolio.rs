//! Portfolio struct and core methods.

use crate::types::{AssetClass, Holding};
use crate::{PortfolioError, PortfolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named set of weighted holdings.
///
/// Holdings keep their declaration order, which is also the order used by
/// the allocation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Portfolio name.
    pub name: String,

    /// Holdings in declaration order.
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::PortfolioBuilder {
        super::PortfolioBuilder::new().name(name)
    }

    /// Creates a portfolio from holdings without validation.
    ///
    /// Used for compiled-in data; call [`Portfolio::validate`] to check it.
    #[must_use]
    pub fn from_holdings(name: impl Into<String>, holdings: Vec<Holding>) -> Self {
        Self {
            name: name.into(),
            holdings,
        }
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Sum of all holding weights (percent).
    #[must_use]
    pub fn total_weight(&self) -> Decimal {
        self.holdings.iter().map(|h| h.weight).sum()
    }

    /// Percentage not assigned to any holding (100 - total weight).
    #[must_use]
    pub fn unallocated_weight(&self) -> Decimal {
        Decimal::ONE_HUNDRED - self.total_weight()
    }

    /// Looks up a holding by symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.symbol == symbol)
    }

    /// Iterates over holdings paired with their asset class.
    pub fn classified(&self) -> impl Iterator<Item = (&Holding, AssetClass)> + '_ {
        self.holdings.iter().map(|h| (h, h.asset_class()))
    }

    /// Validates the portfolio.
    ///
    /// Weights must be non-negative, symbols unique and the total weight may
    /// not exceed 100. A total below 100 is accepted; the rest is unallocated.
    pub fn validate(&self) -> PortfolioResult<()> {
        let mut seen = HashSet::with_capacity(self.holdings.len());

        for holding in &self.holdings {
            if holding.weight < Decimal::ZERO {
                return Err(PortfolioError::invalid_weight(&holding.symbol, holding.weight));
            }
            if !seen.insert(holding.symbol.as_str()) {
                return Err(PortfolioError::invalid_portfolio(
                    &self.name,
                    format!("duplicate holding '{}'", holding.symbol),
                ));
            }
        }

        let total = self.total_weight();
        if total > Decimal::ONE_HUNDRED {
            return Err(PortfolioError::invalid_portfolio(
                &self.name,
                format!("weights sum to {}, above 100", total),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_portfolio() -> Portfolio {
        Portfolio::from_holdings(
            "Test",
            vec![
                Holding::new("AL30", dec!(40)),
                Holding::new("YPF", dec!(35)),
                Holding::new("Pesos", dec!(25)),
            ],
        )
    }

    #[test]
    fn test_totals() {
        let portfolio = create_test_portfolio();
        assert_eq!(portfolio.holding_count(), 3);
        assert_eq!(portfolio.total_weight(), dec!(100));
        assert_eq!(portfolio.unallocated_weight(), dec!(0));
        assert!(portfolio.validate().is_ok());
    }

    #[test]
    fn test_get_and_classified() {
        let portfolio = create_test_portfolio();
        assert_eq!(portfolio.get("YPF").unwrap().weight, dec!(35));
        assert!(portfolio.get("SPY").is_none());

        let classes: Vec<_> = portfolio.classified().map(|(_, c)| c).collect();
        assert_eq!(
            classes,
            vec![AssetClass::Bond, AssetClass::Equity, AssetClass::Cash]
        );
    }

    #[test]
    fn test_validate_negative_weight() {
        let portfolio =
            Portfolio::from_holdings("Bad", vec![Holding::new("SPY", dec!(-5))]);
        assert!(matches!(
            portfolio.validate(),
            Err(PortfolioError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_symbol() {
        let portfolio = Portfolio::from_holdings(
            "Dup",
            vec![Holding::new("SPY", dec!(10)), Holding::new("SPY", dec!(20))],
        );
        let err = portfolio.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate holding 'SPY'"));
    }

    #[test]
    fn test_validate_overweight() {
        let portfolio = Portfolio::from_holdings(
            "Over",
            vec![Holding::new("SPY", dec!(60)), Holding::new("QQQ", dec!(50))],
        );
        let err = portfolio.validate().unwrap_err();
        assert!(err.to_string().contains("above 100"));
    }

    #[test]
    fn test_empty_portfolio_is_valid() {
        let portfolio = Portfolio::from_holdings("Empty", vec![]);
        assert!(portfolio.is_empty());
        assert_eq!(portfolio.total_weight(), Decimal::ZERO);
        assert!(portfolio.validate().is_ok());
    }
}
