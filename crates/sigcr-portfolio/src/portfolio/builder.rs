//! Portfolio builder for fluent construction.

use crate::types::Holding;
use crate::{Portfolio, PortfolioError, PortfolioResult};
use rust_decimal::Decimal;

/// Builder for constructing a validated [`Portfolio`].
///
/// # Example
///
/// ```
/// use sigcr_portfolio::Portfolio;
/// use rust_decimal_macros::dec;
///
/// let portfolio = Portfolio::builder("Custom")
///     .add_holding("AL30", dec!(60))
///     .add_holding("SPY", dec!(40))
///     .build()
///     .unwrap();
///
/// assert_eq!(portfolio.total_weight(), dec!(100));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    name: Option<String>,
    holdings: Vec<Holding>,
}

impl PortfolioBuilder {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a holding.
    #[must_use]
    pub fn add_holding(mut self, symbol: impl Into<String>, weight: Decimal) -> Self {
        self.holdings.push(Holding::new(symbol, weight));
        self
    }

    /// Adds several holdings at once.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Builds and validates the portfolio.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let name = self
            .name
            .ok_or_else(|| PortfolioError::invalid_portfolio("<unnamed>", "missing name"))?;

        let portfolio = Portfolio::from_holdings(name, self.holdings);
        portfolio.validate()?;

        Ok(portfolio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_build() {
        let portfolio = PortfolioBuilder::new()
            .name("Mix")
            .add_holding("TX26", dec!(50))
            .add_holdings(vec![Holding::new("GGAL", dec!(50))])
            .build()
            .unwrap();

        assert_eq!(portfolio.name, "Mix");
        assert_eq!(portfolio.holdings[0].symbol, "TX26");
        assert_eq!(portfolio.holdings[1].symbol, "GGAL");
    }

    #[test]
    fn test_build_requires_name() {
        let err = PortfolioBuilder::new()
            .add_holding("TX26", dec!(50))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("missing name"));
    }

    #[test]
    fn test_build_validates() {
        let result = Portfolio::builder("Neg").add_holding("QQQ", dec!(-1)).build();
        assert!(result.is_err());
    }
}
