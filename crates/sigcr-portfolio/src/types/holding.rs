//! Portfolio holdings.

use crate::catalog::classify;
use crate::types::AssetClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single position in a portfolio: a symbol and its weight.
///
/// The weight is a percentage of the portfolio (0-100). The asset class is
/// not stored; it is always derived from the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Asset symbol (e.g. "AL30", "SPY", "Pesos").
    pub symbol: String,

    /// Weight as a percentage of the portfolio.
    pub weight: Decimal,
}

impl Holding {
    /// Creates a new holding.
    #[must_use]
    pub fn new(symbol: impl Into<String>, weight: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            weight,
        }
    }

    /// Returns the asset class of this holding's symbol.
    #[must_use]
    pub fn asset_class(&self) -> AssetClass {
        classify(&self.symbol)
    }

    /// Weight as a fraction of the portfolio (20 -> 0.20).
    #[must_use]
    pub fn weight_fraction(&self) -> Decimal {
        self.weight / Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_weight_fraction() {
        let h = Holding::new("TX26", dec!(20));
        assert_eq!(h.weight_fraction(), dec!(0.2));
    }

    #[test]
    fn test_asset_class_is_derived() {
        assert_eq!(Holding::new("GD30", dec!(10)).asset_class(), AssetClass::Bond);
        assert_eq!(Holding::new("EEM", dec!(10)).asset_class(), AssetClass::Etf);
        assert_eq!(Holding::new("USD", dec!(10)).asset_class(), AssetClass::Cash);
    }
}
