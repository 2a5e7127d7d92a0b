//! Weight aggregation by asset class.

use crate::types::AssetClass;
use crate::Portfolio;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Protective versus risky weight split.
///
/// Protective weight is held in bonds and ETFs, risky weight in equities and
/// cash. Unallocated weight counts toward neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExposureTotals {
    /// Weight in protective classes (percent).
    pub protective_pct: Decimal,

    /// Weight in risky classes (percent).
    pub risky_pct: Decimal,
}

impl ExposureTotals {
    /// Combined weight of both groups.
    #[must_use]
    pub fn total_pct(&self) -> Decimal {
        self.protective_pct + self.risky_pct
    }
}

/// Sums holding weights into protective and risky totals.
///
/// An empty portfolio gives `(0, 0)`.
#[must_use]
pub fn exposure_totals(portfolio: &Portfolio) -> ExposureTotals {
    portfolio
        .classified()
        .fold(ExposureTotals::default(), |mut totals, (holding, class)| {
            if class.is_protective() {
                totals.protective_pct += holding.weight;
            } else {
                totals.risky_pct += holding.weight;
            }
            totals
        })
}

/// Weight held in one asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAllocation {
    /// The asset class.
    pub asset_class: AssetClass,

    /// Total weight (percent).
    pub weight: Decimal,
}

/// Weight per asset class, in class order.
///
/// Every class is present, including those with zero weight.
#[must_use]
pub fn allocation_by_class(portfolio: &Portfolio) -> Vec<ClassAllocation> {
    AssetClass::ALL
        .into_iter()
        .map(|asset_class| ClassAllocation {
            asset_class,
            weight: portfolio
                .classified()
                .filter(|(_, class)| *class == asset_class)
                .map(|(h, _)| h.weight)
                .sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::profiles;
    use rust_decimal_macros::dec;

    #[test]
    fn test_conservative_exposure() {
        let totals = exposure_totals(&profiles::conservative());
        // Bonds 65 + ETF 10 / Pesos 15
        assert_eq!(totals.protective_pct, dec!(75));
        assert_eq!(totals.risky_pct, dec!(15));
        assert_eq!(totals.total_pct(), dec!(90));
    }

    #[test]
    fn test_empty_exposure() {
        let empty = Portfolio::from_holdings("Empty", vec![]);
        let totals = exposure_totals(&empty);
        assert_eq!(totals.protective_pct, Decimal::ZERO);
        assert_eq!(totals.risky_pct, Decimal::ZERO);
    }

    #[test]
    fn test_allocation_by_class() {
        let alloc = allocation_by_class(&profiles::moderate());
        let weights: Vec<_> = alloc.iter().map(|a| (a.asset_class, a.weight)).collect();
        assert_eq!(
            weights,
            vec![
                (AssetClass::Bond, dec!(45)),
                (AssetClass::Equity, dec!(15)),
                (AssetClass::Etf, dec!(25)),
                (AssetClass::Cash, dec!(5)),
            ]
        );
    }

    #[test]
    fn test_allocation_keeps_empty_classes() {
        let alloc = allocation_by_class(&profiles::conservative());
        assert_eq!(alloc.len(), 4);
        assert_eq!(alloc[1].asset_class, AssetClass::Equity);
        assert_eq!(alloc[1].weight, Decimal::ZERO);
    }
}
