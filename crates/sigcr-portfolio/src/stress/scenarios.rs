//! Stress scenario definitions.
//!
//! A scenario is a historical crisis expressed as one shock per asset class.
//! Shocks are signed fractional returns: `-0.7` means the class lost 70%.

use crate::types::AssetClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shock applied to each asset class.
///
/// Covers the whole [`AssetClass`] set, so looking up a shock never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassShocks {
    /// Shock for bonds.
    pub bond: Decimal,
    /// Shock for equities.
    pub equity: Decimal,
    /// Shock for ETFs.
    pub etf: Decimal,
    /// Shock for cash and unclassified symbols.
    pub cash: Decimal,
}

impl ClassShocks {
    /// Creates a shock set.
    #[must_use]
    pub fn new(bond: Decimal, equity: Decimal, etf: Decimal, cash: Decimal) -> Self {
        Self {
            bond,
            equity,
            etf,
            cash,
        }
    }

    /// The same shock for every class.
    #[must_use]
    pub fn uniform(shock: Decimal) -> Self {
        Self::new(shock, shock, shock, shock)
    }

    /// Gets the shock for a class.
    #[must_use]
    pub fn shock(&self, class: AssetClass) -> Decimal {
        match class {
            AssetClass::Bond => self.bond,
            AssetClass::Equity => self.equity,
            AssetClass::Etf => self.etf,
            AssetClass::Cash => self.cash,
        }
    }

    /// Returns a copy with one class shock replaced.
    #[must_use]
    pub fn with_shock(mut self, class: AssetClass, shock: Decimal) -> Self {
        match class {
            AssetClass::Bond => self.bond = shock,
            AssetClass::Equity => self.equity = shock,
            AssetClass::Etf => self.etf = shock,
            AssetClass::Cash => self.cash = shock,
        }
        self
    }

    /// Iterates over `(class, shock)` pairs in class order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetClass, Decimal)> + '_ {
        AssetClass::ALL.into_iter().map(move |c| (c, self.shock(c)))
    }
}

/// A named historical stress case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,

    /// Description.
    pub description: Option<String>,

    /// Per-class shocks.
    pub shocks: ClassShocks,
}

impl Scenario {
    /// Creates a new scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, shocks: ClassShocks) -> Self {
        Self {
            name: name.into(),
            description: None,
            shocks,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Gets the shock for a class.
    #[must_use]
    pub fn shock(&self, class: AssetClass) -> Decimal {
        self.shocks.shock(class)
    }
}

/// The historical Argentine crises used by the dashboard.
pub mod standard {
    use super::*;
    use rust_decimal_macros::dec;

    /// 2001 default and end of the currency board.
    #[must_use]
    pub fn crisis_2001() -> Scenario {
        Scenario::new(
            "2001",
            ClassShocks::new(dec!(-0.7), dec!(-0.6), dec!(0.2), dec!(-0.8)),
        )
        .with_description("Sovereign default and devaluation")
    }

    /// 2018 currency run.
    #[must_use]
    pub fn crisis_2018() -> Scenario {
        Scenario::new(
            "2018",
            ClassShocks::new(dec!(-0.5), dec!(-0.55), dec!(0.15), dec!(-0.6)),
        )
        .with_description("Peso run and IMF program")
    }

    /// 2023 inflation spike.
    #[must_use]
    pub fn crisis_2023() -> Scenario {
        Scenario::new(
            "2023",
            ClassShocks::new(dec!(-0.4), dec!(-0.45), dec!(0.10), dec!(-0.5)),
        )
        .with_description("Inflation spike and official devaluation")
    }

    /// Returns all standard scenarios in chronological order.
    #[must_use]
    pub fn all() -> Vec<Scenario> {
        vec![crisis_2001(), crisis_2018(), crisis_2023()]
    }
}
