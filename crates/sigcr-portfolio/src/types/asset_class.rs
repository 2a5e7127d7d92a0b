//! Asset class tags.

use serde::{Deserialize, Serialize};

/// Asset class of a holding.
///
/// A closed set: every symbol resolves to exactly one of these classes, with
/// [`AssetClass::Cash`] as the fallback for symbols outside the known sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetClass {
    /// Sovereign bonds (peso-linked and hard-dollar).
    Bond,

    /// Local equities.
    Equity,

    /// Exchange-traded funds tracking global indices.
    Etf,

    /// Local currency cash.
    Cash,
}

impl AssetClass {
    /// All classes in display order.
    pub const ALL: [AssetClass; 4] = [Self::Bond, Self::Equity, Self::Etf, Self::Cash];

    /// Returns the dashboard label for the class.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bond => "Bonos",
            Self::Equity => "Acciones",
            Self::Etf => "ETF",
            Self::Cash => "Pesos",
        }
    }

    /// Returns a short code for the class.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bond => "BOND",
            Self::Equity => "EQ",
            Self::Etf => "ETF",
            Self::Cash => "CASH",
        }
    }

    /// Returns true for classes counted as protective in the exposure split.
    ///
    /// Bonds and ETFs are protective; equities and cash are risky.
    #[must_use]
    pub fn is_protective(&self) -> bool {
        matches!(self, Self::Bond | Self::Etf)
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(AssetClass::Bond.label(), "Bonos");
        assert_eq!(AssetClass::Equity.label(), "Acciones");
        assert_eq!(AssetClass::Etf.label(), "ETF");
        assert_eq!(AssetClass::Cash.label(), "Pesos");
        assert_eq!(format!("{}", AssetClass::Cash), "Pesos");
    }

    #[test]
    fn test_protective_split() {
        let protective: Vec<_> = AssetClass::ALL
            .iter()
            .filter(|c| c.is_protective())
            .collect();
        assert_eq!(protective, vec![&AssetClass::Bond, &AssetClass::Etf]);
    }

    #[test]
    fn test_serde() {
        let class = AssetClass::Etf;
        let json = serde_json::to_string(&class).unwrap();
        let parsed: AssetClass = serde_json::from_str(&json).unwrap();
        assert_eq!(class, parsed);
    }
}
