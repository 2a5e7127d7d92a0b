//! Symbol classification.
//!
//! Every symbol maps to exactly one [`AssetClass`]. The lookup checks the
//! bond, equity and ETF sets in that order and falls back to cash.

use crate::types::AssetClass;

/// Sovereign bond symbols.
pub const BOND_SYMBOLS: &[&str] = &["TX26", "TX28", "AL30", "GD30"];

/// Local equity symbols.
pub const EQUITY_SYMBOLS: &[&str] = &["YPF", "GGAL", "PAMP"];

/// ETF symbols.
pub const ETF_SYMBOLS: &[&str] = &["SPY", "QQQ", "EEM"];

/// Classifies a symbol.
///
/// Matching is exact and case-sensitive. Symbols outside the three explicit
/// sets are cash; this is not an error.
///
/// # Examples
///
/// ```
/// use sigcr_portfolio::catalog::classify;
/// use sigcr_portfolio::AssetClass;
///
/// assert_eq!(classify("AL30"), AssetClass::Bond);
/// assert_eq!(classify("GGAL"), AssetClass::Equity);
/// assert_eq!(classify("QQQ"), AssetClass::Etf);
/// assert_eq!(classify("Pesos"), AssetClass::Cash);
/// ```
#[must_use]
pub fn classify(symbol: &str) -> AssetClass {
    if BOND_SYMBOLS.contains(&symbol) {
        AssetClass::Bond
    } else if EQUITY_SYMBOLS.contains(&symbol) {
        AssetClass::Equity
    } else if ETF_SYMBOLS.contains(&symbol) {
        AssetClass::Etf
    } else {
        AssetClass::Cash
    }
}

/// Returns the explicit symbol set of a class.
///
/// Cash has no explicit members; it is the fallback.
#[must_use]
pub fn members(class: AssetClass) -> &'static [&'static str] {
    match class {
        AssetClass::Bond => BOND_SYMBOLS,
        AssetClass::Equity => EQUITY_SYMBOLS,
        AssetClass::Etf => ETF_SYMBOLS,
        AssetClass::Cash => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_sets() {
        for symbol in BOND_SYMBOLS {
            assert_eq!(classify(symbol), AssetClass::Bond);
        }
        for symbol in EQUITY_SYMBOLS {
            assert_eq!(classify(symbol), AssetClass::Equity);
        }
        for symbol in ETF_SYMBOLS {
            assert_eq!(classify(symbol), AssetClass::Etf);
        }
    }

    #[test]
    fn test_fallback_is_cash() {
        assert_eq!(classify("Pesos"), AssetClass::Cash);
        assert_eq!(classify("MERV"), AssetClass::Cash);
        assert_eq!(classify(""), AssetClass::Cash);
        // Case-sensitive
        assert_eq!(classify("spy"), AssetClass::Cash);
    }

    #[test]
    fn test_sets_are_disjoint() {
        let sets = [BOND_SYMBOLS, EQUITY_SYMBOLS, ETF_SYMBOLS];
        for (i, a) in sets.iter().enumerate() {
            for b in sets.iter().skip(i + 1) {
                assert!(a.iter().all(|s| !b.contains(s)), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for symbol in ["TX26", "YPF", "EEM", "Pesos", "XYZ"] {
            assert_eq!(classify(symbol), classify(symbol));
        }
    }

    #[test]
    fn test_members() {
        for class in AssetClass::ALL {
            for symbol in members(class) {
                assert_eq!(classify(symbol), class);
            }
        }
        assert!(members(AssetClass::Cash).is_empty());
    }
}
