//! Compiled-in profile portfolios.
//!
//! Weights are percentages and keep their declaration order, which is the
//! row order of the allocation table.

use crate::types::{Holding, ProfileId};
use crate::Portfolio;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn portfolio(profile: ProfileId, rows: &[(&str, Decimal)]) -> Portfolio {
    Portfolio::from_holdings(
        profile.name(),
        rows.iter()
            .map(|(symbol, weight)| Holding::new(*symbol, *weight))
            .collect(),
    )
}

/// Bond heavy, with a small ETF hedge and a peso cash position.
#[must_use]
pub fn conservative() -> Portfolio {
    portfolio(
        ProfileId::Conservative,
        &[
            ("TX26", dec!(20)),
            ("TX28", dec!(20)),
            ("AL30", dec!(15)),
            ("GD30", dec!(10)),
            ("SPY", dec!(10)),
            ("Pesos", dec!(15)),
        ],
    )
}

/// Bonds, local equities and global ETFs in roughly equal measure.
#[must_use]
pub fn moderate() -> Portfolio {
    portfolio(
        ProfileId::Moderate,
        &[
            ("TX26", dec!(10)),
            ("TX28", dec!(10)),
            ("AL30", dec!(15)),
            ("GD30", dec!(10)),
            ("YPF", dec!(10)),
            ("GGAL", dec!(5)),
            ("SPY", dec!(15)),
            ("QQQ", dec!(10)),
            ("Pesos", dec!(5)),
        ],
    )
}

/// Equity and ETF heavy.
#[must_use]
pub fn aggressive() -> Portfolio {
    portfolio(
        ProfileId::Aggressive,
        &[
            ("AL30", dec!(10)),
            ("GD30", dec!(10)),
            ("YPF", dec!(15)),
            ("GGAL", dec!(10)),
            ("PAMP", dec!(5)),
            ("SPY", dec!(20)),
            ("QQQ", dec!(15)),
            ("EEM", dec!(10)),
            ("Pesos", dec!(5)),
        ],
    )
}

/// Builds the portfolio for a profile.
#[must_use]
pub fn for_profile(profile: ProfileId) -> Portfolio {
    match profile {
        ProfileId::Conservative => conservative(),
        ProfileId::Moderate => moderate(),
        ProfileId::Aggressive => aggressive(),
    }
}
