//! Investor profile identifiers.

use crate::error::{PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Investor risk profile.
///
/// The selector offers exactly these three choices; each maps to one fixed
/// portfolio in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileId {
    /// Capital preservation, bond heavy.
    Conservative,

    /// Balanced between bonds, equities and ETFs.
    Moderate,

    /// Growth oriented, equity and ETF heavy.
    Aggressive,
}

impl ProfileId {
    /// All profiles in selector order.
    pub const ALL: [ProfileId; 3] = [Self::Conservative, Self::Moderate, Self::Aggressive];

    /// Position of the profile in [`ProfileId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the machine key used on the command line and in URLs.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }

    /// Returns the English display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        }
    }

    /// Returns the selector label shown on the dashboard.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservador",
            Self::Moderate => "Moderado",
            Self::Aggressive => "Agresivo",
        }
    }

    /// Comma-separated list of accepted keys, for error messages.
    #[must_use]
    pub fn expected_keys() -> String {
        Self::ALL
            .iter()
            .map(ProfileId::key)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parses a profile key, failing on anything outside the closed set.
    ///
    /// Accepts the key, the English name and the dashboard label, ignoring
    /// case and surrounding whitespace. Never falls back to a default.
    pub fn parse(s: &str) -> PortfolioResult<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| {
                [p.key(), p.name(), p.label()]
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| PortfolioError::unknown_profile(s, Self::expected_keys()))
    }
}

impl FromStr for ProfileId {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
