//! Score bands and guidance copy.

use serde::{Deserialize, Serialize};

/// Score at which a portfolio stops being low resilience.
pub const MEDIUM_THRESHOLD: u32 = 60;

/// Score at which a portfolio becomes high resilience.
pub const HIGH_THRESHOLD: u32 = 75;

/// Narrative band of a resilience score.
///
/// Bands are half-open: `[0, 60)`, `[60, 75)` and `[75, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Score below 60.
    Low,
    /// Score from 60 up to 75.
    Medium,
    /// Score of 75 or more.
    High,
}

impl ScoreBand {
    /// Classifies a score.
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score < MEDIUM_THRESHOLD {
            Self::Low
        } else if score < HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Short label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Guidance shown for this band, in display order.
    #[must_use]
    pub fn messages(&self) -> Vec<GuidanceMessage> {
        match self {
            Self::Low => vec![
                GuidanceMessage::new(
                    MessageLevel::Warning,
                    "Low resilience: high exposure to Argentine risk.",
                ),
                GuidanceMessage::new(
                    MessageLevel::Info,
                    "Consider increasing global ETFs or hard-dollar bonds.",
                ),
            ],
            Self::Medium => vec![GuidanceMessage::new(
                MessageLevel::Info,
                "Medium resilience: balanced portfolio with controlled risk.",
            )],
            Self::High => vec![GuidanceMessage::new(
                MessageLevel::Success,
                "High resilience: good protection against Argentine crises.",
            )],
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity of a guidance message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Cautionary.
    Warning,
    /// Neutral or a suggestion.
    Info,
    /// Positive.
    Success,
}

/// One line of guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceMessage {
    /// Severity.
    pub level: MessageLevel,
    /// Message text.
    pub text: String,
}

impl GuidanceMessage {
    /// Creates a message.
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_points() {
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(74), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(75), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(100), ScoreBand::High);
    }

    #[test]
    fn test_low_band_has_warning_and_suggestion() {
        let messages = ScoreBand::Low.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].level, MessageLevel::Warning);
        assert!(messages[0].text.starts_with("Low resilience"));
        assert_eq!(messages[1].level, MessageLevel::Info);
        assert!(messages[1].text.contains("hard-dollar bonds"));
    }

    #[test]
    fn test_single_message_bands() {
        let medium = ScoreBand::Medium.messages();
        assert_eq!(medium.len(), 1);
        assert_eq!(medium[0].level, MessageLevel::Info);

        let high = ScoreBand::High.messages();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].level, MessageLevel::Success);
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&ScoreBand::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&MessageLevel::Warning).unwrap(), "\"warning\"");
    }
}
