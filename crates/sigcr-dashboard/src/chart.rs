//! Plain-text bar charts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const BAR: &str = "█";

/// One bar of a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Bar label (symbol or scenario name).
    pub label: String,
    /// Bar value.
    pub value: Decimal,
}

impl ChartPoint {
    /// Creates a point.
    #[must_use]
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Renders a horizontal bar chart, one line per point.
///
/// Bars are scaled so the largest absolute value spans `width` cells.
/// Negative values grow to the left of the `|` axis, positive values to the
/// right. The left area is only drawn when the series has a negative value.
///
/// ```
/// use rust_decimal_macros::dec;
/// use sigcr_dashboard::chart::{render_bar_chart, ChartPoint};
///
/// let chart = render_bar_chart(&[ChartPoint::new("SPY", dec!(10))], 4);
/// assert_eq!(chart, "SPY |████ 10\n");
/// ```
#[must_use]
pub fn render_bar_chart(series: &[ChartPoint], width: usize) -> String {
    let label_width = series
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let max_abs = series
        .iter()
        .map(|p| p.value.abs())
        .max()
        .unwrap_or(Decimal::ZERO);
    let has_negative = series.iter().any(|p| p.value < Decimal::ZERO);

    series
        .iter()
        .map(|point| {
            let bar = BAR.repeat(bar_length(point.value, max_abs, width));
            let negative = point.value < Decimal::ZERO;

            let mut line = format!("{:<lw$} ", point.label, lw = label_width);
            if has_negative {
                let left = if negative { bar.as_str() } else { "" };
                line.push_str(&format!("{:>w$}", left, w = width));
            }
            line.push('|');
            if !negative {
                line.push_str(&bar);
            }
            line.push_str(&format!(" {}\n", point.value.normalize()));
            line
        })
        .collect()
}

fn bar_length(value: Decimal, max_abs: Decimal, width: usize) -> usize {
    if max_abs.is_zero() {
        return 0;
    }
    (value.abs() * Decimal::from(width) / max_abs)
        .round()
        .to_usize()
        .unwrap_or(width)
}
