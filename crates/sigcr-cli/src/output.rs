//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use sigcr_dashboard::{render_bar_chart, ChartPoint, GuidanceMessage, MessageLevel};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Width of the longest bar in terminal charts.
pub const CHART_WIDTH: usize = 40;

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// True when decorations (headers, charts, messages) should be printed.
    pub fn decorate(&self) -> bool {
        self.format == OutputFormat::Table && !self.quiet
    }

    pub fn header(&self, title: &str) {
        if self.decorate() {
            print_header(title);
        }
    }

    pub fn chart(&self, series: &[ChartPoint]) {
        if self.decorate() {
            print!("{}", render_bar_chart(series, CHART_WIDTH));
        }
    }
}

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> CliResult<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a percentage with one decimal place.
pub fn format_impact(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

/// Formats a weight without trailing zeros.
pub fn format_weight(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

/// Formats a fractional shock as a signed percentage.
pub fn format_shock(value: Decimal) -> String {
    let pct = (value * Decimal::ONE_HUNDRED).normalize();
    if pct > Decimal::ZERO {
        format!("+{}%", pct)
    } else {
        format!("{}%", pct)
    }
}

/// Prints a guidance message with a marker for its level.
pub fn print_message(message: &GuidanceMessage) {
    let marker = match message.level {
        MessageLevel::Warning => "⚠".yellow(),
        MessageLevel::Info => "ℹ".blue(),
        MessageLevel::Success => "✓".green(),
    };
    println!("{} {}", marker, message.text);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
