//! Portfolio command implementation.
//!
//! Shows the allocation tab: holdings, weights and asset classes.

use anyhow::Result;
use serde::Serialize;
use sigcr_dashboard::{portfolio_section, PortfolioSection};
use tabled::Tabled;

use super::ProfileArgs;
use crate::cli::OutputFormat;
use crate::output::{format_weight, print_json, print_output, Context};

#[derive(Debug, Serialize, Tabled)]
struct AllocationRow {
    #[tabled(rename = "Activo")]
    symbol: String,
    #[tabled(rename = "Peso (%)")]
    weight: String,
    #[tabled(rename = "Tipo")]
    class: String,
}

/// Execute the portfolio command.
pub fn execute(args: ProfileArgs, ctx: Context) -> Result<()> {
    let section = portfolio_section(args.profile);

    if ctx.format == OutputFormat::Json {
        print_json(&section)?;
        return Ok(());
    }

    ctx.header(&format!("Portfolio - {}", args.profile.label()));
    render(&section, ctx)
}

/// Prints the allocation table and weight chart.
pub fn render(section: &PortfolioSection, ctx: Context) -> Result<()> {
    let rows: Vec<AllocationRow> = section
        .rows
        .iter()
        .map(|r| AllocationRow {
            symbol: r.symbol.clone(),
            weight: format_weight(r.weight),
            class: r.class_label.clone(),
        })
        .collect();

    print_output(&rows, ctx.format)?;

    if ctx.decorate() && !section.unallocated_weight.is_zero() {
        println!("Unallocated: {}", format_weight(section.unallocated_weight));
    }
    ctx.chart(&section.chart);
    Ok(())
}
