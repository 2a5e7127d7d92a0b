//! Scenarios command implementation.

use anyhow::Result;
use serde::Serialize;
use sigcr_portfolio::standard_scenarios;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::output::{format_shock, print_json, print_output, Context};

#[derive(Debug, Serialize, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Crisis")]
    name: String,
    #[tabled(rename = "Bonos")]
    bond: String,
    #[tabled(rename = "Acciones")]
    equity: String,
    #[tabled(rename = "ETF")]
    etf: String,
    #[tabled(rename = "Pesos")]
    cash: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Execute the scenarios command.
pub fn execute(ctx: Context) -> Result<()> {
    let scenarios = standard_scenarios();

    if ctx.format == OutputFormat::Json {
        print_json(scenarios)?;
        return Ok(());
    }

    let rows: Vec<ScenarioRow> = scenarios
        .iter()
        .map(|s| ScenarioRow {
            name: s.name.clone(),
            bond: format_shock(s.shocks.bond),
            equity: format_shock(s.shocks.equity),
            etf: format_shock(s.shocks.etf),
            cash: format_shock(s.shocks.cash),
            description: s.description.clone().unwrap_or_default(),
        })
        .collect();

    ctx.header("Crisis Scenarios");
    print_output(&rows, ctx.format)?;
    Ok(())
}
