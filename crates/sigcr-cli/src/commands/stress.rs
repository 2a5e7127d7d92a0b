//! Stress command implementation.
//!
//! Applies every crisis scenario to a profile.

use anyhow::Result;
use serde::Serialize;
use sigcr_dashboard::{build_dashboard, StressSection};
use tabled::Tabled;

use super::ProfileArgs;
use crate::cli::OutputFormat;
use crate::output::{format_impact, print_json, print_output, Context};

#[derive(Debug, Serialize, Tabled)]
struct StressRow {
    #[tabled(rename = "Crisis")]
    scenario: String,
    #[tabled(rename = "Impacto (%)")]
    impact: String,
}

/// Execute the stress command.
pub fn execute(args: ProfileArgs, ctx: Context) -> Result<()> {
    let dashboard = build_dashboard(args.profile)?;

    if ctx.format == OutputFormat::Json {
        print_json(&dashboard.stress)?;
        return Ok(());
    }

    ctx.header(&format!("Stress Test - {}", args.profile.label()));
    render(&dashboard.stress, ctx)
}

/// Prints the stress table, impact chart and worst/best summary.
pub fn render(section: &StressSection, ctx: Context) -> Result<()> {
    let rows: Vec<StressRow> = section
        .rows
        .iter()
        .map(|r| StressRow {
            scenario: r.scenario.clone(),
            impact: format_impact(r.impact_pct),
        })
        .collect();

    print_output(&rows, ctx.format)?;
    ctx.chart(&section.chart);

    if ctx.decorate() {
        let summary = &section.summary;
        println!(
            "Worst: {} ({})  Best: {} ({})  Average: {}",
            summary.worst_scenario,
            format_impact(summary.worst_impact_pct),
            summary.best_scenario,
            format_impact(summary.best_impact_pct),
            format_impact(summary.avg_impact_pct),
        );
    }
    Ok(())
}
