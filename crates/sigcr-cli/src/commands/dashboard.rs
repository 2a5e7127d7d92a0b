//! Dashboard command implementation.
//!
//! Prints all four sections for one profile.

use anyhow::Result;
use sigcr_dashboard::build_dashboard;

use super::ProfileArgs;
use crate::cli::OutputFormat;
use crate::output::{format_impact, format_weight, print_json, print_output, Context, KeyValue};

/// Execute the dashboard command.
pub fn execute(args: ProfileArgs, ctx: Context) -> Result<()> {
    let dashboard = build_dashboard(args.profile)?;

    match ctx.format {
        OutputFormat::Json => print_json(&dashboard)?,
        OutputFormat::Csv => {
            // One flat record per metric
            let mut rows = vec![
                KeyValue::new("profile", dashboard.profile.key()),
                KeyValue::new("score", dashboard.score.score.to_string()),
                KeyValue::new("band", dashboard.score.band.label()),
                KeyValue::new("protective_pct", format_weight(dashboard.explain.protective_pct)),
                KeyValue::new("risky_pct", format_weight(dashboard.explain.risky_pct)),
            ];
            rows.extend(dashboard.stress.rows.iter().map(|r| {
                KeyValue::new(format!("impact_{}", r.scenario), format_impact(r.impact_pct))
            }));
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Table => {
            println!("SIGCR - {}", dashboard.profile_label);

            ctx.header("Cartera");
            super::portfolio::render(&dashboard.portfolio, ctx)?;

            ctx.header("Stress Test");
            super::stress::render(&dashboard.stress, ctx)?;

            ctx.header("RA Score");
            print_output(
                &[
                    KeyValue::new("RA Score", dashboard.score.score.to_string()),
                    KeyValue::new("Band", dashboard.score.band.label()),
                ],
                ctx.format,
            )?;

            ctx.header("Explicabilidad");
            super::explain::render(&dashboard.explain, ctx)?;
        }
    }

    Ok(())
}
