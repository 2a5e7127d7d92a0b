//! Score command implementation.

use anyhow::Result;
use sigcr_dashboard::build_dashboard;

use super::ProfileArgs;
use crate::cli::OutputFormat;
use crate::output::{print_json, print_output, Context, KeyValue};

/// Execute the score command.
pub fn execute(args: ProfileArgs, ctx: Context) -> Result<()> {
    let dashboard = build_dashboard(args.profile)?;
    let score = dashboard.score;

    match ctx.format {
        OutputFormat::Json => print_json(&score)?,
        OutputFormat::Table | OutputFormat::Csv => {
            ctx.header(&format!("Resilience Score - {}", args.profile.label()));
            let rows = vec![
                KeyValue::new("Profile", args.profile.key()),
                KeyValue::new("RA Score", score.score.to_string()),
                KeyValue::new("Band", score.band.label()),
            ];
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}
