//! Explain command implementation.
//!
//! Shows the protective/risky split behind the score and the guidance for
//! its band.

use anyhow::Result;
use sigcr_dashboard::{build_dashboard, ExplainSection};

use super::ProfileArgs;
use crate::cli::OutputFormat;
use crate::output::{format_weight, print_json, print_message, print_output, Context, KeyValue};

/// Execute the explain command.
pub fn execute(args: ProfileArgs, ctx: Context) -> Result<()> {
    let dashboard = build_dashboard(args.profile)?;

    if ctx.format == OutputFormat::Json {
        print_json(&dashboard.explain)?;
        return Ok(());
    }

    ctx.header(&format!("Why this portfolio? - {}", args.profile.label()));
    render(&dashboard.explain, ctx)
}

/// Prints the exposure split followed by the guidance messages.
pub fn render(section: &ExplainSection, ctx: Context) -> Result<()> {
    let rows = vec![
        KeyValue::new("Protective assets", format_weight(section.protective_pct)),
        KeyValue::new("Risky assets", format_weight(section.risky_pct)),
        KeyValue::new("Band", section.band.label()),
    ];
    print_output(&rows, ctx.format)?;

    // Guidance is part of the answer, so it survives --quiet
    if ctx.format == OutputFormat::Table {
        for message in &section.messages {
            print_message(message);
        }
    }
    Ok(())
}
