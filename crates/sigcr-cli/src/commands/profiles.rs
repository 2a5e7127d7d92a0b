//! Profiles command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{format_weight, print_output, Context};

#[derive(Debug, Serialize, Tabled)]
struct ProfileRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Profile")]
    name: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Holdings")]
    holdings: usize,
    #[tabled(rename = "Allocated")]
    allocated: String,
}

/// Execute the profiles command.
pub fn execute(ctx: Context) -> Result<()> {
    let rows: Vec<ProfileRow> = sigcr_portfolio::catalog()
        .profiles()
        .map(|(id, portfolio)| ProfileRow {
            key: id.key(),
            name: id.name(),
            label: id.label(),
            holdings: portfolio.holding_count(),
            allocated: format_weight(portfolio.total_weight()),
        })
        .collect();

    ctx.header("Investor Profiles");
    print_output(&rows, ctx.format)?;
    Ok(())
}
