//! SIGCR CLI - Portfolio resilience dashboard in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the selectable profiles
//! sigcr profiles
//!
//! # Allocation of a profile
//! sigcr portfolio --profile moderate
//!
//! # Impact of the 2001, 2018 and 2023 crises
//! sigcr stress --profile aggressive
//!
//! # Resilience score as JSON
//! sigcr score --profile conservative --format json
//!
//! # All four sections
//! sigcr dashboard --profile moderado
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use error::CliError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Registry problems are configuration errors, reported before any command runs
    sigcr_portfolio::catalog()
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let ctx = output::Context::new(cli.format, cli.quiet);

    match cli.command {
        Commands::Profiles => commands::profiles::execute(ctx)?,
        Commands::Scenarios => commands::scenarios::execute(ctx)?,
        Commands::Portfolio(args) => commands::portfolio::execute(args, ctx)?,
        Commands::Stress(args) => commands::stress::execute(args, ctx)?,
        Commands::Score(args) => commands::score::execute(args, ctx)?,
        Commands::Explain(args) => commands::explain::execute(args, ctx)?,
        Commands::Dashboard(args) => commands::dashboard::execute(args, ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with table, JSON or CSV output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "sigcr=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
