//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::ProfileArgs;

/// SIGCR - Portfolio resilience against Argentine crises
#[derive(Parser)]
#[command(name = "sigcr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = "table",
        env = "SIGCR_FORMAT",
        global = true
    )]
    pub format: OutputFormat,

    /// Suppress headers and charts
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the selectable investor profiles
    Profiles,

    /// List the crisis scenarios and their shocks per asset class
    Scenarios,

    /// Show the allocation of a profile
    Portfolio(ProfileArgs),

    /// Stress a profile against every crisis
    Stress(ProfileArgs),

    /// Show the resilience score of a profile
    Score(ProfileArgs),

    /// Explain the score: exposure split and guidance
    Explain(ProfileArgs),

    /// Show all dashboard sections
    Dashboard(ProfileArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
