//! CLI command implementations.

pub mod dashboard;
pub mod explain;
pub mod portfolio;
pub mod profiles;
pub mod scenarios;
pub mod score;
pub mod stress;

use clap::Args;
use sigcr_portfolio::ProfileId;

/// Arguments shared by the per-profile commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct ProfileArgs {
    /// Investor profile: conservative, moderate or aggressive
    #[arg(short, long, default_value = "conservative", value_parser = parse_profile)]
    pub profile: ProfileId,
}

/// Parses a profile key, reporting the valid keys on failure.
pub fn parse_profile(s: &str) -> Result<ProfileId, String> {
    ProfileId::parse(s).map_err(|e| e.to_string())
}
