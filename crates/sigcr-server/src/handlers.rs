//! Request handlers.
//!
//! Every handler reads the process-wide catalog; there is no per-request
//! state and nothing is written.

use axum::extract::Path;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use sigcr_dashboard::{build_dashboard, Dashboard, PortfolioSection, ScoreSection, StressSection};
use sigcr_portfolio::{catalog, standard_scenarios, ProfileId, Scenario};

use crate::error::ServerResult;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// A selectable profile.
#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    /// Key used in URLs.
    pub id: ProfileId,
    /// English name.
    pub name: &'static str,
    /// Selector label.
    pub label: &'static str,
    /// Number of holdings.
    pub holdings: usize,
    /// Allocated weight (percent).
    pub total_weight: Decimal,
}

/// A section of one profile's dashboard.
#[derive(Debug, Serialize)]
pub struct ProfileResponse<T> {
    /// Profile the section belongs to.
    pub profile: ProfileId,
    /// Selector label of the profile.
    pub label: &'static str,
    /// Section payload.
    #[serde(flatten)]
    pub data: T,
}

impl<T> ProfileResponse<T> {
    fn new(profile: ProfileId, data: T) -> Json<Self> {
        Json(Self {
            profile,
            label: profile.label(),
            data,
        })
    }
}

fn parse_profile(raw: &str) -> ServerResult<ProfileId> {
    Ok(ProfileId::parse(raw)?)
}

/// List the selectable profiles.
pub async fn list_profiles() -> Json<Vec<ProfileSummary>> {
    let profiles = catalog()
        .profiles()
        .map(|(id, portfolio)| ProfileSummary {
            id,
            name: id.name(),
            label: id.label(),
            holdings: portfolio.holding_count(),
            total_weight: portfolio.total_weight(),
        })
        .collect();

    Json(profiles)
}

/// List the crisis scenarios.
pub async fn list_scenarios() -> Json<&'static [Scenario]> {
    Json(standard_scenarios())
}

/// Allocation section of a profile.
pub async fn get_profile(
    Path(profile): Path<String>,
) -> ServerResult<Json<ProfileResponse<PortfolioSection>>> {
    let profile = parse_profile(&profile)?;
    Ok(ProfileResponse::new(
        profile,
        sigcr_dashboard::portfolio_section(profile),
    ))
}

/// Stress section of a profile.
pub async fn get_stress(
    Path(profile): Path<String>,
) -> ServerResult<Json<ProfileResponse<StressSection>>> {
    let profile = parse_profile(&profile)?;
    let dashboard = build_dashboard(profile)?;
    Ok(ProfileResponse::new(profile, dashboard.stress))
}

/// Score and band of a profile.
pub async fn get_score(
    Path(profile): Path<String>,
) -> ServerResult<Json<ProfileResponse<ScoreSection>>> {
    let profile = parse_profile(&profile)?;
    let dashboard = build_dashboard(profile)?;
    Ok(ProfileResponse::new(profile, dashboard.score))
}

/// Full dashboard of a profile.
pub async fn get_dashboard(Path(profile): Path<String>) -> ServerResult<Json<Dashboard>> {
    let profile = parse_profile(&profile)?;
    Ok(Json(build_dashboard(profile)?))
}
