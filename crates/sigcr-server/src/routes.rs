//! Route definitions.

use axum::routing::get;
use axum::Router;

use crate::handlers;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Registries
        .route("/api/v1/profiles", get(handlers::list_profiles))
        .route("/api/v1/scenarios", get(handlers::list_scenarios))
        // Dashboard sections
        .route("/api/v1/profiles/{profile}", get(handlers::get_profile))
        .route("/api/v1/profiles/{profile}/stress", get(handlers::get_stress))
        .route("/api/v1/profiles/{profile}/score", get(handlers::get_score))
        .route("/api/v1/profiles/{profile}/dashboard", get(handlers::get_dashboard))
}
