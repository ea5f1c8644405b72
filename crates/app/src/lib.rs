//! Hangar application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use hangar_auth::{AuthBackend, AuthConfig};
use hangar_common::Config;
use hangar_teams::{TeamsRepositories, TeamsState};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Create repositories
    let teams_repos = TeamsRepositories::new(pool.clone());

    // Create auth backend
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret,
        issuer: config.jwt_issuer,
        audience: config.jwt_audience,
    };
    let auth = AuthBackend::new(pool, auth_config);

    // Create Teams domain state
    let teams_state = TeamsState {
        repos: teams_repos,
        auth,
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Hangar API v0.1.0" }))
        .merge(hangar_teams::routes().with_state(teams_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
