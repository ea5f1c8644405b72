//! Route definitions for the Teams domain API

use axum::{routing::get, Router};

use super::handlers::{api_keys, configs};
use super::middleware::TeamsState;

/// Create team configuration routes
fn config_routes() -> Router<TeamsState> {
    Router::new().route(
        "/teams/{team_id}/config",
        get(configs::get_config).post(configs::set_config),
    )
}

/// Create API key management routes
fn api_key_routes() -> Router<TeamsState> {
    Router::new()
        .route("/keys", get(api_keys::list_api_keys))
        .route(
            "/teams/{team_id}/keys",
            get(api_keys::list_team_api_keys).post(api_keys::create_api_key),
        )
        .route(
            "/keys/{id}",
            get(api_keys::get_api_key)
                .put(api_keys::update_api_key)
                .delete(api_keys::delete_api_key),
        )
}

/// Create all Teams domain API routes
pub fn routes() -> Router<TeamsState> {
    Router::new().merge(config_routes()).merge(api_key_routes())
}
