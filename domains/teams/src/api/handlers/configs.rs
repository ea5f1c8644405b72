//! Team configuration handlers
//!
//! Implements per-team configuration storage:
//! - GET /teams/{team_id}/config  — Read a team's configuration
//! - POST /teams/{team_id}/config — Store a team's configuration

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use hangar_auth::AuthUser;
use hangar_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::TeamsState;
use crate::domain::auth::verified_team;
use crate::domain::entities::{Config, Theme};

// ============================================================
// DTOs
// ============================================================

/// Configuration response — the team-facing projection of a `Config` row
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub team_id: Uuid,
    pub theme: Theme,
    pub apps: serde_json::Value,
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        Self {
            team_id: config.team_id,
            theme: config.theme.0,
            apps: config.apps.0,
        }
    }
}

/// Request to store a team's configuration
#[derive(Debug, Deserialize, Validate)]
pub struct ConfigPayload {
    #[validate(nested)]
    pub theme: Theme,
    #[serde(default)]
    pub apps: serde_json::Value,
}

// ============================================================
// Handlers
// ============================================================

/// GET /teams/{team_id}/config — Read a team's configuration
///
/// Teams that never stored one get the default theme. The default is
/// materialized in memory only; no row is written on read.
pub async fn get_config(
    AuthUser(auth_context): AuthUser,
    State(state): State<TeamsState>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<ConfigResponse>> {
    let team = verified_team(&auth_context, team_id)?;

    let config = state
        .repos
        .configs
        .find_by_team(team.id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to load configuration: {}", e)))?
        .unwrap_or_else(|| Config::default_for_team(team.id));

    Ok(Json(ConfigResponse::from(config)))
}

/// POST /teams/{team_id}/config — Store a team's configuration
///
/// Inserts on the team's first write (201), overwrites afterwards (200).
pub async fn set_config(
    AuthUser(auth_context): AuthUser,
    State(state): State<TeamsState>,
    Path(team_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ConfigPayload>,
) -> Result<(StatusCode, Json<ConfigResponse>)> {
    let team = verified_team(&auth_context, team_id)?;

    let existing = state
        .repos
        .configs
        .find_by_team(team.id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to load configuration: {}", e)))?;

    match existing {
        Some(mut config) => {
            config.theme = SqlJson(payload.theme);
            config.apps = SqlJson(payload.apps);

            let saved = state
                .repos
                .configs
                .update(&config)
                .await
                .map_err(|e| Error::Internal(format!("Failed to update configuration: {}", e)))?;

            tracing::info!(team_id = %team.id, "Team configuration updated");
            Ok((StatusCode::OK, Json(ConfigResponse::from(saved))))
        }
        None => {
            let config = Config::new(team.id, payload.theme, payload.apps)?;

            // Conflict surfaces as 409 when a concurrent first POST won the insert
            let saved = state.repos.configs.create(&config).await?;

            tracing::info!(team_id = %team.id, "Team configuration created");
            Ok((StatusCode::CREATED, Json(ConfigResponse::from(saved))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_theme_json() -> serde_json::Value {
        serde_json::json!({
            "primary_color": "112233",
            "primary_background_color": "FFFFFF",
            "primary_button_color": "FFFFFF",
            "primary_button_background_color": "E94F91",
        })
    }

    #[test]
    fn test_config_payload_valid() {
        let payload: ConfigPayload = serde_json::from_value(serde_json::json!({
            "theme": valid_theme_json(),
            "apps": [{"name": "App One"}],
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.theme.primary_color, "112233");
    }

    #[test]
    fn test_config_payload_apps_defaults_to_null() {
        let payload: ConfigPayload =
            serde_json::from_value(serde_json::json!({"theme": valid_theme_json()})).unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.apps, serde_json::Value::Null);
    }

    #[test]
    fn test_config_payload_rejects_bad_hex() {
        let mut theme = valid_theme_json();
        theme["primary_color"] = serde_json::json!("#112233");

        let payload: ConfigPayload =
            serde_json::from_value(serde_json::json!({"theme": theme})).unwrap();

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_config_payload_rejects_missing_theme_field() {
        let mut theme = valid_theme_json();
        theme.as_object_mut().unwrap().remove("primary_color");

        let result: std::result::Result<ConfigPayload, _> =
            serde_json::from_value(serde_json::json!({"theme": theme}));

        assert!(result.is_err());
    }

    #[test]
    fn test_config_response_from_default() {
        let team_id = Uuid::new_v4();
        let response = ConfigResponse::from(Config::default_for_team(team_id));

        assert_eq!(response.team_id, team_id);
        assert_eq!(response.theme, Theme::default());
        assert_eq!(response.apps, serde_json::Value::Null);
    }

    #[test]
    fn test_config_response_serialization_shape() {
        let response = ConfigResponse::from(Config::default_for_team(Uuid::new_v4()));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["theme"]["primary_color"], "000000");
        assert_eq!(json["theme"]["primary_background_color"], "FFFFFF");
        assert_eq!(json["theme"]["primary_button_color"], "FFFFFF");
        assert_eq!(json["theme"]["primary_button_background_color"], "E94F91");
        // Row-level fields stay internal
        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_none());
    }
}
