//! API key management handlers
//!
//! Implements API key CRUD operations:
//! - GET /keys                  — List the caller's API keys
//! - GET /teams/{team_id}/keys  — List a team's API keys
//! - POST /teams/{team_id}/keys — Issue a new API key for a team
//! - GET /keys/{id}             — Get a single API key
//! - PUT /keys/{id}             — Update an API key's name, type and expiry
//! - DELETE /keys/{id}          — Delete an API key

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use hangar_auth::AuthUser;
use hangar_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::TeamsState;
use crate::domain::auth::{can_access_key, verified_team};
use crate::domain::entities::ApiKey;

// ============================================================
// DTOs
// ============================================================

/// API key display projection — never exposes `token`
#[derive(Debug, Serialize)]
pub struct ApiKeyResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub team_id: Option<Uuid>,
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: i32,
    pub expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<ApiKey> for ApiKeyResponse {
    fn from(key: ApiKey) -> Self {
        Self {
            id: key.id,
            user_id: key.user_id,
            team_id: key.team_id,
            name: key.name,
            key_type: key.key_type,
            expires: key.expires,
            created_at: key.created_at,
        }
    }
}

/// Request to create or update an API key
#[derive(Debug, Deserialize, Validate)]
pub struct ApiKeyRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: i32,
    pub expires: Option<DateTime<Utc>>,
}

// ============================================================
// Handlers
// ============================================================

/// GET /keys — List all API keys issued by the authenticated user
pub async fn list_api_keys(
    AuthUser(auth_context): AuthUser,
    State(state): State<TeamsState>,
) -> Result<Json<Vec<ApiKeyResponse>>> {
    let keys = state
        .repos
        .api_keys
        .list_by_user(auth_context.user.id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to list API keys: {}", e)))?;

    Ok(Json(keys.into_iter().map(ApiKeyResponse::from).collect()))
}

/// GET /teams/{team_id}/keys — List a team's API keys
pub async fn list_team_api_keys(
    AuthUser(auth_context): AuthUser,
    State(state): State<TeamsState>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<ApiKeyResponse>>> {
    let team = verified_team(&auth_context, team_id)?;

    let keys = state
        .repos
        .api_keys
        .list_by_team(team.id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to list API keys: {}", e)))?;

    Ok(Json(keys.into_iter().map(ApiKeyResponse::from).collect()))
}

/// POST /teams/{team_id}/keys — Issue a new API key for a team
///
/// The token is generated server-side; the response is the only place
/// it is ever returned alongside the key's metadata.
pub async fn create_api_key(
    AuthUser(auth_context): AuthUser,
    State(state): State<TeamsState>,
    Path(team_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<ApiKeyRequest>,
) -> Result<(StatusCode, Json<ApiKey>)> {
    let team = verified_team(&auth_context, team_id)?;

    // Validate expires is in the future
    if let Some(expires) = request.expires {
        if expires <= Utc::now() {
            return Err(Error::Validation(
                "expires must be in the future".to_string(),
            ));
        }
    }

    let api_key = ApiKey::new(
        auth_context.user.id,
        Some(team.id),
        request.name,
        request.key_type,
        request.expires,
    )?;

    let created = state
        .repos
        .api_keys
        .create(&api_key)
        .await
        .map_err(|e| Error::Internal(format!("Failed to create API key: {}", e)))?;

    tracing::info!(team_id = %team.id, api_key_id = %created.id, "API key issued");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /keys/{id} — Get a single API key
pub async fn get_api_key(
    AuthUser(auth_context): AuthUser,
    State(state): State<TeamsState>,
    Path(key_id): Path<Uuid>,
) -> Result<Json<ApiKeyResponse>> {
    let key = state
        .repos
        .api_keys
        .get_by_id(key_id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to get API key: {}", e)))?
        .ok_or_else(|| Error::NotFound("API key not found".to_string()))?;

    // Access check (return 404 to prevent info leak)
    if !can_access_key(&auth_context, &key) {
        return Err(Error::NotFound("API key not found".to_string()));
    }

    Ok(Json(ApiKeyResponse::from(key)))
}

/// PUT /keys/{id} — Update an API key's name, type and expiry
///
/// `id`, `token` and `team_id` are never changed by this endpoint.
pub async fn update_api_key(
    AuthUser(auth_context): AuthUser,
    State(state): State<TeamsState>,
    Path(key_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<ApiKeyRequest>,
) -> Result<Json<ApiKey>> {
    // Check access first
    let existing = state
        .repos
        .api_keys
        .get_by_id(key_id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to find API key: {}", e)))?
        .ok_or_else(|| Error::NotFound("API key not found".to_string()))?;

    if !can_access_key(&auth_context, &existing) {
        return Err(Error::NotFound("API key not found".to_string()));
    }

    let updated = state
        .repos
        .api_keys
        .update(key_id, &request.name, request.key_type, request.expires)
        .await
        .map_err(|e| Error::Internal(format!("Failed to update API key: {}", e)))?
        .ok_or_else(|| Error::NotFound("API key not found".to_string()))?;

    Ok(Json(updated))
}

/// DELETE /keys/{id} — Delete an API key
pub async fn delete_api_key(
    AuthUser(auth_context): AuthUser,
    State(state): State<TeamsState>,
    Path(key_id): Path<Uuid>,
) -> Result<StatusCode> {
    // Check access first
    let existing = state
        .repos
        .api_keys
        .get_by_id(key_id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to find API key: {}", e)))?
        .ok_or_else(|| Error::NotFound("API key not found".to_string()))?;

    if !can_access_key(&auth_context, &existing) {
        return Err(Error::NotFound("API key not found".to_string()));
    }

    state
        .repos
        .api_keys
        .delete(key_id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to delete API key: {}", e)))?;

    tracing::info!(api_key_id = %key_id, "API key deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_response_no_token() {
        let key = ApiKey::new(
            Uuid::new_v4(),
            Some(Uuid::new_v4()),
            "Test Key".to_string(),
            0,
            None,
        )
        .unwrap();
        let token = key.token;

        let response = ApiKeyResponse::from(key);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("token"));
        assert!(!json.contains(&token.to_string()));
        assert!(json.contains("Test Key"));
    }

    #[test]
    fn test_api_key_response_preserves_fields() {
        let team_id = Uuid::new_v4();
        let expires = Utc::now() + chrono::Duration::days(7);
        let key = ApiKey::new(
            Uuid::new_v4(),
            Some(team_id),
            "CI key".to_string(),
            1,
            Some(expires),
        )
        .unwrap();
        let key_id = key.id;

        let response = ApiKeyResponse::from(key);

        assert_eq!(response.id, key_id);
        assert_eq!(response.team_id, Some(team_id));
        assert_eq!(response.key_type, 1);
        assert_eq!(response.expires, Some(expires));
    }

    #[test]
    fn test_api_key_response_type_field_name() {
        let key = ApiKey::new(Uuid::new_v4(), None, "Key".to_string(), 1, None).unwrap();
        let json = serde_json::to_value(ApiKeyResponse::from(key)).unwrap();

        assert_eq!(json["type"], 1);
        assert!(json.get("key_type").is_none());
    }

    #[test]
    fn test_request_empty_name_rejected() {
        let request = ApiKeyRequest {
            name: "".to_string(),
            key_type: 0,
            expires: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_name_too_long() {
        let request = ApiKeyRequest {
            name: "a".repeat(101),
            key_type: 0,
            expires: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_valid() {
        let request = ApiKeyRequest {
            name: "new key".to_string(),
            key_type: 0,
            expires: Some(Utc::now() + chrono::Duration::days(30)),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_deserializes_wire_shape() {
        let request: ApiKeyRequest = serde_json::from_value(serde_json::json!({
            "name": "new key",
            "type": 0,
            "expires": "2712-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(request.name, "new key");
        assert_eq!(request.key_type, 0);
        assert!(request.expires.is_some());
    }

    #[test]
    fn test_request_missing_type_rejected() {
        let result: std::result::Result<ApiKeyRequest, _> =
            serde_json::from_value(serde_json::json!({"name": "new key"}));
        assert!(result.is_err());
    }
}
