//! Domain entities for the Hangar teams domain
//!
//! Team configuration (theme + app settings) and issued API keys.
//! Each entity includes validation and serialization rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use hangar_common::{Error, Result};

/// Default theme applied when a team has no stored configuration
pub const DEFAULT_PRIMARY_COLOR: &str = "000000";
pub const DEFAULT_PRIMARY_BACKGROUND_COLOR: &str = "FFFFFF";
pub const DEFAULT_PRIMARY_BUTTON_COLOR: &str = "FFFFFF";
pub const DEFAULT_PRIMARY_BUTTON_BACKGROUND_COLOR: &str = "E94F91";

/// Validate a theme color value: exactly six hex digits, no `#` prefix
pub fn validate_hex_color(value: &str) -> std::result::Result<(), validator::ValidationError> {
    if value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_hex_color"))
    }
}

/// Per-team UI theme colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Theme {
    #[validate(custom(function = "validate_hex_color", message = "Invalid hex color"))]
    pub primary_color: String,

    #[validate(custom(function = "validate_hex_color", message = "Invalid hex color"))]
    pub primary_background_color: String,

    #[validate(custom(function = "validate_hex_color", message = "Invalid hex color"))]
    pub primary_button_color: String,

    #[validate(custom(function = "validate_hex_color", message = "Invalid hex color"))]
    pub primary_button_background_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            primary_background_color: DEFAULT_PRIMARY_BACKGROUND_COLOR.to_string(),
            primary_button_color: DEFAULT_PRIMARY_BUTTON_COLOR.to_string(),
            primary_button_background_color: DEFAULT_PRIMARY_BUTTON_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// Team configuration entity — one row per team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Config {
    pub id: Uuid,
    pub team_id: Uuid,
    pub theme: Json<Theme>,
    /// Opaque per-team app list/settings blob
    pub apps: Json<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Config {
    /// Create a new configuration with validation
    pub fn new(team_id: Uuid, theme: Theme, apps: serde_json::Value) -> Result<Self> {
        theme
            .validate()
            .map_err(|e| Error::Validation(format!("Invalid theme: {}", e)))?;

        let now = Utc::now();
        Ok(Config {
            id: Uuid::new_v4(),
            team_id,
            theme: Json(theme),
            apps: Json(apps),
            created_at: now,
            updated_at: now,
        })
    }

    /// Default configuration for a team that has never stored one.
    ///
    /// Pure constructor — nothing is persisted until the first POST.
    pub fn default_for_team(team_id: Uuid) -> Self {
        let now = Utc::now();
        Config {
            id: Uuid::new_v4(),
            team_id,
            theme: Json(Theme::default()),
            apps: Json(serde_json::Value::Null),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        self.theme
            .0
            .validate()
            .map_err(|e| Error::Validation(format!("Invalid theme: {}", e)))?;
        Ok(())
    }
}

/// API key entity
///
/// `token` is the secret credential; it appears in create/update responses
/// only. The display projection (`ApiKeyResponse`) and `Debug` output omit it.
#[derive(Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ApiKey {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Owning team; NULL for user-scoped keys
    pub team_id: Option<Uuid>,
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: i32,
    pub token: Uuid,
    pub expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("team_id", &self.team_id)
            .field("name", &self.name)
            .field("key_type", &self.key_type)
            .field("token", &"[REDACTED]")
            .field("expires", &self.expires)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl ApiKey {
    /// Create a new API key with validation.
    ///
    /// The token is generated server-side and is the only secret on the row.
    pub fn new(
        user_id: Uuid,
        team_id: Option<Uuid>,
        name: String,
        key_type: i32,
        expires: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        if name.is_empty() || name.len() > 100 {
            return Err(Error::Validation(
                "Key name must be 1-100 characters".to_string(),
            ));
        }

        Ok(ApiKey {
            id: Uuid::new_v4(),
            user_id,
            team_id,
            name,
            key_type,
            token: Uuid::new_v4(),
            expires,
            created_at: Utc::now(),
        })
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.name.len() > 100 {
            return Err(Error::Validation(
                "Key name must be 1-100 characters".to_string(),
            ));
        }
        if self.token.is_nil() {
            return Err(Error::Validation("Key token cannot be nil".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default_values() {
        let theme = Theme::default();
        assert_eq!(theme.primary_color, "000000");
        assert_eq!(theme.primary_background_color, "FFFFFF");
        assert_eq!(theme.primary_button_color, "FFFFFF");
        assert_eq!(theme.primary_button_background_color, "E94F91");
    }

    #[test]
    fn test_theme_default_validates() {
        assert!(Theme::default().validate().is_ok());
    }

    #[test]
    fn test_hex_color_validation() {
        // Valid colors
        assert!(validate_hex_color("000000").is_ok());
        assert!(validate_hex_color("E94F91").is_ok());
        assert!(validate_hex_color("e94f91").is_ok());

        // Invalid colors
        assert!(validate_hex_color("").is_err());
        assert!(validate_hex_color("FFF").is_err());
        assert!(validate_hex_color("FFFFFFF").is_err());
        assert!(validate_hex_color("#FFFFFF").is_err());
        assert!(validate_hex_color("GGGGGG").is_err());
    }

    #[test]
    fn test_hex_color_length_boundary() {
        // Kill: replace == with !=, <=, >= (value.len() == 6)
        assert!(validate_hex_color("FFFFF").is_err());
        assert!(validate_hex_color("FFFFFF").is_ok());
        assert!(validate_hex_color("FFFFFFF").is_err());
    }

    #[test]
    fn test_config_creation() {
        let team_id = Uuid::new_v4();
        let config = Config::new(
            team_id,
            Theme::default(),
            serde_json::json!([{"name": "App One"}]),
        )
        .unwrap();

        assert_eq!(config.team_id, team_id);
        assert_eq!(config.theme.0, Theme::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_creation_rejects_invalid_theme() {
        let theme = Theme {
            primary_color: "#000000".to_string(),
            ..Theme::default()
        };
        let result = Config::new(Uuid::new_v4(), theme, serde_json::Value::Null);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_default_for_team() {
        let team_id = Uuid::new_v4();
        let config = Config::default_for_team(team_id);

        assert_eq!(config.team_id, team_id);
        assert_eq!(config.theme.0, Theme::default());
        assert_eq!(config.apps.0, serde_json::Value::Null);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::new(
            Uuid::new_v4(),
            Theme::default(),
            serde_json::json!({"featured": []}),
        )
        .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_api_key_creation() {
        let user_id = Uuid::new_v4();
        let team_id = Uuid::new_v4();
        let expires = Utc::now() + chrono::Duration::days(30);

        let key = ApiKey::new(
            user_id,
            Some(team_id),
            "Upload key".to_string(),
            0,
            Some(expires),
        )
        .unwrap();

        assert_eq!(key.user_id, user_id);
        assert_eq!(key.team_id, Some(team_id));
        assert_eq!(key.name, "Upload key");
        assert_eq!(key.key_type, 0);
        assert_eq!(key.expires, Some(expires));
        assert!(!key.token.is_nil());
        assert!(key.validate().is_ok());
    }

    #[test]
    fn test_api_key_tokens_are_unique() {
        let user_id = Uuid::new_v4();
        let a = ApiKey::new(user_id, None, "a".to_string(), 0, None).unwrap();
        let b = ApiKey::new(user_id, None, "b".to_string(), 0, None).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_api_key_name_boundaries() {
        let user_id = Uuid::new_v4();

        // Empty name rejected
        assert!(ApiKey::new(user_id, None, "".to_string(), 0, None).is_err());

        // 100-char name accepted
        assert!(ApiKey::new(user_id, None, "a".repeat(100), 0, None).is_ok());

        // 101-char name rejected
        assert!(ApiKey::new(user_id, None, "a".repeat(101), 0, None).is_err());
    }

    #[test]
    fn test_api_key_user_scoped_without_team() {
        let key = ApiKey::new(Uuid::new_v4(), None, "Personal".to_string(), 1, None).unwrap();
        assert!(key.team_id.is_none());
    }

    #[test]
    fn test_api_key_debug_redacts_token() {
        let key = ApiKey::new(Uuid::new_v4(), None, "Secret".to_string(), 0, None).unwrap();
        let debug = format!("{:?}", key);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(&key.token.to_string()));
    }

    #[test]
    fn test_api_key_serializes_type_field_name() {
        let key = ApiKey::new(Uuid::new_v4(), None, "Key".to_string(), 1, None).unwrap();
        let json = serde_json::to_value(&key).unwrap();

        assert_eq!(json["type"], 1);
        assert!(json.get("key_type").is_none());
        // Full serialization carries the token (create/update responses)
        assert_eq!(json["token"], key.token.to_string());
    }
}
