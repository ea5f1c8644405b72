//! Auth read-model types
//!
//! Lightweight views of the same DB rows owned by the teams domain.
//! These types carry only the fields needed for authentication and
//! authorization.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lightweight identity for authenticated users.
///
/// Contains the fields needed by auth middleware and most handlers.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Team membership info for authorization checks
#[derive(Debug, Clone)]
pub struct AuthMembership {
    pub team_id: Uuid,
    pub team_name: String,
    pub team_slug: String,
}
