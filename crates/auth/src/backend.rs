//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns auth-specific SQL queries.
//! Uses runtime `sqlx::query_as` so the read models stay decoupled from
//! the teams domain's entity types.

use sqlx::PgPool;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::types::{AuthIdentity, AuthMembership};

/// Row type for membership lookup
#[derive(sqlx::FromRow)]
struct MembershipRow {
    team_id: Uuid,
    team_name: String,
    team_slug: String,
}

/// Concrete authentication backend.
///
/// Wraps a database pool and auth configuration. Provides methods
/// to look up users and memberships for authentication.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Find user identity by ID (lightweight subset of the users row)
    pub(crate) async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, email, name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(user)
    }

    /// Find memberships for a user (team_id + name + slug)
    pub(crate) async fn find_memberships(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AuthMembership>, AuthError> {
        let rows: Vec<MembershipRow> = sqlx::query_as(
            r#"
            SELECT t.id as team_id, t.name as team_name, t.slug as team_slug
            FROM teams t
            INNER JOIN memberships m ON t.id = m.team_id
            WHERE m.user_id = $1
            ORDER BY t.name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user_id, "Failed to load memberships");
            AuthError::MembershipsLoadError
        })?;

        Ok(rows
            .into_iter()
            .map(|r| AuthMembership {
                team_id: r.team_id,
                team_name: r.team_name,
                team_slug: r.team_slug,
            })
            .collect())
    }

    /// Validate a JWT bearer token and load the caller's context.
    pub(crate) async fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_jwt_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = self
            .find_user(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let memberships = self.find_memberships(user_id).await?;

        Ok(AuthContext::new(user, memberships))
    }
}
