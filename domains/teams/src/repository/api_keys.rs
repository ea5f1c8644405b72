//! API key repository

use crate::domain::entities::ApiKey;
use chrono::{DateTime, Utc};
use hangar_common::{RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiKeyRepository {
    pool: PgPool,
}

impl ApiKeyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get API key by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ApiKey>> {
        let row: Option<ApiKey> = sqlx::query_as(
            r#"
            SELECT id, user_id, team_id, name, key_type, token, expires, created_at
            FROM api_keys
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// List all API keys issued by a user, ordered by created_at DESC
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ApiKey>> {
        let rows: Vec<ApiKey> = sqlx::query_as(
            r#"
            SELECT id, user_id, team_id, name, key_type, token, expires, created_at
            FROM api_keys
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// List all API keys owned by a team, ordered by created_at DESC
    pub async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<ApiKey>> {
        let rows: Vec<ApiKey> = sqlx::query_as(
            r#"
            SELECT id, user_id, team_id, name, key_type, token, expires, created_at
            FROM api_keys
            WHERE team_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Create a new API key
    pub async fn create(&self, api_key: &ApiKey) -> Result<ApiKey> {
        sqlx::query(
            r#"
            INSERT INTO api_keys (id, user_id, team_id, name, key_type, token, expires, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(api_key.id)
        .bind(api_key.user_id)
        .bind(api_key.team_id)
        .bind(&api_key.name)
        .bind(api_key.key_type)
        .bind(api_key.token)
        .bind(api_key.expires)
        .bind(api_key.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.constraint().is_some() => {
                RepositoryError::AlreadyExists
            }
            _ => RepositoryError::from(e),
        })?;

        Ok(api_key.clone())
    }

    /// Update an API key's name, type and expiry; id, token and team stay fixed
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        key_type: i32,
        expires: Option<DateTime<Utc>>,
    ) -> Result<Option<ApiKey>> {
        let row: Option<ApiKey> = sqlx::query_as(
            r#"
            UPDATE api_keys SET name = $2, key_type = $3, expires = $4
            WHERE id = $1
            RETURNING id, user_id, team_id, name, key_type, token, expires, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(key_type)
        .bind(expires)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Delete an API key; removes exactly one row
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM api_keys WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(())
    }
}
