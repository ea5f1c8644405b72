//! Team configuration repository

use crate::domain::entities::Config;
use hangar_common::{RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ConfigRepository {
    pool: PgPool,
}

impl ConfigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a team's stored configuration, if any
    pub async fn find_by_team(&self, team_id: Uuid) -> Result<Option<Config>> {
        let row: Option<Config> = sqlx::query_as(
            r#"
            SELECT id, team_id, theme, apps, created_at, updated_at
            FROM configs
            WHERE team_id = $1
            "#,
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Insert a team's first configuration
    pub async fn create(&self, config: &Config) -> Result<Config> {
        sqlx::query(
            r#"
            INSERT INTO configs (id, team_id, theme, apps, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(config.id)
        .bind(config.team_id)
        .bind(serde_json::to_value(&config.theme.0)?)
        .bind(serde_json::to_value(&config.apps.0)?)
        .bind(config.created_at)
        .bind(config.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // configs.team_id is unique; a concurrent first POST loses here
            sqlx::Error::Database(db_err) if db_err.constraint().is_some() => {
                RepositoryError::AlreadyExists
            }
            _ => RepositoryError::from(e),
        })?;

        Ok(config.clone())
    }

    /// Overwrite a team's existing configuration
    pub async fn update(&self, config: &Config) -> Result<Config> {
        let row: Option<Config> = sqlx::query_as(
            r#"
            UPDATE configs SET theme = $2, apps = $3, updated_at = NOW()
            WHERE team_id = $1
            RETURNING id, team_id, theme, apps, created_at, updated_at
            "#,
        )
        .bind(config.team_id)
        .bind(serde_json::to_value(&config.theme.0)?)
        .bind(serde_json::to_value(&config.apps.0)?)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| RepositoryError::NotFound.into())
    }
}
