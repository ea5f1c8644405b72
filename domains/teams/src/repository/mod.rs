//! Repository implementations for the Teams domain

pub mod api_keys;
pub mod configs;

use sqlx::PgPool;

pub use api_keys::ApiKeyRepository;
pub use configs::ConfigRepository;

/// Combined repository access for the Teams domain
#[derive(Clone)]
pub struct TeamsRepositories {
    pub configs: ConfigRepository,
    pub api_keys: ApiKeyRepository,
}

impl TeamsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            configs: ConfigRepository::new(pool.clone()),
            api_keys: ApiKeyRepository::new(pool),
        }
    }
}
