//! Teams domain: team configuration and API keys

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::auth::{can_access_key, verified_team, VerifiedTeam};
pub use domain::entities::*;
// Re-export repository types
pub use repository::{ApiKeyRepository, ConfigRepository, TeamsRepositories};

// Re-export API types
pub use api::routes;
pub use api::TeamsState;

// Re-export auth types from hangar-auth for convenience
pub use hangar_auth::{AuthBackend, AuthConfig, AuthContext, AuthError, AuthUser};
