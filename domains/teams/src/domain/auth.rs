//! Team and API key authorization checks
//!
//! Handlers call these explicitly with the request's `AuthContext`; the
//! result is a typed team (or an error), never an ambient side effect.

use hangar_auth::AuthContext;
use hangar_common::{Error, Result};
use uuid::Uuid;

use crate::domain::entities::ApiKey;

/// A team the caller has been confirmed to belong to
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedTeam {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// Confirm the caller is a member of `team_id`.
///
/// Unknown teams and non-membership are indistinguishable to the caller
/// (both 404), so the endpoint does not reveal which teams exist.
pub fn verified_team(auth_context: &AuthContext, team_id: Uuid) -> Result<VerifiedTeam> {
    auth_context
        .membership(team_id)
        .map(|m| VerifiedTeam {
            id: m.team_id,
            name: m.team_name.clone(),
            slug: m.team_slug.clone(),
        })
        .ok_or_else(|| Error::NotFound("Team not found".to_string()))
}

/// Check whether the caller may act on an API key row.
///
/// A key is accessible to the user who issued it and to every verified
/// member of its owning team.
pub fn can_access_key(auth_context: &AuthContext, key: &ApiKey) -> bool {
    if key.user_id == auth_context.user.id {
        return true;
    }
    key.team_id
        .map(|team_id| auth_context.is_member(team_id))
        .unwrap_or(false)
}
