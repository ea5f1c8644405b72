//! Authorization context for authenticated users

use crate::types::{AuthIdentity, AuthMembership};
use uuid::Uuid;

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
    pub memberships: Vec<AuthMembership>,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity, memberships: Vec<AuthMembership>) -> Self {
        Self { user, memberships }
    }

    /// Get the membership entry for a specific team
    pub fn membership(&self, team_id: Uuid) -> Option<&AuthMembership> {
        self.memberships.iter().find(|m| m.team_id == team_id)
    }

    /// Check if the user is a member of a team
    pub fn is_member(&self, team_id: Uuid) -> bool {
        self.membership(team_id).is_some()
    }
}
