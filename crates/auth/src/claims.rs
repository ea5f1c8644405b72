//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried by the identity provider's JWTs
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    pub email: Option<String>,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Audience
    pub aud: Option<String>,
}
