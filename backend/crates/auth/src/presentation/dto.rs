//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use serde::Serialize;

use crate::application::token::IssuedToken;
use crate::domain::entity::user::User;

/// Public projection of a user; never carries the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub username: String,
    pub full_name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.user_name.original().to_string(),
            full_name: user.full_name.clone(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

/// Sign-up and log-in response
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserProfile,
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until the token expires
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(user: &User, token: IssuedToken) -> Self {
        Self {
            user: UserProfile::from(user),
            access_token: token.token,
            token_type: "Bearer",
            expires_in: token.expires_in,
        }
    }
}
