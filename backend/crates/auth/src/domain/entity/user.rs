//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// Registered user
///
/// The password hash never leaves the crate: responses are built from
/// [`crate::presentation::dto::UserProfile`].
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub user_name: UserName,
    pub full_name: Option<String>,
    pub email: Email,
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
}

/// Validated sign-up data, before the store assigns an id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub full_name: Option<String>,
    pub email: Email,
    pub password: UserPassword,
}

impl NewUser {
    /// Attach the id and timestamp assigned on insert
    pub fn into_user(self, user_id: UserId, created_at: DateTime<Utc>) -> User {
        User {
            user_id,
            user_name: self.user_name,
            full_name: self.full_name,
            email: self.email,
            password: self.password,
            created_at,
        }
    }
}
