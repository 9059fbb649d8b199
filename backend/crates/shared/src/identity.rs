//! Authenticated caller identity
//!
//! Inserted into request extensions by the bearer-token middleware and read
//! by protected handlers. Lives here so feature crates do not depend on the
//! auth crate.

use crate::id::UserId;

/// The user a verified access token was issued to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
}

impl CurrentUser {
    pub const fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// Ownership check against a row's owner column
    pub fn owns(&self, owner: UserId) -> bool {
        self.user_id == owner
    }
}
