//! In-memory Repository Implementation
//!
//! Backs the tests and a development run without `DATABASE_URL`. The write
//! lock plays the role of the unique constraints.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct UserTable {
    last_id: i64,
    rows: BTreeMap<UserId, User>,
}

impl UserTable {
    fn by_user_name(&self, user_name: &UserName) -> Option<&User> {
        self.rows
            .values()
            .find(|u| u.user_name.canonical() == user_name.canonical())
    }

    fn by_email(&self, email: &Email) -> Option<&User> {
        self.rows.values().find(|u| u.email == *email)
    }
}

/// Process-local user store; clones share the same table
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let mut table = self.table.write().await;

        if table.by_user_name(&user.user_name).is_some() {
            return Err(AuthError::UserNameTaken);
        }
        if table.by_email(&user.email).is_some() {
            return Err(AuthError::EmailTaken);
        }

        table.last_id += 1;
        let user = user.into_user(UserId::from_raw(table.last_id), Utc::now());
        table.rows.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.table.read().await.rows.get(&user_id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.table.read().await.by_user_name(user_name).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.table.read().await.by_email(email).cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self.table.read().await.by_user_name(user_name).is_some())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.table.read().await.by_email(email).is_some())
    }
}
