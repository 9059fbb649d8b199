//! Log In Use Case
//!
//! Checks credentials and issues a fresh access token.

use std::sync::Arc;

use crate::application::token::{AccessTokenService, IssuedToken};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    /// User name, or an email address when it contains `@`
    pub identifier: String,
    pub password: String,
}

/// Log in output
pub struct LogInOutput {
    pub user: User,
    pub access_token: IssuedToken,
}

/// Log in use case
pub struct LogInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<AccessTokenService>,
}

impl<U> LogInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<AccessTokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        let user = self
            .find_user(&input.identifier)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = RawPassword::for_login(input.password);
        if !user.password.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LogInOutput { user, access_token })
    }

    /// An identifier that cannot be a valid name or email matches nobody
    async fn find_user(&self, identifier: &str) -> AuthResult<Option<User>> {
        if identifier.contains('@') {
            match Email::new(identifier) {
                Ok(email) => self.user_repo.find_by_email(&email).await,
                Err(_) => Ok(None),
            }
        } else {
            match UserName::new(identifier) {
                Ok(user_name) => self.user_repo.find_by_user_name(&user_name).await,
                Err(_) => Ok(None),
            }
        }
    }
}
