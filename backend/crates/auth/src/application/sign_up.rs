//! Sign Up Use Case
//!
//! Creates a new user account and issues its first access token.

use std::sync::Arc;

use kernel::error::app_error::AppError;
use platform::text::normalize_display;

use crate::application::token::{AccessTokenService, IssuedToken};
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Maximum length of the optional display name
pub const FULL_NAME_MAX_LENGTH: usize = 100;

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub full_name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
    pub access_token: IssuedToken,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<AccessTokenService>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<AccessTokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let user_name = UserName::new(&input.user_name).map_err(AppError::from)?;
        let email = Email::new(&input.email)?;
        let full_name = validate_full_name(input.full_name)?;

        // Friendly 409s; the unique indexes still guard the race
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let password = UserPassword::from_raw(&raw_password)?;

        let user = self
            .user_repo
            .create(NewUser {
                user_name,
                full_name,
                email,
                password,
            })
            .await?;

        let access_token = self.tokens.issue(user.user_id)?;

        tracing::info!(user_id = %user.user_id, user_name = %user.user_name, "User signed up");

        Ok(SignUpOutput { user, access_token })
    }
}

/// Blank names are treated as absent
fn validate_full_name(full_name: Option<String>) -> AuthResult<Option<String>> {
    let Some(name) = full_name.map(|n| normalize_display(&n)) else {
        return Ok(None);
    };
    if name.is_empty() {
        return Ok(None);
    }
    if name.chars().count() > FULL_NAME_MAX_LENGTH {
        return Err(AppError::bad_request(format!(
            "Full name must be at most {FULL_NAME_MAX_LENGTH} characters"
        ))
        .into());
    }
    Ok(Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::infra::memory::InMemoryUserRepository;

    fn use_case() -> SignUpUseCase<InMemoryUserRepository> {
        SignUpUseCase::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(AccessTokenService::new(&AuthConfig::development())),
        )
    }

    fn input(user_name: &str, email: &str) -> SignUpInput {
        SignUpInput {
            user_name: user_name.to_string(),
            full_name: Some("  Ada Lovelace ".to_string()),
            email: email.to_string(),
            password: "Analytical-Engine-1843".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_creates_user() {
        let output = use_case()
            .execute(input("Ada", "ada@example.com"))
            .await
            .unwrap();
        assert_eq!(output.user.user_name.original(), "Ada");
        assert_eq!(output.user.full_name.as_deref(), Some("Ada Lovelace"));
        assert!(!output.access_token.token.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_user_name_is_case_insensitive() {
        let use_case = use_case();
        use_case.execute(input("ada", "ada@example.com")).await.unwrap();

        let err = use_case
            .execute(input("ADA", "other@example.com"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::UserNameTaken));
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let use_case = use_case();
        use_case.execute(input("ada", "ada@example.com")).await.unwrap();

        let err = use_case
            .execute(input("lovelace", "ADA@example.com"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_invalid_fields_are_bad_requests() {
        let use_case = use_case();

        let err = use_case.execute(input("a", "ada@example.com")).await.err().unwrap();
        assert_eq!(err.kind(), kernel::error::kind::ErrorKind::BadRequest);

        let err = use_case.execute(input("ada", "not-an-email")).await.err().unwrap();
        assert_eq!(err.kind(), kernel::error::kind::ErrorKind::BadRequest);

        let mut weak = input("ada", "ada@example.com");
        weak.password = "12345678".to_string();
        let err = use_case.execute(weak).await.err().unwrap();
        assert_eq!(err.kind(), kernel::error::kind::ErrorKind::BadRequest);
    }

    #[test]
    fn test_full_name_rules() {
        assert_eq!(validate_full_name(None).unwrap(), None);
        assert_eq!(validate_full_name(Some("   ".to_string())).unwrap(), None);
        assert!(validate_full_name(Some("x".repeat(101))).is_err());
    }
}
