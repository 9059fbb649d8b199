//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::UserId;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Duplicate Value. Username already exists")]
    UserNameTaken,

    #[error("Duplicate Value. Email already exists")]
    EmailTaken,

    /// Token subject no longer has a row
    #[error("User with id:{0} does not exist")]
    UserNotFound(UserId),

    /// Unknown identifier or wrong password; the two are not distinguished
    #[error("Invalid Login Credentials")]
    InvalidCredentials,

    #[error("Missing Authorization Header")]
    MissingToken,

    /// Header present but not `Bearer <token>`
    #[error("Authorization header must be 'Bearer <token>'")]
    MalformedHeader,

    #[error("Signature verification failed")]
    InvalidSignature,

    #[error("Token has expired")]
    TokenExpired,

    /// Structurally broken token, or claims we cannot use
    #[error("Invalid token")]
    InvalidToken,

    /// Token could not be signed
    #[error("Token issuance failed: {0}")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),

    /// Already in kernel form (validation failures from value objects)
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials => ErrorKind::Forbidden,
            AuthError::UserNotFound(_) => ErrorKind::NotFound,
            AuthError::MissingToken
            | AuthError::MalformedHeader
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::App(e) => e.kind(),
            AuthError::Database(_) | AuthError::TokenIssue(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::App(e) => e,
            AuthError::Database(e) => AppError::from(e),
            AuthError::TokenIssue(_) | AuthError::Internal(_) => {
                AppError::internal("Internal Server Error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::TokenIssue(e) => {
                tracing::error!(error = %e, "Access token could not be signed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidSignature | AuthError::InvalidToken | AuthError::MalformedHeader => {
                tracing::warn!(error = %self, "Rejected access token");
            }
            AuthError::App(e) if e.is_server_error() => {
                tracing::error!(error = %e, "Auth error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
