//! HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use kernel::extract::JsonBody;
use kernel::identity::CurrentUser;
use kernel::validation::{optional_text, required_text};

use crate::application::{
    AccessTokenService, LogInInput, LogInUseCase, ReadProfileUseCase, SignUpInput,
    SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{AuthResponse, UserProfile};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<AccessTokenService>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/v1/auth/signup
///
/// Body: `username`, `email`, `password`, optional `full_name`
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(body): JsonBody,
) -> AuthResult<(StatusCode, Json<AuthResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = SignUpInput {
        user_name: required_text(&body, "username")?,
        email: required_text(&body, "email")?,
        password: required_text(&body, "password")?,
        full_name: optional_text(&body, "full_name")?,
    };

    let output = SignUpUseCase::new(state.repo.clone(), state.tokens.clone())
        .execute(input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(&output.user, output.access_token)),
    ))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/v1/auth/login
///
/// Body: `username` (or an email address) and `password`
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(body): JsonBody,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = LogInInput {
        identifier: required_text(&body, "username")?,
        password: required_text(&body, "password")?,
    };

    let output = LogInUseCase::new(state.repo.clone(), state.tokens.clone())
        .execute(input)
        .await?;

    Ok(Json(AuthResponse::new(&output.user, output.access_token)))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/v1/auth/me
///
/// Requires the access-token middleware.
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> AuthResult<Json<UserProfile>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user = ReadProfileUseCase::new(state.repo.clone())
        .execute(user)
        .await?;
    Ok(Json(UserProfile::from(&user)))
}
