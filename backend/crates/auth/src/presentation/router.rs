//! Auth Router

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::AccessTokenService;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_access_token;

/// Create the Auth router for any repository implementation
///
/// Routes carry their full path below the API prefix (`/auth/...`).
/// `/auth/me` is guarded here; the other two are public.
pub fn auth_router<R>(repo: R, tokens: Arc<AccessTokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let guarded = Router::new()
        .route("/auth/me", get(handlers::me::<R>))
        .route_layer(middleware::from_fn_with_state(
            tokens.clone(),
            require_access_token,
        ));

    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route("/auth/signup", post(handlers::sign_up::<R>))
        .route("/auth/login", post(handlers::log_in::<R>))
        .merge(guarded)
        .with_state(state)
}
