//! API Server Composition
//!
//! Wires the feature crates into one router:
//!
//! - `/api/v1/auth/*` - sign-up and log-in (public), `me` (bearer token required)
//! - `/api/v1/questions/*` - questions and answers (bearer token required)
//!
//! Anything else answers `404: Not Found, Resource Not Found`.

pub mod config;

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use auth::domain::repository::UserRepository;
use auth::{
    AccessTokenService, InMemoryUserRepository, PgUserRepository, auth_router,
    require_access_token,
};
use axum::http::{HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware};
use kernel::error::app_error::AppError;
use kernel::extract::RESOURCE_NOT_FOUND;
use qa::domain::repository::{AnswerRepository, QuestionRepository};
use qa::{InMemoryQaRepository, PgQaRepository, qa_router};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

/// Prefix every route is nested under
pub const API_PREFIX: &str = "/api/v1";

/// Where users, questions and answers live
pub enum Storage {
    Postgres(PgPool),
    Memory,
}

impl Storage {
    /// Connect to PostgreSQL when `DATABASE_URL` is set, otherwise fall back
    /// to process memory (never in production; config rejects that)
    pub async fn connect(config: &ApiConfig) -> anyhow::Result<Self> {
        let Some(url) = config.database_url.as_deref() else {
            tracing::warn!(profile = %config.env, "DATABASE_URL not set, using in-memory storage");
            return Ok(Storage::Memory);
        };

        let options = PgConnectOptions::from_str(url)
            .context("DATABASE_URL is not a valid PostgreSQL URL")?
            .database(&config.database_name);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        tracing::info!(database = %config.database_name, "Connected to database");

        // users first: questions and answers reference it
        PgUserRepository::new(pool.clone()).ensure_schema().await?;
        PgQaRepository::new(pool.clone()).ensure_schema().await?;
        tracing::info!("Schema ready");

        Ok(Storage::Postgres(pool))
    }
}

/// Build the full application router for the given storage
pub fn build_app(storage: Storage, tokens: Arc<AccessTokenService>, origins: &[String]) -> Router {
    let app = match storage {
        Storage::Postgres(pool) => compose(
            PgUserRepository::new(pool.clone()),
            PgQaRepository::new(pool),
            tokens,
        ),
        Storage::Memory => compose(
            InMemoryUserRepository::new(),
            InMemoryQaRepository::new(),
            tokens,
        ),
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(origins)),
    )
}

/// Mount the feature routers; Q&A routes sit behind the token middleware
pub fn compose<U, R>(users: U, qa_repo: R, tokens: Arc<AccessTokenService>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let protected = qa_router(qa_repo).route_layer(middleware::from_fn_with_state(
        tokens.clone(),
        require_access_token,
    ));

    Router::new()
        .nest(
            API_PREFIX,
            auth_router(users, tokens).merge(protected),
        )
        .fallback(not_found)
}

async fn not_found() -> Response {
    AppError::not_found(RESOURCE_NOT_FOUND).into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
