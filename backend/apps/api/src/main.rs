//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::error::AppError`.

use std::sync::Arc;

use api::config::ApiConfig;
use api::{Storage, build_app};
use auth::AccessTokenService;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(profile = %config.env, "Starting API server");
    if config.random_token_secret {
        tracing::warn!("TOKEN_SECRET not set, using a random per-process secret");
    }

    let storage = Storage::connect(&config).await?;
    let tokens = Arc::new(AccessTokenService::new(&config.auth));
    let app = build_app(storage, tokens, &config.frontend_origins);

    tracing::info!("Listening on {}", config.listen_addr);

    let listener = TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
