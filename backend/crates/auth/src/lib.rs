//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Sign-up with username, email, optional full name and password
//! - Log-in by username or email
//! - HS256 access tokens (`Authorization: Bearer <token>`)
//! - Middleware that puts the verified caller in request extensions
//! - Profile of the calling user (`GET /auth/me`)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never serialised
//! - Unknown users and wrong passwords get the same 403
//! - Usernames and emails unique by canonical form

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AccessTokenService, config::AuthConfig};
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::middleware::require_access_token;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
