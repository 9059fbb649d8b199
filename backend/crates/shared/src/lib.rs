//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed row identifiers
//! - Request body validation helpers
//! - The uniform status-coded response envelope
//! - The authenticated caller identity passed between crates
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod identity;
pub mod validation;

#[cfg(feature = "axum")]
pub mod extract;
#[cfg(feature = "axum")]
pub mod response;
