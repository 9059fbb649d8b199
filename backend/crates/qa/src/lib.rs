//! Q&A (Questions and Answers) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Rules
//! - Questions and answers are unique by canonical text (answers per question)
//! - Only a question's author can delete it or accept its answers
//! - Only an answer's author can edit it, and nobody votes on their own answer
//! - At most one accepted answer per question
//! - Deleting a question deletes its answers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{QaError, QaResult};
pub use infra::{memory::InMemoryQaRepository, postgres::PgQaRepository};
pub use presentation::router::qa_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
