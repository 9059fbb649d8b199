//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    answer::{Answer, NewAnswer},
    question::{NewQuestion, Question},
};
pub use repository::{AnswerRepository, QuestionRepository};
