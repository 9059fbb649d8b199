//! Application Layer
//!
//! One use case per operation.

pub mod delete_question;
pub mod post_answer;
pub mod post_question;
pub mod read_answers;
pub mod read_questions;
pub mod update_answer;

// Re-exports
pub use delete_question::DeleteQuestionUseCase;
pub use post_answer::PostAnswerUseCase;
pub use post_question::PostQuestionUseCase;
pub use read_answers::ReadAnswersUseCase;
pub use read_questions::ReadQuestionsUseCase;
pub use update_answer::{UpdateAnswerInput, UpdateAnswerUseCase};
