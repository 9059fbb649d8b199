//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//! `find_*` return `Ok(None)` when no row matches; `Err` means the store
//! itself failed.

use kernel::id::{AnswerId, QuestionId};

use crate::domain::entity::{
    answer::{Answer, NewAnswer},
    question::{NewQuestion, Question},
};
use crate::domain::value_object::post_body::PostBody;
use crate::error::QaResult;

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// Insert a question; fails with `DuplicateQuestion` on a canonical clash
    async fn create(&self, question: NewQuestion) -> QaResult<Question>;

    /// All questions, oldest first
    async fn find_all(&self) -> QaResult<Vec<Question>>;

    async fn find_by_id(&self, question_id: QuestionId) -> QaResult<Option<Question>>;

    async fn exists_by_body(&self, body: &PostBody) -> QaResult<bool>;

    /// Delete a question and, by cascade, its answers. `false` if it was
    /// already gone.
    async fn delete(&self, question_id: QuestionId) -> QaResult<bool>;
}

/// Answer repository trait
#[trait_variant::make(AnswerRepository: Send)]
pub trait LocalAnswerRepository {
    /// Insert an answer; fails with `DuplicateAnswer` on a canonical clash
    /// within the same question
    async fn create(&self, answer: NewAnswer) -> QaResult<Answer>;

    /// Answers to one question, oldest first
    async fn find_by_question(&self, question_id: QuestionId) -> QaResult<Vec<Answer>>;

    async fn find_by_id(&self, answer_id: AnswerId) -> QaResult<Option<Answer>>;

    async fn exists_by_body(&self, question_id: QuestionId, body: &PostBody) -> QaResult<bool>;

    /// Persist body, votes and accepted flag. Accepting clears the flag on
    /// the question's other answers in the same transaction.
    async fn update(&self, answer: &Answer) -> QaResult<()>;
}
