//! Read Answers Use Case

use std::sync::Arc;

use kernel::id::QuestionId;

use crate::domain::entity::answer::Answer;
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::error::{QaError, QaResult};

pub struct ReadAnswersUseCase<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    question_repo: Arc<Q>,
    answer_repo: Arc<A>,
}

impl<Q, A> ReadAnswersUseCase<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    pub fn new(question_repo: Arc<Q>, answer_repo: Arc<A>) -> Self {
        Self {
            question_repo,
            answer_repo,
        }
    }

    /// Answers to an existing question; an unknown question is a 404, not
    /// an empty list
    pub async fn execute(&self, question_id: QuestionId) -> QaResult<Vec<Answer>> {
        if self.question_repo.find_by_id(question_id).await?.is_none() {
            return Err(QaError::QuestionNotFound(question_id));
        }
        self.answer_repo.find_by_question(question_id).await
    }
}
