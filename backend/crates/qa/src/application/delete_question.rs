//! Delete Question Use Case
//!
//! Only the author may delete; answers go with the question.

use std::sync::Arc;

use kernel::id::QuestionId;
use kernel::identity::CurrentUser;

use crate::domain::repository::QuestionRepository;
use crate::error::{QaError, QaResult};

pub struct DeleteQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> DeleteQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    pub async fn execute(&self, caller: CurrentUser, question_id: QuestionId) -> QaResult<()> {
        let question = self
            .question_repo
            .find_by_id(question_id)
            .await?
            .ok_or(QaError::QuestionNotFound(question_id))?;

        if !caller.owns(question.user_id) {
            return Err(QaError::NotQuestionAuthor);
        }

        // Lost a race with another delete
        if !self.question_repo.delete(question_id).await? {
            return Err(QaError::QuestionNotFound(question_id));
        }

        tracing::info!(question_id = %question_id, user_id = %caller.user_id, "Question deleted");
        Ok(())
    }
}
