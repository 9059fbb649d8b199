//! Read Questions Use Case

use std::sync::Arc;

use kernel::id::QuestionId;

use crate::domain::entity::question::Question;
use crate::domain::repository::QuestionRepository;
use crate::error::{QaError, QaResult};

pub struct ReadQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> ReadQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    pub async fn all(&self) -> QaResult<Vec<Question>> {
        self.question_repo.find_all().await
    }

    pub async fn one(&self, question_id: QuestionId) -> QaResult<Question> {
        self.question_repo
            .find_by_id(question_id)
            .await?
            .ok_or(QaError::QuestionNotFound(question_id))
    }
}
