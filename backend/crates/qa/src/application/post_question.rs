//! Post Question Use Case

use std::sync::Arc;

use kernel::identity::CurrentUser;

use crate::domain::entity::question::{NewQuestion, Question};
use crate::domain::repository::QuestionRepository;
use crate::domain::value_object::post_body::PostBody;
use crate::error::{QaError, QaResult};

pub struct PostQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> PostQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    pub async fn execute(&self, author: CurrentUser, text: &str) -> QaResult<Question> {
        let body = PostBody::new("question", text)?;

        if self.question_repo.exists_by_body(&body).await? {
            return Err(QaError::DuplicateQuestion);
        }

        let question = self
            .question_repo
            .create(NewQuestion {
                user_id: author.user_id,
                body,
            })
            .await?;

        tracing::info!(
            question_id = %question.question_id,
            user_id = %question.user_id,
            "Question posted"
        );
        Ok(question)
    }
}
