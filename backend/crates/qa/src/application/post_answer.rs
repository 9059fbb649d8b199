//! Post Answer Use Case

use std::sync::Arc;

use kernel::id::QuestionId;
use kernel::identity::CurrentUser;

use crate::domain::entity::answer::{Answer, NewAnswer};
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::domain::value_object::post_body::PostBody;
use crate::error::{QaError, QaResult};

pub struct PostAnswerUseCase<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    question_repo: Arc<Q>,
    answer_repo: Arc<A>,
}

impl<Q, A> PostAnswerUseCase<Q, A>
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

    pub async fn execute(
        &self,
        author: CurrentUser,
        question_id: QuestionId,
        text: &str,
    ) -> QaResult<Answer> {
        if self.question_repo.find_by_id(question_id).await?.is_none() {
            return Err(QaError::QuestionNotFound(question_id));
        }

        let body = PostBody::new("answer", text)?;
        if self.answer_repo.exists_by_body(question_id, &body).await? {
            return Err(QaError::DuplicateAnswer);
        }

        let answer = self
            .answer_repo
            .create(NewAnswer {
                question_id,
                user_id: author.user_id,
                body,
            })
            .await?;

        tracing::info!(
            answer_id = %answer.answer_id,
            question_id = %question_id,
            user_id = %answer.user_id,
            "Answer posted"
        );
        Ok(answer)
    }
}
