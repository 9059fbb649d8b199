//! Update Answer Use Case
//!
//! One PUT carries any mix of three changes, each with its own rule:
//!
//! | Field      | Allowed caller             |
//! |------------|----------------------------|
//! | `answer`   | author of the answer       |
//! | `accepted` | author of the question     |
//! | `vote`     | anyone but the answer's author |
//!
//! Permissions are checked for every requested change before anything is
//! written.

use std::sync::Arc;

use kernel::id::{AnswerId, QuestionId};
use kernel::identity::CurrentUser;

use crate::domain::entity::answer::Answer;
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::domain::value_object::{post_body::PostBody, vote::Vote};
use crate::error::{QaError, QaResult};

#[derive(Debug, Default)]
pub struct UpdateAnswerInput {
    pub answer: Option<String>,
    pub accepted: Option<bool>,
    pub vote: Option<Vote>,
}

impl UpdateAnswerInput {
    fn is_empty(&self) -> bool {
        self.answer.is_none() && self.accepted.is_none() && self.vote.is_none()
    }
}

pub struct UpdateAnswerUseCase<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    question_repo: Arc<Q>,
    answer_repo: Arc<A>,
}

impl<Q, A> UpdateAnswerUseCase<Q, A>
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
        caller: CurrentUser,
        question_id: QuestionId,
        answer_id: AnswerId,
        input: UpdateAnswerInput,
    ) -> QaResult<Answer> {
        if input.is_empty() {
            return Err(QaError::NothingToUpdate);
        }

        let question = self
            .question_repo
            .find_by_id(question_id)
            .await?
            .ok_or(QaError::QuestionNotFound(question_id))?;

        let mut answer = self
            .answer_repo
            .find_by_id(answer_id)
            .await?
            .filter(|a| a.question_id == question_id)
            .ok_or(QaError::AnswerNotFound(answer_id))?;

        let owns_answer = caller.owns(answer.user_id);
        if input.answer.is_some() && !owns_answer {
            return Err(QaError::CannotEdit);
        }
        if input.accepted.is_some() && !caller.owns(question.user_id) {
            return Err(QaError::CannotAccept);
        }
        if input.vote.is_some() && owns_answer {
            return Err(QaError::CannotVoteOwnAnswer);
        }

        if let Some(text) = input.answer {
            let body = PostBody::new("answer", &text)?;
            if !body.is_duplicate_of(&answer.body)
                && self.answer_repo.exists_by_body(question_id, &body).await?
            {
                return Err(QaError::DuplicateAnswer);
            }
            answer.edit(body);
        }
        if let Some(accepted) = input.accepted {
            answer.set_accepted(accepted);
        }
        if let Some(vote) = input.vote {
            answer.apply_vote(vote);
        }

        self.answer_repo.update(&answer).await?;

        tracing::info!(
            answer_id = %answer_id,
            question_id = %question_id,
            user_id = %caller.user_id,
            "Answer updated"
        );
        Ok(answer)
    }
}
