//! HTTP Handlers
//!
//! Every route here sits behind the bearer-token middleware, which supplies
//! `Extension<CurrentUser>`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use kernel::extract::{JsonBody, ResourcePath};
use kernel::id::{AnswerId, QuestionId};
use kernel::identity::CurrentUser;
use kernel::response::{build_status_response, check_for_content};
use kernel::validation::{optional_bool, optional_text, required_text};

use crate::application::{
    DeleteQuestionUseCase, PostAnswerUseCase, PostQuestionUseCase, ReadAnswersUseCase,
    ReadQuestionsUseCase, UpdateAnswerInput, UpdateAnswerUseCase,
};
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::domain::value_object::vote::Vote;
use crate::error::QaResult;
use crate::presentation::dto::{AnswerResponse, QuestionResponse};

/// Shared state for Q&A handlers
#[derive(Clone)]
pub struct QaAppState<R>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Questions
// ============================================================================

/// GET /api/v1/questions
pub async fn list_questions<R>(State(state): State<QaAppState<R>>) -> QaResult<Response>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let questions = ReadQuestionsUseCase::new(state.repo.clone()).all().await?;
    let views: Vec<QuestionResponse> = questions.into_iter().map(Into::into).collect();
    Ok(check_for_content(views, "There are no Questions in store"))
}

/// GET /api/v1/questions/{question_id}
pub async fn get_question<R>(
    State(state): State<QaAppState<R>>,
    ResourcePath(question_id): ResourcePath<QuestionId>,
) -> QaResult<Json<QuestionResponse>>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let question = ReadQuestionsUseCase::new(state.repo.clone())
        .one(question_id)
        .await?;
    Ok(Json(question.into()))
}

/// POST /api/v1/questions
///
/// Body: `question`
pub async fn post_question<R>(
    State(state): State<QaAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(body): JsonBody,
) -> QaResult<(StatusCode, Json<QuestionResponse>)>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let text = required_text(&body, "question")?;
    let question = PostQuestionUseCase::new(state.repo.clone())
        .execute(user, &text)
        .await?;
    Ok((StatusCode::CREATED, Json(question.into())))
}

/// DELETE /api/v1/questions/{question_id}
pub async fn delete_question<R>(
    State(state): State<QaAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    ResourcePath(question_id): ResourcePath<QuestionId>,
) -> QaResult<Response>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    DeleteQuestionUseCase::new(state.repo.clone())
        .execute(user, question_id)
        .await?;
    Ok(build_status_response(
        StatusCode::ACCEPTED,
        "Accepted",
        &format!("Question with id:{question_id} was deleted"),
    ))
}

// ============================================================================
// Answers
// ============================================================================

/// GET /api/v1/questions/{question_id}/answers
pub async fn list_answers<R>(
    State(state): State<QaAppState<R>>,
    ResourcePath(question_id): ResourcePath<QuestionId>,
) -> QaResult<Response>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let answers = ReadAnswersUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(question_id)
        .await?;
    let views: Vec<AnswerResponse> = answers.into_iter().map(Into::into).collect();
    Ok(check_for_content(
        views,
        "There are no Answers for the selected question",
    ))
}

/// POST /api/v1/questions/{question_id}/answers
///
/// Body: `answer`
pub async fn post_answer<R>(
    State(state): State<QaAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    ResourcePath(question_id): ResourcePath<QuestionId>,
    JsonBody(body): JsonBody,
) -> QaResult<impl IntoResponse>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let text = required_text(&body, "answer")?;
    let answer = PostAnswerUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(user, question_id, &text)
        .await?;
    Ok((StatusCode::CREATED, Json(AnswerResponse::from(answer))))
}

/// PUT /api/v1/questions/{question_id}/answers/{answer_id}
///
/// Body: any of `answer` (text), `accepted` (bool), `vote` (`"up"`/`"down"`)
pub async fn update_answer<R>(
    State(state): State<QaAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    ResourcePath((question_id, answer_id)): ResourcePath<(QuestionId, AnswerId)>,
    JsonBody(body): JsonBody,
) -> QaResult<Json<AnswerResponse>>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let input = UpdateAnswerInput {
        answer: optional_text(&body, "answer")?,
        accepted: optional_bool(&body, "accepted")?,
        vote: optional_text(&body, "vote")?
            .map(|v| v.parse::<Vote>())
            .transpose()?,
    };

    let answer = UpdateAnswerUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(user, question_id, answer_id, input)
        .await?;
    Ok(Json(answer.into()))
}
