//! Q&A Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};

use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::presentation::handlers::{self, QaAppState};

/// Create the Q&A router for any repository implementation
///
/// Handlers expect `Extension<CurrentUser>`, so the caller layers the
/// access-token middleware on top.
pub fn qa_router<R>(repo: R) -> Router
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let state = QaAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions::<R>).post(handlers::post_question::<R>),
        )
        .route(
            "/questions/{question_id}",
            get(handlers::get_question::<R>).delete(handlers::delete_question::<R>),
        )
        .route(
            "/questions/{question_id}/answers",
            get(handlers::list_answers::<R>).post(handlers::post_answer::<R>),
        )
        .route(
            "/questions/{question_id}/answers/{answer_id}",
            put(handlers::update_answer::<R>),
        )
        .with_state(state)
}
