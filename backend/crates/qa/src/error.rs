//! Q&A Error Types
//!
//! Questions-and-answers error variants that render through the unified
//! `kernel::error::AppError` envelope.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{AnswerId, QuestionId};
use thiserror::Error;

/// Q&A result type alias
pub type QaResult<T> = Result<T, QaError>;

#[derive(Debug, Error)]
pub enum QaError {
    #[error("Question with id:{0} does not exist")]
    QuestionNotFound(QuestionId),

    /// Also used when the answer belongs to a different question
    #[error("Answer with id:{0} does not exist")]
    AnswerNotFound(AnswerId),

    #[error("Duplicate Value. Question already exists")]
    DuplicateQuestion,

    #[error("Duplicate Value. Answer already exists")]
    DuplicateAnswer,

    /// Lost a race with a concurrent accept on the same question
    #[error("Another answer to this question is already accepted")]
    AnswerAlreadyAccepted,

    #[error("Only the author of a question can delete it")]
    NotQuestionAuthor,

    #[error("Only the author of the question can accept an answer")]
    CannotAccept,

    #[error("Only the author of an answer can edit it")]
    CannotEdit,

    #[error("You cannot vote on your own answer")]
    CannotVoteOwnAnswer,

    #[error("Request must contain 'answer', 'accepted' or 'vote' data")]
    NothingToUpdate,

    /// Already in kernel form (request validation)
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl QaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QaError::QuestionNotFound(_) | QaError::AnswerNotFound(_) => ErrorKind::NotFound,
            QaError::DuplicateQuestion
            | QaError::DuplicateAnswer
            | QaError::AnswerAlreadyAccepted => ErrorKind::Conflict,
            QaError::NotQuestionAuthor
            | QaError::CannotAccept
            | QaError::CannotEdit
            | QaError::CannotVoteOwnAnswer => ErrorKind::Forbidden,
            QaError::NothingToUpdate => ErrorKind::BadRequest,
            QaError::App(e) => e.kind(),
            QaError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            QaError::App(e) => e,
            QaError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            QaError::Database(e) => {
                tracing::error!(error = %e, "Q&A database error");
            }
            QaError::App(e) if e.is_server_error() => {
                tracing::error!(error = %e, "Q&A error");
            }
            QaError::NotQuestionAuthor
            | QaError::CannotAccept
            | QaError::CannotEdit
            | QaError::CannotVoteOwnAnswer => {
                tracing::info!(error = %self, "Q&A permission denied");
            }
            _ => {
                tracing::debug!(error = %self, "Q&A error");
            }
        }
    }
}

impl IntoResponse for QaError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        assert_eq!(
            QaError::QuestionNotFound(QuestionId::from_raw(9))
                .into_app_error()
                .status_line(),
            "404: Not Found, Question with id:9 does not exist"
        );
        assert_eq!(
            QaError::DuplicateQuestion.into_app_error().status_line(),
            "409: Conflict, Duplicate Value. Question already exists"
        );
        assert_eq!(QaError::AnswerAlreadyAccepted.kind(), ErrorKind::Conflict);
        assert_eq!(QaError::CannotEdit.kind(), ErrorKind::Forbidden);
        assert_eq!(QaError::NothingToUpdate.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_database_errors_keep_sqlstate_mapping() {
        let err = QaError::from(sqlx::Error::RowNotFound).into_app_error();
        assert_eq!(err.status_code(), 404);
        let err = QaError::from(sqlx::Error::PoolTimedOut).into_app_error();
        assert_eq!(err.status_code(), 503);
    }
}
