//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{AnswerId, QuestionId, UserId};
use serde::Serialize;

use crate::domain::entity::{answer::Answer, question::Question};

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub user_id: UserId,
    pub question: String,
    pub date_posted: DateTime<Utc>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.question_id,
            user_id: question.user_id,
            question: question.body.text().to_string(),
            date_posted: question.posted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub user_id: UserId,
    pub answer: String,
    pub votes: i32,
    pub accepted: bool,
    pub date_posted: DateTime<Utc>,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.answer_id,
            question_id: answer.question_id,
            user_id: answer.user_id,
            answer: answer.body.text().to_string(),
            votes: answer.votes,
            accepted: answer.accepted,
            date_posted: answer.posted_at,
        }
    }
}
