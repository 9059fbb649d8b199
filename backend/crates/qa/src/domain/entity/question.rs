//! Question Entity

use chrono::{DateTime, Utc};
use kernel::id::{QuestionId, UserId};

use crate::domain::value_object::post_body::PostBody;

#[derive(Debug, Clone)]
pub struct Question {
    pub question_id: QuestionId,
    /// Author; the only user allowed to delete it or accept its answers
    pub user_id: UserId,
    pub body: PostBody,
    pub posted_at: DateTime<Utc>,
}

/// A question before the store assigns its id
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub user_id: UserId,
    pub body: PostBody,
}

impl NewQuestion {
    pub fn into_question(self, question_id: QuestionId, posted_at: DateTime<Utc>) -> Question {
        Question {
            question_id,
            user_id: self.user_id,
            body: self.body,
            posted_at,
        }
    }
}
