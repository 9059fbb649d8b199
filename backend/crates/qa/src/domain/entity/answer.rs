//! Answer Entity

use chrono::{DateTime, Utc};
use kernel::id::{AnswerId, QuestionId, UserId};

use crate::domain::value_object::{post_body::PostBody, vote::Vote};

#[derive(Debug, Clone)]
pub struct Answer {
    pub answer_id: AnswerId,
    pub question_id: QuestionId,
    /// Author; the only user allowed to edit it
    pub user_id: UserId,
    pub body: PostBody,
    /// Net votes; may go negative
    pub votes: i32,
    pub accepted: bool,
    pub posted_at: DateTime<Utc>,
}

impl Answer {
    pub fn edit(&mut self, body: PostBody) {
        self.body = body;
    }

    pub fn set_accepted(&mut self, accepted: bool) {
        self.accepted = accepted;
    }

    pub fn apply_vote(&mut self, vote: Vote) {
        self.votes = self.votes.saturating_add(vote.delta());
    }
}

/// An answer before the store assigns its id
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: QuestionId,
    pub user_id: UserId,
    pub body: PostBody,
}

impl NewAnswer {
    /// New answers start with no votes and unaccepted
    pub fn into_answer(self, answer_id: AnswerId, posted_at: DateTime<Utc>) -> Answer {
        Answer {
            answer_id,
            question_id: self.question_id,
            user_id: self.user_id,
            body: self.body,
            votes: 0,
            accepted: false,
            posted_at,
        }
    }
}
