//! In-memory Repository Implementation
//!
//! Backs the tests and a development run without `DATABASE_URL`. Mirrors
//! the PostgreSQL constraints: unique canonical bodies, cascading deletes
//! and a single accepted answer per question.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{AnswerId, QuestionId};
use tokio::sync::RwLock;

use crate::domain::entity::{
    answer::{Answer, NewAnswer},
    question::{NewQuestion, Question},
};
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::domain::value_object::post_body::PostBody;
use crate::error::{QaError, QaResult};

#[derive(Default)]
struct QaTables {
    last_question_id: i64,
    last_answer_id: i64,
    questions: BTreeMap<QuestionId, Question>,
    answers: BTreeMap<AnswerId, Answer>,
}

impl QaTables {
    fn question_body_taken(&self, body: &PostBody) -> bool {
        self.questions.values().any(|q| q.body.is_duplicate_of(body))
    }

    /// `except` skips the answer being edited
    fn answer_body_taken(
        &self,
        question_id: QuestionId,
        body: &PostBody,
        except: Option<AnswerId>,
    ) -> bool {
        self.answers.values().any(|a| {
            a.question_id == question_id
                && Some(a.answer_id) != except
                && a.body.is_duplicate_of(body)
        })
    }
}

/// Process-local question and answer store; clones share the same tables
#[derive(Clone, Default)]
pub struct InMemoryQaRepository {
    tables: Arc<RwLock<QaTables>>,
}

impl InMemoryQaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionRepository for InMemoryQaRepository {
    async fn create(&self, question: NewQuestion) -> QaResult<Question> {
        let mut tables = self.tables.write().await;
        if tables.question_body_taken(&question.body) {
            return Err(QaError::DuplicateQuestion);
        }

        tables.last_question_id += 1;
        let question =
            question.into_question(QuestionId::from_raw(tables.last_question_id), Utc::now());
        tables
            .questions
            .insert(question.question_id, question.clone());
        Ok(question)
    }

    async fn find_all(&self) -> QaResult<Vec<Question>> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn find_by_id(&self, question_id: QuestionId) -> QaResult<Option<Question>> {
        Ok(self.tables.read().await.questions.get(&question_id).cloned())
    }

    async fn exists_by_body(&self, body: &PostBody) -> QaResult<bool> {
        Ok(self.tables.read().await.question_body_taken(body))
    }

    async fn delete(&self, question_id: QuestionId) -> QaResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.questions.remove(&question_id).is_none() {
            return Ok(false);
        }
        tables.answers.retain(|_, a| a.question_id != question_id);
        Ok(true)
    }
}

impl AnswerRepository for InMemoryQaRepository {
    async fn create(&self, answer: NewAnswer) -> QaResult<Answer> {
        let mut tables = self.tables.write().await;
        if !tables.questions.contains_key(&answer.question_id) {
            return Err(QaError::QuestionNotFound(answer.question_id));
        }
        if tables.answer_body_taken(answer.question_id, &answer.body, None) {
            return Err(QaError::DuplicateAnswer);
        }

        tables.last_answer_id += 1;
        let answer = answer.into_answer(AnswerId::from_raw(tables.last_answer_id), Utc::now());
        tables.answers.insert(answer.answer_id, answer.clone());
        Ok(answer)
    }

    async fn find_by_question(&self, question_id: QuestionId) -> QaResult<Vec<Answer>> {
        Ok(self
            .tables
            .read()
            .await
            .answers
            .values()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, answer_id: AnswerId) -> QaResult<Option<Answer>> {
        Ok(self.tables.read().await.answers.get(&answer_id).cloned())
    }

    async fn exists_by_body(&self, question_id: QuestionId, body: &PostBody) -> QaResult<bool> {
        Ok(self
            .tables
            .read()
            .await
            .answer_body_taken(question_id, body, None))
    }

    async fn update(&self, answer: &Answer) -> QaResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.answers.contains_key(&answer.answer_id) {
            return Err(QaError::AnswerNotFound(answer.answer_id));
        }
        if tables.answer_body_taken(answer.question_id, &answer.body, Some(answer.answer_id)) {
            return Err(QaError::DuplicateAnswer);
        }

        if answer.accepted {
            for other in tables.answers.values_mut() {
                if other.question_id == answer.question_id {
                    other.accepted = false;
                }
            }
        }
        tables.answers.insert(answer.answer_id, answer.clone());
        Ok(())
    }
}
