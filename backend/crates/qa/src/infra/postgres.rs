//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{AnswerId, QuestionId, UserId};
use sqlx::PgPool;

use crate::domain::entity::{
    answer::{Answer, NewAnswer},
    question::{NewQuestion, Question},
};
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::domain::value_object::post_body::PostBody;
use crate::error::{QaError, QaResult};

const QUESTION_BODY_KEY: &str = "questions_body_canonical_key";
const ANSWER_BODY_KEY: &str = "answers_question_body_key";
const ONE_ACCEPTED_IDX: &str = "answers_one_accepted_idx";

/// PostgreSQL-backed question and answer repository
#[derive(Clone)]
pub struct PgQaRepository {
    pool: PgPool,
}

impl PgQaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `questions` and `answers` tables and their indexes if
    /// absent. Requires the `users` table.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        for statement in schema_statements() {
            sqlx::query(statement.as_str()).execute(&self.pool).await?;
        }

        tracing::debug!("Ensured questions and answers tables");
        Ok(())
    }
}

fn schema_statements() -> [String; 3] {
    [
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                question_id    BIGSERIAL PRIMARY KEY,
                user_id        BIGINT NOT NULL REFERENCES users (user_id) ON DELETE CASCADE,
                body           TEXT NOT NULL,
                body_canonical TEXT NOT NULL,
                posted_at      TIMESTAMPTZ NOT NULL DEFAULT now(),
                CONSTRAINT {QUESTION_BODY_KEY} UNIQUE (body_canonical)
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS answers (
                answer_id      BIGSERIAL PRIMARY KEY,
                question_id    BIGINT NOT NULL REFERENCES questions (question_id)
                                   ON UPDATE CASCADE ON DELETE CASCADE,
                user_id        BIGINT NOT NULL REFERENCES users (user_id) ON DELETE CASCADE,
                body           TEXT NOT NULL,
                body_canonical TEXT NOT NULL,
                votes          INTEGER NOT NULL DEFAULT 0,
                accepted       BOOLEAN NOT NULL DEFAULT FALSE,
                posted_at      TIMESTAMPTZ NOT NULL DEFAULT now(),
                CONSTRAINT {ANSWER_BODY_KEY} UNIQUE (question_id, body_canonical)
            )
            "#
        ),
        format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS {ONE_ACCEPTED_IDX} \
             ON answers (question_id) WHERE accepted"
        ),
    ]
}

// ============================================================================
// Question Repository Implementation
// ============================================================================

impl QuestionRepository for PgQaRepository {
    async fn create(&self, question: NewQuestion) -> QaResult<Question> {
        let (question_id, posted_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            INSERT INTO questions (user_id, body, body_canonical)
            VALUES ($1, $2, $3)
            RETURNING question_id, posted_at
            "#,
        )
        .bind(question.user_id.get())
        .bind(question.body.text())
        .bind(question.body.canonical())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_violation(e, None))?;

        Ok(question.into_question(QuestionId::from_raw(question_id), posted_at))
    }

    async fn find_all(&self) -> QaResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT question_id, user_id, body, posted_at
            FROM questions
            ORDER BY question_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }

    async fn find_by_id(&self, question_id: QuestionId) -> QaResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT question_id, user_id, body, posted_at
            FROM questions
            WHERE question_id = $1
            "#,
        )
        .bind(question_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(QuestionRow::into_question))
    }

    async fn exists_by_body(&self, body: &PostBody) -> QaResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM questions WHERE body_canonical = $1)",
        )
        .bind(body.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn delete(&self, question_id: QuestionId) -> QaResult<bool> {
        let deleted = sqlx::query("DELETE FROM questions WHERE question_id = $1")
            .bind(question_id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Answer Repository Implementation
// ============================================================================

impl AnswerRepository for PgQaRepository {
    async fn create(&self, answer: NewAnswer) -> QaResult<Answer> {
        let (answer_id, posted_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            INSERT INTO answers (question_id, user_id, body, body_canonical)
            VALUES ($1, $2, $3, $4)
            RETURNING answer_id, posted_at
            "#,
        )
        .bind(answer.question_id.get())
        .bind(answer.user_id.get())
        .bind(answer.body.text())
        .bind(answer.body.canonical())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(e, Some(QaError::QuestionNotFound(answer.question_id)))
        })?;

        Ok(answer.into_answer(AnswerId::from_raw(answer_id), posted_at))
    }

    async fn find_by_question(&self, question_id: QuestionId) -> QaResult<Vec<Answer>> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT answer_id, question_id, user_id, body, votes, accepted, posted_at
            FROM answers
            WHERE question_id = $1
            ORDER BY answer_id
            "#,
        )
        .bind(question_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AnswerRow::into_answer).collect())
    }

    async fn find_by_id(&self, answer_id: AnswerId) -> QaResult<Option<Answer>> {
        let row = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT answer_id, question_id, user_id, body, votes, accepted, posted_at
            FROM answers
            WHERE answer_id = $1
            "#,
        )
        .bind(answer_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AnswerRow::into_answer))
    }

    async fn exists_by_body(&self, question_id: QuestionId, body: &PostBody) -> QaResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM answers WHERE question_id = $1 AND body_canonical = $2)",
        )
        .bind(question_id.get())
        .bind(body.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, answer: &Answer) -> QaResult<()> {
        let mut tx = self.pool.begin().await?;

        if answer.accepted {
            sqlx::query(
                r#"
                UPDATE answers SET accepted = FALSE
                WHERE question_id = $1 AND answer_id <> $2 AND accepted
                "#,
            )
            .bind(answer.question_id.get())
            .bind(answer.answer_id.get())
            .execute(&mut *tx)
            .await?;
        }

        let updated = sqlx::query(
            r#"
            UPDATE answers SET
                body = $2,
                body_canonical = $3,
                votes = $4,
                accepted = $5
            WHERE answer_id = $1
            "#,
        )
        .bind(answer.answer_id.get())
        .bind(answer.body.text())
        .bind(answer.body.canonical())
        .bind(answer.votes)
        .bind(answer.accepted)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_constraint_violation(e, None))?
        .rows_affected();

        if updated == 0 {
            return Err(QaError::AnswerNotFound(answer.answer_id));
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Unique violations map by constraint name; foreign-key violations become
/// `on_missing_parent` when given. Anything else stays a database error.
fn map_constraint_violation(err: sqlx::Error, on_missing_parent: Option<QaError>) -> QaError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            if let Some(mapped) = unique_violation_error(db_err.constraint()) {
                return mapped;
            }
        }
        if db_err.is_foreign_key_violation() {
            if let Some(mapped) = on_missing_parent {
                return mapped;
            }
        }
    }
    QaError::Database(err)
}

fn unique_violation_error(constraint: Option<&str>) -> Option<QaError> {
    match constraint? {
        QUESTION_BODY_KEY => Some(QaError::DuplicateQuestion),
        ANSWER_BODY_KEY => Some(QaError::DuplicateAnswer),
        ONE_ACCEPTED_IDX => Some(QaError::AnswerAlreadyAccepted),
        _ => None,
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct QuestionRow {
    question_id: i64,
    user_id: i64,
    body: String,
    posted_at: DateTime<Utc>,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question {
            question_id: QuestionId::from_raw(self.question_id),
            user_id: UserId::from_raw(self.user_id),
            body: PostBody::from_db(self.body),
            posted_at: self.posted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AnswerRow {
    answer_id: i64,
    question_id: i64,
    user_id: i64,
    body: String,
    votes: i32,
    accepted: bool,
    posted_at: DateTime<Utc>,
}

impl AnswerRow {
    fn into_answer(self) -> Answer {
        Answer {
            answer_id: AnswerId::from_raw(self.answer_id),
            question_id: QuestionId::from_raw(self.question_id),
            user_id: UserId::from_raw(self.user_id),
            body: PostBody::from_db(self.body),
            votes: self.votes,
            accepted: self.accepted,
            posted_at: self.posted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violations_map_by_constraint() {
        assert!(matches!(
            unique_violation_error(Some(QUESTION_BODY_KEY)),
            Some(QaError::DuplicateQuestion)
        ));
        assert!(matches!(
            unique_violation_error(Some(ANSWER_BODY_KEY)),
            Some(QaError::DuplicateAnswer)
        ));

        let accepted = unique_violation_error(Some(ONE_ACCEPTED_IDX)).unwrap();
        assert_eq!(
            accepted.into_app_error().status_line(),
            "409: Conflict, Another answer to this question is already accepted"
        );

        assert!(unique_violation_error(Some("users_email_key")).is_none());
        assert!(unique_violation_error(None).is_none());
    }

    #[test]
    fn test_unmapped_errors_stay_database_errors() {
        let err = map_constraint_violation(sqlx::Error::PoolTimedOut, None);
        assert!(matches!(err, QaError::Database(_)));
    }

    #[test]
    fn test_schema_declares_mapped_constraints() {
        let schema = schema_statements().join("\n");
        for name in [QUESTION_BODY_KEY, ANSWER_BODY_KEY, ONE_ACCEPTED_IDX] {
            assert!(schema.contains(name), "{name} missing from schema");
        }
    }
}
