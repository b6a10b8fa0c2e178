//! Question repository
//!
//! Handles question reads, inserts and deletes:
//! - page: LIMIT/OFFSET with `COUNT(*) OVER()` for the unpaginated total
//! - search: ILIKE substring match with escaped wildcards
//! - delete: row lock then delete inside one transaction

use sqlx::{FromRow, PgPool};

use crate::models::{NewQuestion, Paginated, Pagination, Question};

use super::DbError;

/// Question row carrying the window-function total of its page query
#[derive(FromRow)]
struct PagedQuestion {
    #[sqlx(flatten)]
    question: Question,
    total: i64,
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of questions ordered by id.
    ///
    /// The total comes from a window function, so an out-of-range page
    /// reports a total of 0 along with no items.
    pub async fn page(&self, page: Pagination) -> Result<Paginated<Question>, DbError> {
        let rows = sqlx::query_as::<_, PagedQuestion>(
            r#"
            SELECT
                id,
                question,
                answer,
                category,
                difficulty,
                COUNT(*) OVER() as total
            FROM questions
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page.limit()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(self.pool)
        .await?;

        let total = rows.first().map_or(0, |r| r.total);
        let items = rows.into_iter().map(|r| r.question).collect();

        Ok(Paginated {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Every question ordered by id.
    pub async fn all(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions whose stored category equals `category`.
    pub async fn in_category(&self, category: &str) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id ASC
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring search on the question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id ASC
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Insert a question and return the stored row.
    pub async fn create(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question.as_deref())
        .bind(new.answer.as_deref())
        .bind(new.category.as_deref())
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Delete a question by id.
    ///
    /// The row is locked and removed in one transaction. Dropping the
    /// transaction on any error path rolls it back; a failed commit is
    /// returned to the caller.
    pub async fn delete(&self, id: i32) -> Result<i32, DbError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(i32,)> =
            sqlx::query_as("SELECT id FROM questions WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_none() {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }

        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(id)
    }
}

/// Escape LIKE metacharacters so the term matches literally.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
