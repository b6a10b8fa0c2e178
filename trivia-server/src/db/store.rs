//! Store seam for the operation layer
//!
//! Every operation in [`crate::service`] takes a `&S where S: TriviaStore`.
//! [`PgStore`] is the production implementation over the repositories;
//! [`super::MemoryStore`] backs the tests.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Category, NewQuestion, Paginated, Pagination, Question};

use super::repos::{CategoryRepo, DbError, QuestionRepo};

/// Data access required by the trivia operations
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    /// Single category, `None` if absent
    async fn category(&self, id: i32) -> Result<Option<Category>, DbError>;

    /// One id-ordered page of questions plus the unpaginated total
    async fn question_page(&self, page: Pagination) -> Result<Paginated<Question>, DbError>;

    /// Every question ordered by id
    async fn all_questions(&self) -> Result<Vec<Question>, DbError>;

    /// Questions whose category field equals `category`, ordered by id
    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, DbError>;

    /// Case-insensitive substring match on question text, ordered by id
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    /// Insert and return the stored row with its new id
    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, DbError>;

    /// Delete by id; `DbError::NotFound` if there is no such row
    async fn delete_question(&self, id: i32) -> Result<i32, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn category(&self, id: i32) -> Result<Option<Category>, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn question_page(&self, page: Pagination) -> Result<Paginated<Question>, DbError> {
        QuestionRepo::new(&self.pool).page(page).await
    }

    async fn all_questions(&self) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).all().await
    }

    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).in_category(category).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).create(new).await
    }

    async fn delete_question(&self, id: i32) -> Result<i32, DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }
}
