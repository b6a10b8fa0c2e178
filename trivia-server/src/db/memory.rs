//! In-memory store for tests
//!
//! Mirrors the Postgres schema rules that matter to the operations:
//! SERIAL ids that are never reused, `NOT NULL` on question and answer,
//! id ordering on every read. `set_unavailable` makes every call fail the
//! way a dropped connection would.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Category, NewQuestion, Paginated, Pagination, Question};

use super::repos::DbError;
use super::store::TriviaStore;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, String>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
}

impl Tables {
    fn insert(&mut self, new: &NewQuestion) -> Result<Question, DbError> {
        let question = new.question.clone().ok_or_else(|| not_null("question"))?;
        let answer = new.answer.clone().ok_or_else(|| not_null("answer"))?;

        self.last_question_id += 1;
        let row = Question {
            id: self.last_question_id,
            question,
            answer,
            category: new.category.clone(),
            difficulty: new.difficulty,
        };
        self.questions.insert(row.id, row.clone());
        Ok(row)
    }
}

fn not_null(column: &str) -> DbError {
    DbError::Constraint {
        message: format!("null value in column \"{}\" violates not-null constraint", column),
    }
}

/// Store held entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category row.
    pub fn with_category(mut self, id: i32, kind: &str) -> Self {
        self.tables.get_mut().categories.insert(id, kind.to_string());
        self
    }

    /// Add a question row with the next id.
    ///
    /// # Panics
    ///
    /// Panics if `question` is missing its text or answer.
    pub fn with_question(mut self, question: NewQuestion) -> Self {
        self.tables
            .get_mut()
            .insert(&question)
            .expect("seed question must have text and answer");
        self
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DbError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .map(|(id, kind)| Category {
                id: *id,
                kind: kind.clone(),
            })
            .collect())
    }

    async fn category(&self, id: i32) -> Result<Option<Category>, DbError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).map(|kind| Category {
            id,
            kind: kind.clone(),
        }))
    }

    async fn question_page(&self, page: Pagination) -> Result<Paginated<Question>, DbError> {
        let all = self.all_questions().await?;
        let mut paginated = Paginated::from_slice(&all, page);
        // Window-function semantics: no rows, no total
        if paginated.items.is_empty() {
            paginated.total = 0;
        }
        Ok(paginated)
    }

    async fn all_questions(&self) -> Result<Vec<Question>, DbError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, DbError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        self.check()?;
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, DbError> {
        self.check()?;
        self.tables.write().await.insert(new)
    }

    async fn delete_question(&self, id: i32) -> Result<i32, DbError> {
        self.check()?;
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|q| q.id)
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })
    }
}
