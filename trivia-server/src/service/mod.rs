//! Query/command layer
//!
//! One async function per API operation. Each receives the store handle
//! explicitly and reports failures as a [`TriviaError`]; translation to
//! HTTP status codes happens once, in [`crate::http::error`].

pub mod categories;
pub mod questions;
pub mod quiz;

pub use categories::{category_questions, list_categories, CategoryQuestions};
pub use questions::{create_question, delete_question, list_questions, search_questions, QuestionPage};
pub use quiz::{pick_question, play_quiz, QuizOutcome};

use crate::db::DbError;

/// Operation-level error
#[derive(Debug, thiserror::Error)]
pub enum TriviaError {
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("page {page} has no questions")]
    PageOutOfRange { page: i64 },

    #[error("search term is empty")]
    EmptySearchTerm,

    #[error("question could not be created: {0}")]
    CreationFailed(String),

    #[error("unprocessable quiz request: {0}")]
    Unprocessable(String),

    #[error(transparent)]
    Store(DbError),
}

impl From<DbError> for TriviaError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Store(other),
        }
    }
}

pub type TriviaResult<T> = Result<T, TriviaError>;
