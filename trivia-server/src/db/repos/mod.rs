//! Repository implementations for database access
//!
//! Each repository borrows the pool for the length of one call:
//! - Ordered by id for every list (stable pagination)
//! - Window-function totals for paginated reads
//! - Transactions for multi-step operations

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violated: {message}")]
    Constraint { message: String },
}
