//! Database layer - connection pool, repositories and the store seam
//!
//! # Design Principles
//!
//! - Connection pool, borrowed per operation and released on every path
//! - Operations receive the store explicitly through [`TriviaStore`]
//! - Transactions for read-modify-write (delete)
//! - Window functions for paginated totals, no second COUNT query

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_schema;
pub use store::{PgStore, TriviaStore};
