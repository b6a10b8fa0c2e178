//! trivia-server: HTTP API for the trivia game
//!
//! Serves categories and questions out of PostgreSQL, with paginated
//! listing, search, creation, deletion and random quiz selection.
//!
//! Layers, leaves first:
//! - [`models`]: rows, request parsing, pagination
//! - [`db`]: the [`db::TriviaStore`] seam, Postgres repositories, in-memory store
//! - [`service`]: one function per operation, typed [`service::TriviaError`]
//! - [`http`]: axum router, handlers and error mapping

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::{ConfigError, DatabaseSettings};
pub use db::{MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
