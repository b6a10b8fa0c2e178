//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (any origin, standard methods)
//! - Request tracing with a per-request id
//! - Graceful shutdown
//! - JSON error bodies `{success, error, message}` for every failure,
//!   including unknown routes and unsupported methods

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
