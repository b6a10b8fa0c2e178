//! API error type with IntoResponse
//!
//! Every error body has the same shape and a static message; details are
//! logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::service::TriviaError;

/// API error type with HTTP status mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed request body (400)
    BadRequest,

    /// Question insert failed (402)
    CreationFailed,

    /// Missing resource, empty page or empty search term (404)
    NotFound,

    /// Path exists but not for this method (405)
    MethodNotAllowed,

    /// Quiz request could not be served (422)
    Unprocessable,

    /// Store or other unexpected failure (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::CreationFailed => StatusCode::PAYMENT_REQUIRED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::CreationFailed => "question could not be created",
            Self::NotFound => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable => "unprocessable_entity",
            Self::Internal { .. } => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { message } = &self {
            tracing::error!("Internal error: {}", message);
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<TriviaError> for ApiError {
    fn from(e: TriviaError) -> Self {
        match e {
            TriviaError::NotFound { .. }
            | TriviaError::PageOutOfRange { .. }
            | TriviaError::EmptySearchTerm => {
                tracing::debug!(error = %e, "request rejected as not found");
                Self::NotFound
            }
            TriviaError::CreationFailed(reason) => {
                tracing::warn!(%reason, "question creation failed");
                Self::CreationFailed
            }
            TriviaError::Unprocessable(reason) => {
                tracing::warn!(%reason, "quiz request unprocessable");
                Self::Unprocessable
            }
            TriviaError::Store(e) => Self::Internal {
                message: e.to_string(),
            },
        }
    }
}
