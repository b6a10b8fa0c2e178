//! Quiz endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::Question;
use crate::service::{self, QuizOutcome};

/// Quiz response.
///
/// `question` is `null` exactly when `exhausted` is true.
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// The `quiz_category` descriptor as sent
    pub id: Value,
    pub question: Option<Question>,
    pub exhausted: bool,
}

/// POST /quizzes - next unseen question in a category
async fn play_quiz(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<QuizResponse>, ApiError> {
    let (request, outcome) = service::play_quiz(state.store(), &body).await?;

    let (question, exhausted) = match outcome {
        QuizOutcome::Question(q) => (Some(q), false),
        QuizOutcome::Exhausted => (None, true),
    };

    Ok(Json(QuizResponse {
        success: true,
        id: request.descriptor,
        question,
        exhausted,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
