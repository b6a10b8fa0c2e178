//! Question endpoints

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{parse_page, CategoryMap, CreateQuestionRequest, Question};
use crate::service;

/// `?page=` query; kept as text so junk falls back to page 1
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Search request body
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Paginated question list response
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub categories: CategoryMap,
    pub total_questions: i64,
    pub current_category: Option<String>,
}

/// Search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// Creation response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    #[serde(rename = "questions category")]
    pub category: Option<String>,
}

/// Deletion response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub id: i32,
    pub success: bool,
}

/// GET /questions?page=N - ten questions per page
async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = parse_page(params.page.as_deref());
    let result = service::list_questions(state.store(), page).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: result.questions,
        categories: result.categories,
        total_questions: result.total_questions,
        current_category: None,
    }))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let question = service::create_question(state.store(), req).await?;

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
        category: question.category,
    }))
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = service::delete_question(state.store(), &token).await?;
    Ok(Json(DeletedResponse { id, success: true }))
}

/// POST /questions/search - substring search on question text
async fn search_questions(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = req.search_term.unwrap_or_default();
    let questions = service::search_questions(state.store(), &term).await?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
