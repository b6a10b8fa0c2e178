//! Category endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::CategoryId;
use crate::http::server::AppState;
use crate::models::{CategoryMap, Question};
use crate::service;

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    // the game client reads this capitalised key
    #[serde(rename = "Success")]
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Questions-in-category response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - all categories as `{id: type}`
async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = service::list_categories(state.store()).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - questions in one category
async fn category_questions(
    State(state): State<AppState>,
    CategoryId(id): CategoryId,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let result = service::category_questions(state.store(), id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: result.questions.len(),
        questions: result.questions,
        current_category: result.category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
