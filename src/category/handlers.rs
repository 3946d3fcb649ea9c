use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::debug;

use crate::{
    category::{
        db,
        models::{CategoriesResponse, CategoryQuestionsResponse, category_map},
    },
    question,
    server::{app_state::AppState, error::ServerError},
};

pub fn category_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(questions_by_category))
        .with_state(state)
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let categories = db::get_all_categories(state.get_pool()).await?;
    if categories.is_empty() {
        return Err(ServerError::NotFound("There are no categories".into()));
    }

    let response = CategoriesResponse {
        success: true,
        categories: category_map(categories),
    };

    Ok((StatusCode::OK, Json(response)))
}

async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    category_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Path(category_id) = category_id.map_err(|e| ServerError::NotFound(e.body_text()))?;

    let category = db::get_category_by_id(state.get_pool(), category_id)
        .await?
        .ok_or(ServerError::NotFound(format!(
            "Category with id {} does not exist",
            category_id
        )))?;

    let questions =
        question::db::get_questions_by_category(state.get_pool(), category.id).await?;
    debug!(
        "Found {} questions in category {}",
        questions.len(),
        category.kind
    );

    let response = CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: Some(category.kind),
    };

    Ok((StatusCode::OK, Json(response)))
}
