use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use tracing::info;

use crate::{
    category::{
        self,
        models::{CategoryQuestionsResponse, category_map},
    },
    question::{
        db,
        models::{
            CreateQuestionRequest, CreatedResponse, DeletedResponse, NewQuestion, PageQuery,
            QuestionPageResponse, SearchRequest,
        },
    },
    server::{app_state::AppState, error::ServerError},
};

pub fn question_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/questions", get(get_question_page).post(create_question))
        .route("/questions/{question_id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}

async fn get_question_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Query(query) = query.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let page_num = query.page_num()?;
    let pool = state.get_pool();

    let questions = db::get_question_page(pool, page_num, state.get_page_size()).await?;
    if questions.is_empty() {
        return Err(ServerError::NotFound(format!(
            "Question page {} is empty",
            page_num
        )));
    }

    let total_questions = db::count_questions(pool).await?;
    let categories = category::db::get_all_categories(pool).await?;

    let response = QuestionPageResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(categories),
    };

    Ok((StatusCode::OK, Json(response)))
}

async fn create_question(
    State(state): State<Arc<AppState>>,
    request: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = request?;
    let new_question = NewQuestion::try_from(request)?;

    let id = db::create_question(state.get_pool(), &new_question).await?;
    let response = CreatedResponse {
        success: true,
        created: id,
    };

    Ok((StatusCode::OK, Json(response)))
}

async fn delete_question(
    State(state): State<Arc<AppState>>,
    question_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Path(question_id) = question_id.map_err(|e| ServerError::NotFound(e.body_text()))?;

    if !db::delete_question(state.get_pool(), question_id).await? {
        return Err(ServerError::NotFound(format!(
            "Question with id {} does not exist",
            question_id
        )));
    }

    info!("Deleted question {}", question_id);
    let response = DeletedResponse {
        success: true,
        deleted: question_id,
    };

    Ok((StatusCode::OK, Json(response)))
}

async fn search_questions(
    State(state): State<Arc<AppState>>,
    request: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = request?;

    let Some(search_term) = request
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
    else {
        return Err(ServerError::NotFound("Search term is empty".into()));
    };

    let questions = db::search_questions(state.get_pool(), search_term).await?;
    if questions.is_empty() {
        return Err(ServerError::NotFound(format!(
            "No questions match '{}'",
            search_term
        )));
    }

    let response = CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    };

    Ok((StatusCode::OK, Json(response)))
}
