use std::{collections::HashSet, sync::Arc};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::{
    quiz::{
        db,
        models::{QuizRequest, QuizResponse},
        picker::pick_next,
    },
    server::{app_state::AppState, error::ServerError},
};

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(state)
}

async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    request: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = request.map_err(|e| ServerError::Unprocessable(e.body_text()))?;

    let scope = request.quiz_category.scope();
    let candidates = db::get_quiz_candidates(state.get_pool(), scope).await?;
    let excluded: HashSet<i32> = request.previous_questions.into_iter().collect();
    debug!(
        "Quiz pool {:?} has {} candidates, {} already served",
        scope,
        candidates.len(),
        excluded.len()
    );

    let mut rng = ChaCha8Rng::from_os_rng();
    let question = pick_next(&candidates, &excluded, &mut rng).cloned();

    if question.is_none() {
        info!("Quiz for {:?} has no questions left", scope);
    }

    let response = QuizResponse {
        success: true,
        question,
    };

    Ok((StatusCode::OK, Json(response)))
}
