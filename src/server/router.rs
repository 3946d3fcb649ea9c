use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    middleware::from_fn,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    category::handlers::category_routes,
    health::handlers::health_routes,
    mw::request_mw::request_mw,
    question::handlers::question_routes,
    quiz::handlers::quiz_routes,
    server::{app_state::AppState, error::ServerError},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/health", health_routes(state.clone()))
        .merge(category_routes(state.clone()))
        .merge(question_routes(state.clone()))
        .merge(quiz_routes(state))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors_layer())
        .layer(from_fn(request_mw))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

async fn fallback() -> ServerError {
    ServerError::NotFound("No route matched the request".into())
}

async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
