use axum::{
    middleware,
    routing::{any, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // The function itself, every method goes to the dispatcher
        .route("/", any(handlers::search_videos))
        .route("/videos", any(handlers::search_videos))
        // Raw serverless event invocation
        .route("/invoke", post(handlers::invoke))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
