use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{error::AppError, middleware::RequestId};

use super::{
    dispatcher::handle_event,
    event::{GatewayEvent, GatewayResponse, RequestContext},
    AppState,
};

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Serves the function over plain HTTP
///
/// The real method and query string become the event, so `OPTIONS`, `POST`
/// and friends are answered by the dispatcher rather than the router.
pub async fn search_videos(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
) -> GatewayResponse {
    let event = GatewayEvent::new(method.as_str())
        .with_query(params)
        .with_request_id(request_id.as_str());

    handle_event(&state, event).await
}

/// Raw invocation: takes the serverless event JSON, returns the response JSON
///
/// A body that is not a valid event gets the function's own JSON error shape
/// (with the CORS origin header) instead of axum's plain-text rejection.
pub async fn invoke(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    event: Result<Json<GatewayEvent>, JsonRejection>,
) -> Response {
    let mut event = match event {
        Ok(Json(event)) => event,
        Err(rejection) => {
            tracing::warn!(
                request_id = %request_id,
                error = %rejection.body_text(),
                "Rejected malformed invocation event"
            );
            return GatewayResponse::from(AppError::InvalidEvent(rejection.body_text()))
                .into_response();
        }
    };

    if event.request_id().is_none() {
        event.request_context = Some(RequestContext {
            request_id: Some(request_id.to_string()),
        });
    }

    Json(handle_event(&state, event).await).into_response()
}
