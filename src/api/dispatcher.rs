use crate::{
    error::{AppError, AppResult},
    services::{query::SearchRequest, video_search},
};

use super::{
    event::{GatewayEvent, GatewayResponse},
    AppState,
};

/// Entry point of the function: one event in, one response out
///
/// Never fails; every error is folded into a JSON error response.
pub async fn handle_event(state: &AppState, event: GatewayEvent) -> GatewayResponse {
    let request_id = event.request_id().unwrap_or("unknown").to_string();

    let response = match dispatch(state, &event).await {
        Ok(response) => response,
        Err(e) => {
            if matches!(e, AppError::MethodNotAllowed) {
                tracing::debug!(request_id = %request_id, method = %event.method(), "Method not allowed");
            } else {
                tracing::error!(request_id = %request_id, error = %e, "Video search failed");
            }
            GatewayResponse::from(e)
        }
    };

    tracing::info!(
        request_id = %request_id,
        method = %event.method(),
        status = response.status_code,
        "Function invocation completed"
    );

    response
}

async fn dispatch(state: &AppState, event: &GatewayEvent) -> AppResult<GatewayResponse> {
    match event.method() {
        "OPTIONS" => Ok(GatewayResponse::preflight()),
        "GET" => {
            let source = state.video_source().ok_or(AppError::MissingApiKey)?;
            let request = SearchRequest::from_params(&event.query_params());
            let videos = video_search::search_videos(source.as_ref(), &request).await?;
            GatewayResponse::ok(&videos)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}
