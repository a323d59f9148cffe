use axum::http::StatusCode;

use crate::formatting::DurationError;

/// Application-level errors
///
/// Every variant is terminal for the request; the `Display` text is what ends
/// up in the `{"error": ...}` body.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("YouTube API key not configured")]
    MissingApiKey,

    #[error("YouTube API Error: {0}")]
    UpstreamApi(String),

    #[error("{0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidDuration(#[from] DurationError),

    #[error("Invalid view count '{0}'")]
    InvalidViewCount(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidEvent(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey
            | AppError::UpstreamApi(_)
            | AppError::HttpClient(_)
            | AppError::InvalidDuration(_)
            | AppError::InvalidViewCount(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
