use crate::models::ErrorBody;
use axum::Json;
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorBody {
            detail: Some(self.message),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Failures seen by the view synchronizer. None of them escape a handler; each
/// ends as a status banner message.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected request ({status})")]
    Rejected {
        status: u16,
        detail: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
    #[error("invalid API base url: {0}")]
    InvalidBaseUrl(String),
}

impl SyncError {
    /// Text for the status banner: the server's `detail` when it sent one,
    /// the validation message for local checks, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SyncError::Rejected {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            SyncError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
