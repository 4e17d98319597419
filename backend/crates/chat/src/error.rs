//! Chat Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::ApiClientError;
use thiserror::Error;

/// Chat-specific result type alias
pub type ChatResult<T> = Result<T, ChatError>;

/// Chat-specific error variants
#[derive(Debug, Error)]
pub enum ChatError {
    /// RAG backend call failed (non-success status, timeout, network)
    #[error("Chat backend call failed: {0}")]
    Backend(#[from] ApiClientError),
}

impl ChatError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChatError::Backend(ApiClientError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            ChatError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::Backend(ApiClientError::NotConfigured) => ErrorKind::ServiceUnavailable,
            ChatError::Backend(_) => ErrorKind::BadGateway,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Chat request failed");
        AppError::new(self.kind(), self.to_string()).into_response()
    }
}
