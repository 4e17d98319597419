//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::ApiClientError;
use thiserror::Error;

use crate::domain::value_object::{MobileError, OtpCodeError};

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signing secret missing or malformed (fatal configuration error)
    #[error("Session signing secret is not configured")]
    MissingSecret,

    /// Session token absent, forged, malformed, or violating invariants.
    /// Callers must treat this as "no session", never as retryable.
    #[error("Session is invalid or expired")]
    SessionInvalid,

    /// Backend-issued bearer token could not be decoded
    #[error("Access token could not be decoded")]
    InvalidAccessToken,

    /// Mobile number failed validation
    #[error("Invalid mobile number: {0}")]
    InvalidMobile(#[from] MobileError),

    /// Verification code failed validation
    #[error("Invalid verification code: {0}")]
    InvalidCode(#[from] OtpCodeError),

    /// Backend identity API call failed (non-success status, timeout, network)
    #[error("Identity backend call failed: {0}")]
    Backend(#[from] ApiClientError),

    /// Backend answered but reported failure in its payload
    #[error("Identity backend rejected the request")]
    BackendRejected,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::InvalidMobile(_) | AuthError::InvalidCode(_) => StatusCode::BAD_REQUEST,
            AuthError::Backend(ApiClientError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Backend(ApiClientError::Timeout) => StatusCode::BAD_GATEWAY,
            AuthError::Backend(_) | AuthError::BackendRejected => StatusCode::BAD_GATEWAY,
            AuthError::MissingSecret
            | AuthError::InvalidAccessToken
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::InvalidMobile(_) | AuthError::InvalidCode(_) => ErrorKind::BadRequest,
            AuthError::Backend(ApiClientError::NotConfigured) => ErrorKind::ServiceUnavailable,
            AuthError::Backend(_) | AuthError::BackendRejected => ErrorKind::BadGateway,
            AuthError::MissingSecret
            | AuthError::InvalidAccessToken
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::MissingSecret => {
                tracing::error!("Session signing secret is not configured");
            }
            AuthError::Backend(e) => {
                tracing::error!(error = %e, "Identity backend call failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::SessionInvalid => {
                tracing::warn!("Request with invalid session token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::SessionInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Backend(ApiClientError::Timeout).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AuthError::Backend(ApiClientError::NotConfigured).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AuthError::MissingSecret.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(AuthError::SessionInvalid.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            AuthError::BackendRejected.kind(),
            ErrorKind::BadGateway
        );
    }
}
