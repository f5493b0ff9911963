//! Application error type and its HTTP rendering.
//!
//! Every failure the API can report collapses into one of two public payloads:
//!
//! - `400 {"error": "invalid URL"}` for anything caused by the caller's input
//!   (bad URL, bad protocol, unknown or deleted identifier)
//! - `500 {"error": "server error"}` for storage and other internal failures
//!
//! Error details are logged, never returned.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::url_parser::UrlParseError;

/// Public message for validation and lookup failures.
pub const INVALID_URL: &str = "invalid URL";

/// Public message for internal failures.
pub const SERVER_ERROR: &str = "server error";

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug)]
pub enum AppError {
    /// The caller sent something that is not an acceptable URL or identifier.
    Validation { message: String, details: Value },
    /// No (visible) record matches the identifier.
    NotFound { message: String, details: Value },
    /// Storage or other infrastructure failure.
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for failures caused by the caller rather than the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message, .. } => write!(f, "validation error: {message}"),
            Self::NotFound { message, .. } => write!(f, "not found: {message}"),
            Self::Internal { message, .. } => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Validation { message, details } | AppError::NotFound { message, details } => {
                tracing::debug!(%message, %details, "Rejected request");
                (StatusCode::BAD_REQUEST, INVALID_URL)
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR)
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<UrlParseError> for AppError {
    fn from(e: UrlParseError) -> Self {
        let kind = match e {
            UrlParseError::InvalidUrl(_) => "url",
            UrlParseError::UnsupportedProtocol(_) => "protocol",
        };
        AppError::bad_request(e.to_string(), json!({ "kind": kind }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Request validation failed", json!({ "fields": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_render_invalid_url() {
        let response = AppError::bad_request("bad", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::not_found("missing", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_renders_server_error() {
        let response = AppError::internal("boom", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_errors_are_validation_errors() {
        let err: AppError = UrlParseError::UnsupportedProtocol("xyz".to_string()).into();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.is_client_error());

        let err: AppError = UrlParseError::InvalidUrl("test".to_string()).into();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_sqlx_error_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
        assert!(!err.is_client_error());
    }
}
