//! # HTTP API Errors
//!
//! Every failure leaves the server as `{"success": false, "error": ...}`.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::quote::QuoteError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Quote lookup failed. The cause is logged, never returned.
    #[error("Invalid parameters")]
    InvalidParameters,

    /// Query string could not be decoded
    #[error("{0}")]
    InvalidQueryParam(String),

    /// No route for this path and method
    #[error("Endpoint not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected failure; the message is returned as-is
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameters => StatusCode::BAD_REQUEST,
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(_: QuoteError) -> Self {
        ApiError::InvalidParameters
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

/// Turn a handler panic into a 500 carrying the panic message
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };

    error!(error = %message, "request handler panicked");
    ApiError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidParameters.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_quote_errors_are_generic() {
        let err = ApiError::from(QuoteError::UnknownAircraft("concorde".to_string()));
        assert_eq!(err, ApiError::InvalidParameters);
        assert_eq!(err.to_string(), "Invalid parameters");
    }

    #[test]
    fn test_query_param_error_keeps_detail() {
        let err = ApiError::InvalidQueryParam("Failed to deserialize query string".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Failed to deserialize query string");
    }

    #[test]
    fn test_error_body() {
        let body = serde_json::to_value(ErrorResponse::from(ApiError::NotFound)).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Endpoint not found");
    }

    #[tokio::test]
    async fn test_panic_message_extracted() {
        let response = panic_response(Box::new("exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "exploded");
    }

    #[tokio::test]
    async fn test_formatted_panic_message_extracted() {
        let response = panic_response(Box::new(format!("seat {} missing", 3)));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "seat 3 missing");
    }
}
