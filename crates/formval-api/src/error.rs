//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps engine failures to HTTP status codes with JSON error bodies.
//! Internal and upstream error details are logged, never returned.
//!
//! A rejected submission is not an error: it is a `200` carrying an invalid
//! verdict. Only failures that leave no verdict to give end up here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use formval_engine::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "UPSTREAM_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The form provider failed or could not be reached (502).
    /// Message is logged but not returned to client.
    #[error("upstream error: {0}")]
    BadGateway(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::BadGateway(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => {
                tracing::error!(error = %self, "internal server error");
                "An internal error occurred".to_string()
            }
            Self::BadGateway(_) => {
                tracing::warn!(error = %self, "form provider failure");
                "The form provider is unavailable".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert engine failures to API errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::InvalidFormId(_) => Self::Validation(err.to_string()),
            ValidationError::Copy(_) => Self::Internal(err.to_string()),
            ValidationError::SchemaUnavailable(_) if err.is_form_not_found() => {
                Self::NotFound(err.to_string())
            }
            ValidationError::SchemaUnavailable(_) | ValidationError::RemoteTransportFault(_) => {
                Self::BadGateway(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formval_core::{CopyError, GatewayError, IdentifierError};
    use http_body_util::BodyExt;

    #[test]
    fn status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (
                AppError::Validation("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
            ),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            (AppError::BadGateway("x".into()), StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            (
                AppError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_and_code(), (status, code));
        }
    }

    #[test]
    fn engine_errors_map_to_statuses() {
        let not_found = ValidationError::SchemaUnavailable(GatewayError::FormNotFound {
            form_id: "f1".into(),
        });
        let upstream = ValidationError::SchemaUnavailable(GatewayError::Status {
            endpoint: "GET /f1".into(),
            status: 503,
            body: String::new(),
        });
        let transport = ValidationError::RemoteTransportFault(GatewayError::Transport {
            endpoint: "POST /f1/submission".into(),
            reason: "timed out".into(),
        });
        let copy = ValidationError::Copy(CopyError::DepthExceeded {
            limit: 128,
            path: "a".into(),
        });
        let blank = ValidationError::InvalidFormId(IdentifierError::EmptyFormId);

        assert!(matches!(AppError::from(not_found), AppError::NotFound(_)));
        assert!(matches!(AppError::from(upstream), AppError::BadGateway(_)));
        assert!(matches!(AppError::from(transport), AppError::BadGateway(_)));
        assert!(matches!(AppError::from(copy), AppError::Internal(_)));
        assert!(matches!(AppError::from(blank), AppError::Validation(_)));
    }

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_not_found_keeps_message() {
        let (status, body) = response_parts(AppError::NotFound("form 'f1'".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(body.error.message.contains("form 'f1'"));
    }

    #[tokio::test]
    async fn into_response_hides_upstream_and_internal_details() {
        let (status, body) =
            response_parts(AppError::BadGateway("connect to 10.0.0.7 refused".into())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!body.error.message.contains("10.0.0.7"));

        let (status, body) = response_parts(AppError::Internal("depth 129".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.message, "An internal error occurred");
    }
}
