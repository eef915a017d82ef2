//! # Request Extractors
//!
//! Helpers that turn axum rejections into [`AppError`]s, so handlers can
//! take `Result<Json<T>, JsonRejection>` and keep the API's error body shape.

use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::Json;
use formval_core::{TraceId, TRACE_ID_HEADER};

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Trace id of the inbound request, or a fresh one when the header is
/// absent, blank, or not valid UTF-8.
pub fn trace_id(headers: &HeaderMap) -> TraceId {
    TraceId::from_header(
        headers
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
    )
}
