//! # Validation Verdict
//!
//! The only shape callers ever see: a validity flag and, when invalid, an
//! error envelope with a fixed code and message plus the reconciled details.

use serde::{Deserialize, Serialize};

use crate::identity::TraceId;

/// Machine-readable code of every invalid verdict.
pub const FORM_VALIDATION_ERROR_CODE: &str = "FORM_VALIDATION_ERROR";

/// Human-readable message of every invalid verdict.
pub const FORM_VALIDATION_ERROR_MESSAGE: &str = "Form validation error";

/// One validation problem.
///
/// Errors with no `field` cannot be attributed to a schema component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub field: Option<String>,
    pub value: Option<String>,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>, field: Option<String>, value: Option<String>) -> Self {
        Self {
            message: message.into(),
            field,
            value,
        }
    }

    /// Detail attributed to a field key.
    pub fn for_field(
        message: impl Into<String>,
        field: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::new(message, Some(field.into()), value)
    }
}

/// Error body of an invalid verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub trace_id: TraceId,
    pub code: String,
    pub message: String,
    pub details: Vec<ErrorDetail>,
}

impl ErrorEnvelope {
    /// The standard form validation envelope.
    pub fn form_validation(trace_id: TraceId, details: Vec<ErrorDetail>) -> Self {
        Self {
            trace_id,
            code: FORM_VALIDATION_ERROR_CODE.to_string(),
            message: FORM_VALIDATION_ERROR_MESSAGE.to_string(),
            details,
        }
    }
}

/// Final outcome of validating one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub error: Option<ErrorEnvelope>,
}

impl ValidationVerdict {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: ErrorEnvelope) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    /// The reconciled details; empty for a valid verdict.
    pub fn details(&self) -> &[ErrorDetail] {
        match &self.error {
            Some(envelope) => &envelope.details,
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_verdict_serializes_null_error() {
        let json = serde_json::to_value(ValidationVerdict::valid()).unwrap();
        assert_eq!(json, json!({"valid": true, "error": null}));
    }

    #[test]
    fn invalid_verdict_envelope_shape() {
        let verdict = ValidationVerdict::invalid(ErrorEnvelope::form_validation(
            TraceId::from_header(Some("trace-1")),
            vec![ErrorDetail::for_field("Required", "name", None)],
        ));
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(
            json,
            json!({
                "valid": false,
                "error": {
                    "traceId": "trace-1",
                    "code": "FORM_VALIDATION_ERROR",
                    "message": "Form validation error",
                    "details": [{"message": "Required", "field": "name", "value": null}]
                }
            })
        );
        assert_eq!(verdict.details().len(), 1);
    }

    #[test]
    fn valid_verdict_has_no_details() {
        assert!(ValidationVerdict::valid().details().is_empty());
    }
}
