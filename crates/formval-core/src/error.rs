//! # Error Types
//!
//! Errors shared across the workspace. All use `thiserror`.
//!
//! - [`GatewayError`]: failures talking to the form provider. Rejected
//!   submissions are not errors; they arrive as
//!   [`SubmissionOutcome::Rejected`](crate::gateway::SubmissionOutcome).
//! - [`CopyError`]: the isolated copy of submitted data could not be built.
//! - [`IdentifierError`]: identifier newtype construction failed.

use thiserror::Error;

/// Failure reported by a [`FormProvider`](crate::gateway::FormProvider).
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The provider does not know the requested form.
    #[error("form '{form_id}' not found at provider")]
    FormNotFound {
        /// The form that was requested.
        form_id: String,
    },

    /// The provider answered with a status the gateway does not reconcile.
    #[error("form provider {endpoint} returned {status}: {body}")]
    Status {
        /// Operation label, e.g. `GET /{formId}`.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The request never produced a response (connect failure, timeout).
    #[error("transport failure calling {endpoint}: {reason}")]
    Transport {
        /// Operation label.
        endpoint: String,
        /// Underlying cause.
        reason: String,
    },

    /// The provider's response body could not be decoded.
    #[error("failed to decode response from {endpoint}: {reason}")]
    Decode {
        /// Operation label.
        endpoint: String,
        /// Underlying cause.
        reason: String,
    },
}

impl GatewayError {
    /// Whether this error means the form does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FormNotFound { .. })
    }
}

/// The deep copy of submitted data could not be produced faithfully.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// Data nesting exceeds what the outbound JSON payload may carry.
    #[error("form data nesting exceeds {limit} levels at '{path}'")]
    DepthExceeded {
        /// Maximum supported depth.
        limit: usize,
        /// Dotted path to the value where the limit was hit.
        path: String,
    },
}

impl CopyError {
    /// Prefix the error path with an enclosing segment while unwinding.
    pub fn within(self, segment: &str) -> Self {
        match self {
            Self::DepthExceeded { limit, path } => {
                let path = if path.is_empty() {
                    segment.to_string()
                } else if path.starts_with('[') {
                    format!("{segment}{path}")
                } else {
                    format!("{segment}.{path}")
                };
                Self::DepthExceeded { limit, path }
            }
        }
    }
}

/// Identifier validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("form id must not be empty")]
    EmptyFormId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_error_path_builds_outwards() {
        let err = CopyError::DepthExceeded {
            limit: 4,
            path: String::new(),
        }
        .within("inner")
        .within("[2]")
        .within("rows");
        assert_eq!(
            err,
            CopyError::DepthExceeded {
                limit: 4,
                path: "rows[2].inner".to_string()
            }
        );
    }

    #[test]
    fn not_found_is_distinguished() {
        let err = GatewayError::FormNotFound {
            form_id: "f".into(),
        };
        assert!(err.is_not_found());
        let err = GatewayError::Transport {
            endpoint: "GET /f".into(),
            reason: "timeout".into(),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("timeout"));
    }
}
