//! # Form Provider Gateway
//!
//! The boundary between the validation pipeline and the remote form
//! provider. The HTTP implementation lives in `formval-provider-client`;
//! tests use in-memory implementations.
//!
//! A rejected submission is an expected outcome, not an error. Every other
//! failure is a [`GatewayError`] and aborts the request.

use std::future::Future;

use crate::data::FormData;
use crate::error::GatewayError;
use crate::identity::FormId;
use crate::schema::FormSchema;
use crate::verdict::ErrorDetail;

/// Result of the provider's authoritative validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The provider accepted the submission.
    Accepted,
    /// The provider rejected the submission with these errors.
    Rejected(Vec<ErrorDetail>),
}

/// Remote source of form schemas and authoritative validation.
pub trait FormProvider: Send + Sync {
    /// Fetch the current schema of a form.
    ///
    /// Unknown forms fail with [`GatewayError::FormNotFound`].
    fn fetch_schema(
        &self,
        form_id: &FormId,
    ) -> impl Future<Output = Result<FormSchema, GatewayError>> + Send;

    /// Validate a submission without persisting it.
    fn validate_submission(
        &self,
        form_id: &FormId,
        submission: &FormData,
    ) -> impl Future<Output = Result<SubmissionOutcome, GatewayError>> + Send;
}
