//! Fatal failures of a validation request.
//!
//! Rejections by the provider and local file problems are never errors;
//! they end up as details of the verdict.

use formval_core::{CopyError, GatewayError, IdentifierError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    /// The form identifier was blank.
    #[error("invalid form id: {0}")]
    InvalidFormId(#[from] IdentifierError),

    /// The isolated copy of the submitted data could not be built.
    #[error("failed to copy form data: {0}")]
    Copy(#[from] CopyError),

    /// The schema could not be fetched, or the form does not exist.
    #[error("form schema unavailable: {0}")]
    SchemaUnavailable(#[source] GatewayError),

    /// The provider's validation call failed without a verdict.
    #[error("remote validation failed: {0}")]
    RemoteTransportFault(#[source] GatewayError),
}

impl ValidationError {
    /// Whether the requested form does not exist at the provider.
    pub fn is_form_not_found(&self) -> bool {
        matches!(self, Self::SchemaUnavailable(e) if e.is_not_found())
    }
}
