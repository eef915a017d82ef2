//! Orchestration of one validation request.

use formval_core::{FormData, FormId, FormProvider, RequestContext, ValidationVerdict};
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::files::find_file_errors;
use crate::index::SchemaIndex;
use crate::reconcile::{reconcile, ReconcilePolicy};
use crate::transform::copy_and_transform;

/// Validates submissions against a [`FormProvider`].
///
/// Holds no per-request state; a single instance can serve concurrent
/// requests.
#[derive(Debug)]
pub struct FormValidator<P> {
    provider: P,
    policy: ReconcilePolicy,
}

impl<P: FormProvider> FormValidator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_policy(provider, ReconcilePolicy::default())
    }

    pub fn with_policy(provider: P, policy: ReconcilePolicy) -> Self {
        Self { provider, policy }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn policy(&self) -> &ReconcilePolicy {
        &self.policy
    }

    /// Validate `form_data` against the form identified by `form_id`.
    ///
    /// Provider rejections and local file problems end up in the verdict.
    /// The `Err` path is reserved for failures that leave no verdict to give:
    /// unknown form, unreachable provider, or data that cannot be copied.
    #[tracing::instrument(skip_all, fields(form_id = %form_id, trace_id = %ctx.trace_id))]
    pub async fn validate_form(
        &self,
        ctx: &RequestContext,
        form_id: &FormId,
        form_data: &FormData,
    ) -> Result<ValidationVerdict, ValidationError> {
        let schema = self
            .provider
            .fetch_schema(form_id)
            .await
            .map_err(ValidationError::SchemaUnavailable)?;

        let index = SchemaIndex::build(&schema);
        debug!(
            day_components = index.day_components.len(),
            file_components = index.file_messages.len(),
            required_files = index.required_file_keys.len(),
            "schema indexed"
        );

        let original = form_data.data.as_ref();
        let transformed = copy_and_transform(original, &index.day_components)?;
        let local_errors = find_file_errors(original, &index);

        let submission = FormData::new(transformed.unwrap_or_default());
        let outcome = self
            .provider
            .validate_submission(form_id, &submission)
            .await
            .map_err(ValidationError::RemoteTransportFault)?;

        let verdict = reconcile(outcome, local_errors, &index, &self.policy, ctx);
        info!(
            valid = verdict.valid,
            errors = verdict.details().len(),
            "form validated"
        );
        Ok(verdict)
    }
}
