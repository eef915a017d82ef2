//! [`FormProvider`] implementation over HTTP.

use formval_core::{FormData, FormId, FormProvider, FormSchema, GatewayError, SubmissionOutcome};

use crate::error::ProviderApiError;
use crate::forms::DryRunOutcome;
use crate::FormProviderClient;

impl From<ProviderApiError> for GatewayError {
    fn from(err: ProviderApiError) -> Self {
        match err {
            ProviderApiError::Http { endpoint, source } => GatewayError::Transport {
                endpoint,
                reason: source.to_string(),
            },
            ProviderApiError::ApiError {
                endpoint,
                status,
                body,
            } => GatewayError::Status {
                endpoint,
                status,
                body,
            },
            ProviderApiError::Deserialization { endpoint, source } => GatewayError::Decode {
                endpoint,
                reason: source.to_string(),
            },
            ProviderApiError::Decode { endpoint, source } => GatewayError::Decode {
                endpoint,
                reason: source.to_string(),
            },
            ProviderApiError::Config(e) => GatewayError::Transport {
                endpoint: "client_init".into(),
                reason: e.to_string(),
            },
        }
    }
}

impl FormProvider for FormProviderClient {
    async fn fetch_schema(&self, form_id: &FormId) -> Result<FormSchema, GatewayError> {
        self.forms()
            .get_form(form_id)
            .await?
            .ok_or_else(|| GatewayError::FormNotFound {
                form_id: form_id.to_string(),
            })
    }

    async fn validate_submission(
        &self,
        form_id: &FormId,
        submission: &FormData,
    ) -> Result<SubmissionOutcome, GatewayError> {
        match self.forms().submit_dry_run(form_id, submission).await? {
            DryRunOutcome::Accepted => Ok(SubmissionOutcome::Accepted),
            DryRunOutcome::Rejected(errors) => {
                tracing::debug!(
                    form_id = %form_id,
                    errors = errors.details.len(),
                    "provider rejected submission"
                );
                Ok(SubmissionOutcome::Rejected(errors.into_error_details()))
            }
        }
    }
}
