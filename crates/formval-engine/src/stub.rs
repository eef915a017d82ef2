//! In-memory [`FormProvider`] for tests.
//!
//! Enabled for this crate's own tests and, through the `stub` feature, for
//! downstream crates that need a provider without a network.

use std::collections::HashMap;

use formval_core::{
    ErrorDetail, FormData, FormId, FormProvider, FormSchema, GatewayError, SubmissionOutcome,
};
use parking_lot::Mutex;

#[derive(Debug, Clone)]
enum StubOutcome {
    Accept,
    Reject(Vec<ErrorDetail>),
    Fail,
}

/// Serves schemas from a map and answers every submission the same way.
///
/// Submissions are recorded so tests can inspect what the pipeline sent.
#[derive(Debug)]
pub struct StubProvider {
    schemas: HashMap<String, FormSchema>,
    outcome: StubOutcome,
    submissions: Mutex<Vec<(FormId, FormData)>>,
}

impl Default for StubProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StubProvider {
    /// No forms; accepts every submission.
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
            outcome: StubOutcome::Accept,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn with_form(mut self, form_id: &str, schema: FormSchema) -> Self {
        self.schemas.insert(form_id.to_string(), schema);
        self
    }

    /// Reject every submission with `errors`.
    pub fn rejecting(mut self, errors: Vec<ErrorDetail>) -> Self {
        self.outcome = StubOutcome::Reject(errors);
        self
    }

    /// Fail every submission with a transport error.
    pub fn failing_transport(mut self) -> Self {
        self.outcome = StubOutcome::Fail;
        self
    }

    /// Snapshot of the submissions received so far.
    pub fn submissions(&self) -> Vec<(FormId, FormData)> {
        self.submissions.lock().clone()
    }
}

impl FormProvider for StubProvider {
    async fn fetch_schema(&self, form_id: &FormId) -> Result<FormSchema, GatewayError> {
        self.schemas
            .get(form_id.as_str())
            .cloned()
            .ok_or_else(|| GatewayError::FormNotFound {
                form_id: form_id.to_string(),
            })
    }

    async fn validate_submission(
        &self,
        form_id: &FormId,
        submission: &FormData,
    ) -> Result<SubmissionOutcome, GatewayError> {
        self.submissions
            .lock()
            .push((form_id.clone(), submission.clone()));
        match &self.outcome {
            StubOutcome::Accept => Ok(SubmissionOutcome::Accepted),
            StubOutcome::Reject(errors) => Ok(SubmissionOutcome::Rejected(errors.clone())),
            StubOutcome::Fail => Err(GatewayError::Transport {
                endpoint: format!("POST /{form_id}/submission"),
                reason: "connection refused".to_string(),
            }),
        }
    }
}
