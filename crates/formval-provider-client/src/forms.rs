//! Typed client for the provider's form resources.
//!
//! Forms are addressed as `{base_url}/{formId}`. The provider validates a
//! submission without storing it when called with `?dryrun=1`.

use formval_core::{ErrorDetail, FormData, FormId, FormSchema, FormValue};
use serde::Deserialize;
use url::Url;

use crate::error::ProviderApiError;

// -- Types matching the provider's error payload ------------------------------

/// Body of a `400` answer to a dry-run submission.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoteErrorList {
    #[serde(default)]
    pub details: Vec<RemoteErrorDetail>,
}

/// One error reported by the provider.
///
/// The provider nests the offending key and value under `context`. A flat
/// `field`/`value` pair is accepted too; `context` wins when both appear.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoteErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub path: Option<FormValue>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub value: Option<FormValue>,
    #[serde(default)]
    pub context: Option<RemoteErrorContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoteErrorContext {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<FormValue>,
}

impl RemoteErrorDetail {
    /// Flatten into the shared detail shape. Values are rendered as text.
    pub fn into_error_detail(self) -> ErrorDetail {
        let (field, value) = match self.context {
            Some(context) => (context.key, context.value),
            None => (self.field, self.value),
        };
        ErrorDetail::new(self.message, field, value.and_then(|v| v.render()))
    }
}

impl RemoteErrorList {
    pub fn into_error_details(self) -> Vec<ErrorDetail> {
        self.details
            .into_iter()
            .map(RemoteErrorDetail::into_error_detail)
            .collect()
    }
}

/// Answer to a dry-run submission.
#[derive(Debug, Clone, PartialEq)]
pub enum DryRunOutcome {
    Accepted,
    Rejected(RemoteErrorList),
}

// -- Client -------------------------------------------------------------------

/// Client for form schemas and dry-run submissions.
#[derive(Debug, Clone)]
pub struct FormsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FormsClient {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn form_url(&self, form_id: &FormId, tail: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(form_id.as_str())
                .extend(tail);
        }
        url
    }

    /// Fetch a form schema. Returns `None` if the provider does not know it.
    ///
    /// Calls `GET {base_url}/{formId}`.
    pub async fn get_form(&self, form_id: &FormId) -> Result<Option<FormSchema>, ProviderApiError> {
        let endpoint = format!("GET /{form_id}");
        let url = self.form_url(form_id, &[]);

        let resp = crate::retry::retry_send(|| self.http.get(url.clone()).send())
            .await
            .map_err(|e| ProviderApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderApiError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|e| ProviderApiError::Deserialization {
                endpoint,
                source: e,
            })
    }

    /// Validate a submission without persisting it.
    ///
    /// Calls `POST {base_url}/{formId}/submission?dryrun=1`. A `400` answer
    /// is a rejection carrying the provider's error list.
    pub async fn submit_dry_run(
        &self,
        form_id: &FormId,
        submission: &FormData,
    ) -> Result<DryRunOutcome, ProviderApiError> {
        let endpoint = format!("POST /{form_id}/submission");
        let mut url = self.form_url(form_id, &["submission"]);
        url.query_pairs_mut().append_pair("dryrun", "1");

        let resp = crate::retry::retry_send(|| {
            self.http.post(url.clone()).json(submission).send()
        })
        .await
        .map_err(|e| ProviderApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(DryRunOutcome::Accepted);
        }

        let body = resp.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::BAD_REQUEST {
            let errors = serde_json::from_str(&body)
                .map_err(|e| ProviderApiError::Decode { endpoint, source: e })?;
            return Ok(DryRunOutcome::Rejected(errors));
        }

        Err(ProviderApiError::ApiError {
            endpoint,
            status: status.as_u16(),
            body,
        })
    }
}
