//! # formval-provider-client -- Typed Rust client for the form provider
//!
//! The remote form provider owns form schemas and the authoritative
//! validation of submissions. This crate exposes both over HTTP:
//!
//! - **Schemas** via `GET {base_url}/{formId}`
//! - **Dry-run validation** via `POST {base_url}/{formId}/submission?dryrun=1`
//!
//! [`FormProviderClient`] implements
//! [`FormProvider`](formval_core::FormProvider), so the validation engine
//! never sees HTTP types. Transport failures are retried with exponential
//! backoff; every status other than success, `404` on schema lookup, and
//! `400` on submission is surfaced as an error.

pub mod config;
pub mod error;
pub mod forms;
mod gateway;
pub(crate) mod retry;

pub use config::{ConfigError, FormProviderConfig};
pub use error::ProviderApiError;
pub use forms::{DryRunOutcome, RemoteErrorDetail, RemoteErrorList};

use std::time::Duration;

/// Top-level form provider client.
#[derive(Debug, Clone)]
pub struct FormProviderClient {
    forms: forms::FormsClient,
}

impl FormProviderClient {
    /// Create a new client from configuration.
    pub fn new(config: FormProviderConfig) -> Result<Self, ProviderApiError> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = &config.access_token {
            let mut value =
                reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| ProviderApiError::Config(ConfigError::InvalidToken))?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ProviderApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            forms: forms::FormsClient::new(http, config.base_url),
        })
    }

    /// Access the forms client.
    pub fn forms(&self) -> &forms::FormsClient {
        &self.forms
    }
}
