//! # Validate Subcommand
//!
//! Runs a submission file through the same pipeline the API uses and prints
//! the verdict as pretty JSON.
//!
//! The data file holds the submission envelope, `{"data": {...}}`, exactly
//! as the API accepts it.
//!
//! Exit codes: 0 valid, 2 invalid, 1 on operational error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use formval_core::{FormData, FormId, FormProvider, RequestContext, TraceId, ValidationVerdict};
use formval_engine::{FormValidator, ReconcilePolicy};
use formval_provider_client::{FormProviderClient, FormProviderConfig};

/// Exit code for a submission the provider and local rules accept.
pub const EXIT_VALID: u8 = 0;

/// Exit code for a submission with validation errors.
pub const EXIT_INVALID: u8 = 2;

/// Arguments for the `formval validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifier of the form at the provider.
    #[arg(long)]
    pub form_id: String,

    /// Path to the submission file.
    #[arg(long, value_name = "PATH")]
    pub data: PathBuf,

    /// Base URL of the form provider.
    #[arg(long, env = "FORM_PROVIDER_URL")]
    pub provider_url: String,

    /// Bearer token for the form provider.
    #[arg(long, env = "FORM_PROVIDER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Provider request timeout in seconds.
    #[arg(long, env = "FORM_PROVIDER_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Also discard provider errors on day and date components.
    #[arg(long)]
    pub exclude_date_types: bool,

    /// Trace id to stamp on the verdict; generated when absent.
    #[arg(long)]
    pub trace_id: Option<String>,
}

impl ValidateArgs {
    fn policy(&self) -> ReconcilePolicy {
        if self.exclude_date_types {
            ReconcilePolicy::new().with_date_types_excluded()
        } else {
            ReconcilePolicy::from_env()
        }
    }

    fn provider_config(&self) -> Result<FormProviderConfig> {
        let mut config = FormProviderConfig::new(&self.provider_url)?
            .with_timeout_secs(self.timeout_secs);
        if let Some(token) = self.token.as_deref().filter(|t| !t.trim().is_empty()) {
            config = config.with_access_token(token);
        }
        Ok(config)
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let form_data: FormData = crate::read_json(&args.data)?;
    let form_id = FormId::new(args.form_id.as_str())?;
    let ctx = RequestContext::new(TraceId::from_header(args.trace_id.as_deref()));

    let provider = FormProviderClient::new(args.provider_config()?)?;
    let validator = FormValidator::with_policy(provider, args.policy());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let verdict = runtime.block_on(validate(&validator, &ctx, &form_id, &form_data))?;

    println!("{}", render_verdict(&verdict)?);
    Ok(exit_code(&verdict))
}

/// Run one validation.
pub async fn validate<P: FormProvider>(
    validator: &FormValidator<P>,
    ctx: &RequestContext,
    form_id: &FormId,
    form_data: &FormData,
) -> Result<ValidationVerdict> {
    validator
        .validate_form(ctx, form_id, form_data)
        .await
        .with_context(|| format!("validation of form '{form_id}' failed"))
}

pub fn render_verdict(verdict: &ValidationVerdict) -> Result<String> {
    serde_json::to_string_pretty(verdict).context("failed to serialize verdict")
}

pub fn exit_code(verdict: &ValidationVerdict) -> u8 {
    if verdict.valid {
        EXIT_VALID
    } else {
        EXIT_INVALID
    }
}
