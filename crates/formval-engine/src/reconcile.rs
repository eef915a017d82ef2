//! # Error Reconciler
//!
//! Combines the provider's outcome with the locally derived file errors into
//! a single [`ValidationVerdict`].
//!
//! Remote errors are trusted except where the provider is known to be
//! unreliable: errors without a field are dropped, and so are errors on
//! components whose type is in the exclusion set of the [`ReconcilePolicy`].
//! File components are always excluded because their errors are recomputed
//! locally.

use std::collections::{BTreeSet, HashSet};

use formval_core::{
    ErrorDetail, ErrorEnvelope, FileType, RequestContext, SubmissionOutcome, ValidationVerdict,
    DATE_TYPE, DAY_TYPE,
};

use crate::index::SchemaIndex;

/// Environment flag that adds the date family to the exclusion set.
pub const EXCLUDE_DATE_TYPES_ENV: &str = "FORMVAL_EXCLUDE_DATE_TYPES";

/// Which component types' remote errors are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePolicy {
    excluded_types: BTreeSet<String>,
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconcilePolicy {
    /// The file family only.
    pub fn new() -> Self {
        Self {
            excluded_types: FileType::ALL
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
        }
    }

    /// Also discard remote errors on `day` and `date` components.
    pub fn with_date_types_excluded(mut self) -> Self {
        self.excluded_types.insert(DAY_TYPE.to_string());
        self.excluded_types.insert(DATE_TYPE.to_string());
        self
    }

    /// Read the deployment policy from `FORMVAL_EXCLUDE_DATE_TYPES`.
    ///
    /// `1`, `true`, `yes` and `on` (any case) enable date exclusion.
    pub fn from_env() -> Self {
        let enabled = std::env::var(EXCLUDE_DATE_TYPES_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        if enabled {
            Self::new().with_date_types_excluded()
        } else {
            Self::new()
        }
    }

    pub fn excludes(&self, component_type: &str) -> bool {
        self.excluded_types.contains(component_type)
    }

    pub fn excluded_types(&self) -> impl Iterator<Item = &str> {
        self.excluded_types.iter().map(String::as_str)
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Build the final verdict.
pub fn reconcile(
    outcome: SubmissionOutcome,
    local_errors: Vec<ErrorDetail>,
    index: &SchemaIndex,
    policy: &ReconcilePolicy,
    ctx: &RequestContext,
) -> ValidationVerdict {
    let remote = match outcome {
        SubmissionOutcome::Accepted => Vec::new(),
        SubmissionOutcome::Rejected(errors) => filter_remote_errors(errors, index, policy),
    };

    let details = merge(remote, local_errors);
    if details.is_empty() {
        ValidationVerdict::valid()
    } else {
        ValidationVerdict::invalid(ErrorEnvelope::form_validation(
            ctx.trace_id.clone(),
            details,
        ))
    }
}

/// Keep remote errors that name a field whose type is not excluded.
///
/// Fields unknown to the schema are kept.
pub fn filter_remote_errors(
    errors: Vec<ErrorDetail>,
    index: &SchemaIndex,
    policy: &ReconcilePolicy,
) -> Vec<ErrorDetail> {
    errors
        .into_iter()
        .filter(|error| match error.field.as_deref() {
            None => false,
            Some(field) => !index.type_of(field).is_some_and(|t| policy.excludes(t)),
        })
        .collect()
}

/// Remote errors first, then local ones, first occurrence of each detail kept.
fn merge(remote: Vec<ErrorDetail>, local: Vec<ErrorDetail>) -> Vec<ErrorDetail> {
    let mut seen = HashSet::new();
    remote
        .into_iter()
        .chain(local)
        .filter(|detail| seen.insert(detail.clone()))
        .collect()
}
