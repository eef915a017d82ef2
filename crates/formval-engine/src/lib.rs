//! # formval-engine - Validation Reconciliation Engine
//!
//! Runs one validation request as a straight-line pipeline:
//!
//! ```text
//! fetch schema ─► index ─┬─► copy + rewrite dates ─► remote validate ─┐
//!                        └─► file completeness check ─────────────────┴─► reconcile ─► verdict
//! ```
//!
//! - [`index`]: one pass over the component tree producing key lookups.
//! - [`transform`]: isolated deep copy of submitted data with day values
//!   rewritten to the provider's display format.
//! - [`files`]: local file completeness and shape errors, derived from the
//!   caller's original data.
//! - [`reconcile`]: filters remote errors by component type, merges local
//!   errors, de-duplicates and builds the verdict.
//! - [`service`]: [`FormValidator`], the orchestration over a
//!   [`FormProvider`](formval_core::FormProvider).
//!
//! All state is request-scoped. Nothing is cached between requests.

pub mod error;
pub mod files;
pub mod index;
pub mod reconcile;
pub mod service;
#[cfg(any(test, feature = "stub"))]
pub mod stub;
pub mod transform;

pub use error::ValidationError;
pub use files::find_file_errors;
pub use index::SchemaIndex;
pub use reconcile::{reconcile, ReconcilePolicy};
pub use service::FormValidator;
pub use transform::copy_and_transform;
