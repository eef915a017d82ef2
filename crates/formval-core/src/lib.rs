//! # formval-core - Foundational Types for Form Validation
//!
//! Leaf crate of the workspace. Defines the types every other crate speaks:
//!
//! - [`FormSchema`] / [`Component`] - the component tree fetched from the
//!   form provider.
//! - [`FormValue`] / [`FormMap`] / [`FormData`] - submitted data as a tagged
//!   union, so walkers pattern-match instead of inspecting runtime types.
//! - [`ErrorDetail`] / [`ErrorEnvelope`] / [`ValidationVerdict`] - the
//!   verdict contract returned to callers.
//! - [`FormId`] / [`TraceId`] / [`RequestContext`] - identifier newtypes and
//!   the explicitly passed per-request context.
//! - [`FormProvider`] - the gateway trait implemented by the HTTP client and
//!   by in-memory stubs.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `formval-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod context;
pub mod data;
pub mod error;
pub mod gateway;
pub mod identity;
pub mod schema;
pub mod verdict;

pub use context::{RequestContext, TRACE_ID_HEADER};
pub use data::{FormData, FormMap, FormValue};
pub use error::{CopyError, GatewayError, IdentifierError};
pub use gateway::{FormProvider, SubmissionOutcome};
pub use identity::{FormId, TraceId};
pub use schema::{Component, FileType, FormSchema, ValidateRule, DATE_TYPE, DAY_TYPE};
pub use verdict::{
    ErrorDetail, ErrorEnvelope, ValidationVerdict, FORM_VALIDATION_ERROR_CODE,
    FORM_VALIDATION_ERROR_MESSAGE,
};
