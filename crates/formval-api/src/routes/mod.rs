//! # API Route Modules
//!
//! - `forms` - validation of form submissions against the provider's
//!   schema and verdict.

pub mod forms;
