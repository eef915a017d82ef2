//! # formval-cli - CLI Tool for Form Validation
//!
//! Provides the `formval` command-line interface.
//!
//! ## Subcommands
//!
//! - `formval validate` - run a submission file through the full validation
//!   pipeline against the configured form provider.
//! - `formval index` - print the key lookups derived from a schema file,
//!   without contacting the provider.
//!
//! ```bash
//! formval validate --form-id citizen-registration --data submission.json
//! formval index --schema citizen-registration.json
//! ```

pub mod index;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read and parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
