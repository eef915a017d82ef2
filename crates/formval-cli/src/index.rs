//! # Index Subcommand
//!
//! Prints the key lookups the validation pipeline derives from a schema:
//! day components, file components with their messages, required file keys,
//! component types and top-level file keys. Works offline on a schema file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use formval_core::FormSchema;
use formval_engine::SchemaIndex;

/// Arguments for the `formval index` subcommand.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Path to a form schema (`{"components": [...]}`).
    #[arg(long, value_name = "PATH")]
    pub schema: PathBuf,
}

/// Execute the index subcommand.
pub fn run_index(args: &IndexArgs) -> Result<u8> {
    let schema: FormSchema = crate::read_json(&args.schema)?;
    let index = SchemaIndex::build(&schema);
    tracing::info!(
        components = index.component_types.len(),
        "schema indexed"
    );
    println!("{}", render_index(&index)?);
    Ok(0)
}

pub fn render_index(index: &SchemaIndex) -> Result<String> {
    serde_json::to_string_pretty(index).context("failed to serialize schema index")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn renders_every_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(
            &path,
            json!({
                "components": [
                    {"key": "dob", "type": "day", "dayFirst": true},
                    {"key": "panel", "type": "panel", "components": [
                        {"key": "scan", "type": "fileLatest",
                         "validate": {"required": true, "customMessage": "Scan needed"}}
                    ]}
                ]
            })
            .to_string(),
        )
        .unwrap();

        let schema: FormSchema = crate::read_json(&path).unwrap();
        let rendered: Value =
            serde_json::from_str(&render_index(&SchemaIndex::build(&schema)).unwrap()).unwrap();

        assert_eq!(
            rendered,
            json!({
                "day_components": {"dob": true},
                "file_messages": {"scan": "Scan needed"},
                "required_file_keys": {"scan": "Scan needed"},
                "component_types": {"dob": "day", "panel": "panel", "scan": "fileLatest"},
                "root_file_keys": []
            })
        );
    }

    #[test]
    fn missing_schema_file_is_an_error() {
        let args = IndexArgs {
            schema: PathBuf::from("/nonexistent/schema.json"),
        };
        let err = run_index(&args).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }
}
