//! # File Completeness Checker
//!
//! Re-derives file upload errors from the caller's original data. The
//! provider does not report these reliably, so they are computed locally and
//! always merged into the verdict.
//!
//! A file value is valid when it is a list whose every element is a map with
//! non-blank string `id` and `checksum` entries.
//!
//! Reporting policy for a key that is a validated file component:
//!
//! | value                         | optional | required |
//! |-------------------------------|----------|----------|
//! | valid, non-empty list         | -        | -        |
//! | `[]`                          | -        | error    |
//! | `null`                        | -        | error    |
//! | any other shape               | error    | error    |
//! | key absent from the data      | -        | error    |
//!
//! The walk is depth-first in key order and descends into maps found inside
//! lists, the same shape the date transformer visits.
//!
//! Absence is only decided for file components declared at the top level of
//! the schema. A nested file key may legitimately be missing (empty grid) or
//! sit where the walk does not look (container), so it is only checked where
//! the walk meets it.

use std::collections::BTreeSet;

use formval_core::{ErrorDetail, FormMap, FormValue};

use crate::index::SchemaIndex;

/// Collect file errors for `data` in first-encountered order.
///
/// Required top-level file keys that never occur in the walk are reported
/// after it, once each, in key order.
pub fn find_file_errors(data: Option<&FormMap>, index: &SchemaIndex) -> Vec<ErrorDetail> {
    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();
    if let Some(data) = data {
        walk(data, index, &mut seen, &mut errors);
    }

    for (key, message) in index.required_root_files() {
        if !seen.contains(key) {
            errors.push(ErrorDetail::for_field(message, key, None));
        }
    }
    errors
}

fn walk<'a>(
    data: &'a FormMap,
    index: &SchemaIndex,
    seen: &mut BTreeSet<&'a str>,
    errors: &mut Vec<ErrorDetail>,
) {
    for (key, value) in data {
        if let Some(message) = index.file_message(key) {
            seen.insert(key.as_str());
            let required = index.required_file_message(key).is_some();
            if is_reportable(value, required) {
                errors.push(ErrorDetail::for_field(message, key.clone(), value.render()));
            }
        } else if let FormValue::List(items) = value {
            for item in items {
                if let FormValue::Map(nested) = item {
                    walk(nested, index, seen, errors);
                }
            }
        }
    }
}

fn is_reportable(value: &FormValue, required: bool) -> bool {
    match value {
        FormValue::Null => required,
        FormValue::List(items) if items.is_empty() => required,
        other => !is_valid_file_value(other),
    }
}

/// Whether `value` is a non-empty list of `{id, checksum}` references.
pub fn is_valid_file_value(value: &FormValue) -> bool {
    match value {
        FormValue::List(items) => !items.is_empty() && items.iter().all(is_valid_reference),
        _ => false,
    }
}

fn is_valid_reference(item: &FormValue) -> bool {
    let Some(entry) = item.as_map() else {
        return false;
    };
    ["id", "checksum"].iter().all(|field| {
        entry
            .get(*field)
            .and_then(FormValue::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    })
}
