//! # Data Transformer
//!
//! Produces the payload sent to the provider's validation call: a freshly
//! allocated copy of the submitted data in which day values are rewritten
//! from `year-month-day` to the provider's display order.
//!
//! ## Invariants
//!
//! - The caller's data is never mutated. Every map and list of the result,
//!   including maps inside lists, is a new allocation.
//! - Only string values whose key is a day component are rewritten, and only
//!   when they consist of exactly three non-empty dash-separated segments.
//!   Segments are re-emitted verbatim (no padding or range checks).
//! - Lists are searched for nested maps; non-map list elements and plain map
//!   values are left as they are.

use std::collections::BTreeMap;

use formval_core::{CopyError, FormMap, FormValue};

/// Deepest nesting the copy accepts. Matches the recursion limit of the
/// JSON codec used for the outbound payload.
pub const MAX_COPY_DEPTH: usize = 128;

/// Copy `data` and rewrite day values on the copy.
///
/// Absent data stays absent.
pub fn copy_and_transform(
    data: Option<&FormMap>,
    day_components: &BTreeMap<String, bool>,
) -> Result<Option<FormMap>, CopyError> {
    let Some(data) = data else {
        return Ok(None);
    };
    let mut copy = deep_copy(data)?;
    rewrite_dates(&mut copy, day_components);
    Ok(Some(copy))
}

/// Structural copy of a data map, rebuilt level by level.
pub fn deep_copy(data: &FormMap) -> Result<FormMap, CopyError> {
    copy_map(data, 1)
}

fn copy_map(map: &FormMap, depth: usize) -> Result<FormMap, CopyError> {
    if depth > MAX_COPY_DEPTH {
        return Err(CopyError::DepthExceeded {
            limit: MAX_COPY_DEPTH,
            path: String::new(),
        });
    }
    let mut copy = FormMap::new();
    for (key, value) in map {
        let value = copy_value(value, depth).map_err(|e| e.within(key))?;
        copy.insert(key.clone(), value);
    }
    Ok(copy)
}

fn copy_value(value: &FormValue, depth: usize) -> Result<FormValue, CopyError> {
    Ok(match value {
        FormValue::Null => FormValue::Null,
        FormValue::Bool(b) => FormValue::Bool(*b),
        FormValue::Number(n) => FormValue::Number(n.clone()),
        FormValue::String(s) => FormValue::String(s.clone()),
        FormValue::Map(map) => FormValue::Map(copy_map(map, depth + 1)?),
        FormValue::List(items) => {
            if depth + 1 > MAX_COPY_DEPTH {
                return Err(CopyError::DepthExceeded {
                    limit: MAX_COPY_DEPTH,
                    path: String::new(),
                });
            }
            let mut copy = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                copy.push(copy_value(item, depth + 1).map_err(|e| e.within(&format!("[{i}]")))?);
            }
            FormValue::List(copy)
        }
    })
}

/// Rewrite day values of `data` in place.
pub fn rewrite_dates(data: &mut FormMap, day_components: &BTreeMap<String, bool>) {
    for (key, value) in data.iter_mut() {
        match value {
            FormValue::String(raw) => {
                if let Some(&day_first) = day_components.get(key) {
                    if let Some(rewritten) = rewrite_day_value(raw, day_first) {
                        *raw = rewritten;
                    }
                }
            }
            FormValue::List(items) => {
                for item in items.iter_mut() {
                    if let FormValue::Map(nested) = item {
                        rewrite_dates(nested, day_components);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Rewrite `year-month-day` to `day/month/year` or `month/day/year`.
///
/// Returns `None` when the value is not exactly three non-empty
/// dash-separated segments.
pub fn rewrite_day_value(raw: &str, day_first: bool) -> Option<String> {
    let mut segments = raw.split('-');
    let (year, month, day) = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(y), Some(m), Some(d), None) if !y.is_empty() && !m.is_empty() && !d.is_empty() => {
            (y, m, d)
        }
        _ => return None,
    };
    Some(if day_first {
        format!("{day}/{month}/{year}")
    } else {
        format!("{month}/{day}/{year}")
    })
}
