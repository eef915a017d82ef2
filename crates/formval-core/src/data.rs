//! # Dynamic Form Data
//!
//! Submitted form data mirrors the schema structurally but is untyped. It is
//! modeled as a tagged union so every walker matches on the shape explicitly:
//!
//! - scalars: [`FormValue::Null`], [`FormValue::Bool`], [`FormValue::Number`],
//!   [`FormValue::String`]
//! - nested mapping: [`FormValue::Map`]
//! - repeating groups: [`FormValue::List`]
//!
//! Maps are `BTreeMap`s, so every walk over data visits keys in a stable,
//! lexicographic order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from field keys to values.
pub type FormMap = BTreeMap<String, FormValue>;

/// A single submitted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<FormValue>),
    Map(FormMap),
}

impl FormValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&FormMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Render the value for an error detail.
    ///
    /// `Null` renders as `None`, strings verbatim, everything else as
    /// compact JSON.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::String(s) => Some(s.clone()),
            other => serde_json::to_string(other).ok(),
        }
    }
}

impl From<serde_json::Value> for FormValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<FormValue> for serde_json::Value {
    fn from(value: FormValue) -> Self {
        match value {
            FormValue::Null => Self::Null,
            FormValue::Bool(b) => Self::Bool(b),
            FormValue::Number(n) => Self::Number(n),
            FormValue::String(s) => Self::String(s),
            FormValue::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            FormValue::Map(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// A form submission: the `data` envelope the provider expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub data: Option<FormMap>,
}

impl FormData {
    pub fn new(data: FormMap) -> Self {
        Self { data: Some(data) }
    }

    /// Build a submission from a JSON object. Non-object values yield an
    /// empty submission.
    pub fn from_json(value: serde_json::Value) -> Self {
        match FormValue::from(value) {
            FormValue::Map(map) => Self::new(map),
            FormValue::Null => Self { data: None },
            _ => Self::new(FormMap::new()),
        }
    }
}
