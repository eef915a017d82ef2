//! # Identifier Newtypes
//!
//! Form identifiers travel into provider URLs and trace identifiers travel
//! into response envelopes and headers. Both are newtypes so a trace id can
//! never be passed where a form id is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IdentifierError;

/// Identifier of a form known to the form provider.
///
/// Always non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormId(String);

impl FormId {
    /// Create a validated form identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdentifierError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::EmptyFormId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FormId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FormId> for String {
    fn from(id: FormId) -> Self {
        id.0
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Correlation identifier attached to error envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a fresh trace identifier (32 lowercase hex characters).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Use an inbound header value when it is present and non-blank,
    /// otherwise generate a fresh identifier.
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self(v.to_string()),
            _ => Self::generate(),
        }
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_id_trims_whitespace() {
        let id = FormId::new("  registration-form ").unwrap();
        assert_eq!(id.as_str(), "registration-form");
    }

    #[test]
    fn form_id_rejects_blank() {
        assert_eq!(FormId::new("   "), Err(IdentifierError::EmptyFormId));
        assert_eq!(FormId::new(""), Err(IdentifierError::EmptyFormId));
    }

    #[test]
    fn form_id_deserializes_through_validation() {
        let id: FormId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.to_string(), "abc");
        assert!(serde_json::from_str::<FormId>("\"\"").is_err());
    }

    #[test]
    fn trace_id_prefers_header_value() {
        let id = TraceId::from_header(Some("4bf92f3577b34da6"));
        assert_eq!(id.as_str(), "4bf92f3577b34da6");
    }

    #[test]
    fn trace_id_generated_when_header_blank_or_absent() {
        let blank = TraceId::from_header(Some("  "));
        let absent = TraceId::from_header(None);
        assert_eq!(blank.as_str().len(), 32);
        assert_eq!(absent.as_str().len(), 32);
        assert_ne!(blank, absent);
    }
}
