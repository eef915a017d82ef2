//! # Form Schema
//!
//! The component tree returned by the form provider. Only the fields the
//! validation pipeline reads are modeled; unknown fields are ignored so the
//! provider can evolve its schema freely.
//!
//! Every field degrades to a default when absent or `null`. A malformed node
//! is indexed with what it has instead of failing the whole request.

use serde::{Deserialize, Deserializer, Serialize};

/// Component type tag for day (composite date) fields.
pub const DAY_TYPE: &str = "day";

/// Component type tag for date-time picker fields.
pub const DATE_TYPE: &str = "date";

/// File component type family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    File,
    FileLatest,
    FileLegacy,
}

impl FileType {
    /// Every member of the file family.
    pub const ALL: [FileType; 3] = [Self::File, Self::FileLatest, Self::FileLegacy];

    /// The type tag used in schemas.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::FileLatest => "fileLatest",
            Self::FileLegacy => "fileLegacy",
        }
    }

    /// Resolve a schema type tag to a file type.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A form definition: an ordered list of top-level components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<Component>,
}

/// One node of the component tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_first: Option<bool>,
    /// Nested components (panels, grids, containers).
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate: Option<ValidateRule>,
}

/// The `validate` block of a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

impl Component {
    /// Create a leaf component with the given key and type tag.
    pub fn new(key: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            component_type: component_type.into(),
            ..Self::default()
        }
    }

    pub fn with_day_first(mut self, day_first: bool) -> Self {
        self.day_first = Some(day_first);
        self
    }

    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.components = children;
        self
    }

    pub fn with_validate(mut self, required: bool, custom_message: impl Into<String>) -> Self {
        self.validate = Some(ValidateRule {
            required,
            custom_message: Some(custom_message.into()),
        });
        self
    }

    /// Whether this is a day (composite date) component.
    pub fn is_day(&self) -> bool {
        self.component_type == DAY_TYPE
    }

    /// The file type of this component, if it belongs to the file family.
    pub fn file_type(&self) -> Option<FileType> {
        FileType::from_tag(&self.component_type)
    }

    /// Day ordering flag; absent means month first.
    pub fn day_first(&self) -> bool {
        self.day_first.unwrap_or(false)
    }
}

impl ValidateRule {
    /// The configured message, ignoring blank values.
    pub fn message(&self) -> Option<&str> {
        self.custom_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_family_tags_resolve() {
        assert_eq!(FileType::from_tag("file"), Some(FileType::File));
        assert_eq!(FileType::from_tag("fileLatest"), Some(FileType::FileLatest));
        assert_eq!(FileType::from_tag("fileLegacy"), Some(FileType::FileLegacy));
        assert_eq!(FileType::from_tag("File"), None);
        assert_eq!(FileType::from_tag("textfield"), None);
    }

    #[test]
    fn deserializes_nested_schema_ignoring_unknown_fields() {
        let schema: FormSchema = serde_json::from_value(serde_json::json!({
            "title": "Registration",
            "components": [
                {"key": "dob", "type": "day", "dayFirst": true, "label": "Date of birth"},
                {
                    "key": "grid",
                    "type": "editgrid",
                    "components": [
                        {
                            "key": "scan",
                            "type": "fileLatest",
                            "filePattern": "application/pdf",
                            "validate": {"required": true, "customMessage": "Upload a scan"}
                        }
                    ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(schema.components.len(), 2);
        assert!(schema.components[0].is_day());
        assert!(schema.components[0].day_first());
        let scan = &schema.components[1].components[0];
        assert_eq!(scan.file_type(), Some(FileType::FileLatest));
        let rule = scan.validate.as_ref().unwrap();
        assert!(rule.required);
        assert_eq!(rule.message(), Some("Upload a scan"));
    }

    #[test]
    fn missing_and_null_fields_degrade_to_defaults() {
        let schema: FormSchema = serde_json::from_value(serde_json::json!({
            "components": [
                {"type": "day", "dayFirst": null, "components": null},
                {"key": null, "type": null, "validate": {"required": null}}
            ]
        }))
        .unwrap();

        let day = &schema.components[0];
        assert_eq!(day.key, "");
        assert!(!day.day_first());
        assert!(day.components.is_empty());

        let untyped = &schema.components[1];
        assert_eq!(untyped.component_type, "");
        let rule = untyped.validate.as_ref().unwrap();
        assert!(!rule.required);
        assert_eq!(rule.message(), None);
    }

    #[test]
    fn null_components_list_is_empty_schema() {
        let schema: FormSchema = serde_json::from_str(r#"{"components": null}"#).unwrap();
        assert!(schema.components.is_empty());
    }

    #[test]
    fn blank_custom_message_is_ignored() {
        let rule = ValidateRule {
            required: true,
            custom_message: Some("   ".into()),
        };
        assert_eq!(rule.message(), None);
    }
}
