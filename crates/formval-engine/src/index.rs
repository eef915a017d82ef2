//! # Schema Index
//!
//! Walks the component tree once and builds the key lookups the rest of the
//! pipeline uses. The walk is level-order over the children slices, so any
//! nesting depth is covered.
//!
//! ## Key collisions
//!
//! Keys are expected to be unique, but collisions must not crash and must
//! resolve deterministically:
//!
//! - day and file lookups: the outer level is indexed first and inner levels
//!   overwrite it;
//! - the component type lookup used for reconciliation keeps the outermost
//!   occurrence.
//!
//! File components declared at the top level of the schema are also kept in
//! `root_file_keys`. Only those can be known to be absent from the data.

use std::collections::{BTreeMap, BTreeSet};

use formval_core::{Component, FormSchema};
use serde::Serialize;

/// Message used when a file component declares no custom message.
pub const DEFAULT_FILE_MESSAGE: &str = "Invalid file value";

/// Key lookups derived from a [`FormSchema`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaIndex {
    /// Day components: key -> `dayFirst`.
    pub day_components: BTreeMap<String, bool>,
    /// File components with a `validate` block: key -> message.
    pub file_messages: BTreeMap<String, String>,
    /// Required file components: key -> message.
    pub required_file_keys: BTreeMap<String, String>,
    /// Every component: key -> type tag.
    pub component_types: BTreeMap<String, String>,
    /// Keys of file components declared at the top level.
    pub root_file_keys: BTreeSet<String>,
}

impl SchemaIndex {
    /// Index every component of the schema at every depth.
    pub fn build(schema: &FormSchema) -> Self {
        let mut index = Self::default();
        let mut level: Vec<&Component> = schema.components.iter().collect();
        index.root_file_keys = level
            .iter()
            .filter(|c| !c.key.is_empty() && c.file_type().is_some())
            .map(|c| c.key.clone())
            .collect();
        while !level.is_empty() {
            let mut next = Vec::new();
            for component in level {
                index.record(component);
                next.extend(component.components.iter());
            }
            level = next;
        }
        index
    }

    fn record(&mut self, component: &Component) {
        let key = component.key.as_str();
        if key.is_empty() {
            return;
        }

        self.component_types
            .entry(key.to_string())
            .or_insert_with(|| component.component_type.clone());

        if component.is_day() {
            self.day_components
                .insert(key.to_string(), component.day_first());
        }

        if component.file_type().is_some() {
            if let Some(rule) = &component.validate {
                let message = rule.message().unwrap_or(DEFAULT_FILE_MESSAGE).to_string();
                if rule.required {
                    self.required_file_keys
                        .insert(key.to_string(), message.clone());
                } else {
                    self.required_file_keys.remove(key);
                }
                self.file_messages.insert(key.to_string(), message);
            }
        }
    }

    /// Type tag of the component with this key.
    pub fn type_of(&self, key: &str) -> Option<&str> {
        self.component_types.get(key).map(String::as_str)
    }

    /// Message for a file key, if the key is a validated file component.
    pub fn file_message(&self, key: &str) -> Option<&str> {
        self.file_messages.get(key).map(String::as_str)
    }

    /// Message for a required file key.
    pub fn required_file_message(&self, key: &str) -> Option<&str> {
        self.required_file_keys.get(key).map(String::as_str)
    }

    /// Required file keys declared at the top level, with their messages.
    pub fn required_root_files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.root_file_keys
            .iter()
            .filter_map(|key| Some((key.as_str(), self.required_file_message(key)?)))
    }
}
