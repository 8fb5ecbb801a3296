// Snapshot of a method panel's values

use std::collections::BTreeMap;

use super::method::ExportMethod;

/// A single field value after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Text(String),
    Flag(bool),
}

/// Field key → value for one method. Rebuilt from the form on every action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRecord {
    pub method: ExportMethod,
    values: BTreeMap<String, ParameterValue>,
}

impl ParameterRecord {
    pub fn new(method: ExportMethod) -> Self {
        Self { method, values: BTreeMap::new() }
    }

    pub fn with_text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), ParameterValue::Text(value.into()));
        self
    }

    pub fn with_flag(mut self, key: &str, value: bool) -> Self {
        self.values.insert(key.to_string(), ParameterValue::Flag(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.values.get(key)
    }

    /// Text value, or `""` for missing and boolean entries.
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(ParameterValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(ParameterValue::Flag(true)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
