//! YAML Parser
//!
//! Utilities for reading condition and action documents. JSON is a subset
//! of YAML, so the same helpers cover both formats.

use crate::error::{ParseError, Result};
use serde_yaml::Value as YamlValue;

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML (or JSON) string into a YAML value
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Get a required string field
    pub fn get_string(obj: &YamlValue, field: &str, path: &str) -> Result<String> {
        let value = obj.get(field).ok_or_else(|| ParseError::MissingField {
            field: Self::join(path, field),
        })?;
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ParseError::InvalidValue {
                field: Self::join(path, field),
                message: format!("expected a string, got {}", Self::kind_of(value)),
            })
    }

    /// Get an optional string field
    pub fn get_optional_string(obj: &YamlValue, field: &str) -> Option<String> {
        obj.get(field).and_then(|v| v.as_str()).map(|s| s.to_string())
    }

    /// Get a required sequence field
    pub fn get_array<'a>(obj: &'a YamlValue, field: &str, path: &str) -> Result<&'a Vec<YamlValue>> {
        let value = obj.get(field).ok_or_else(|| ParseError::MissingField {
            field: Self::join(path, field),
        })?;
        value.as_sequence().ok_or_else(|| ParseError::InvalidValue {
            field: Self::join(path, field),
            message: format!("expected a list, got {}", Self::kind_of(value)),
        })
    }

    /// Render a scalar as a string.
    ///
    /// Numbers keep their written form (`5`, `2.5`), booleans become
    /// `true`/`false` and null becomes the empty string. Lists and maps are
    /// rejected.
    pub fn scalar_to_string(value: &YamlValue, path: &str) -> Result<String> {
        match value {
            YamlValue::String(s) => Ok(s.clone()),
            YamlValue::Number(n) => Ok(n.to_string()),
            YamlValue::Bool(b) => Ok(b.to_string()),
            YamlValue::Null => Ok(String::new()),
            other => Err(ParseError::InvalidValue {
                field: path.to_string(),
                message: format!("expected a scalar, got {}", Self::kind_of(other)),
            }),
        }
    }

    /// Read a scalar or a list of scalars as a list of strings
    pub fn scalar_list(value: &YamlValue, path: &str) -> Result<Vec<String>> {
        match value {
            YamlValue::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| Self::scalar_to_string(item, &format!("{}[{}]", path, i)))
                .collect(),
            scalar => Ok(vec![Self::scalar_to_string(scalar, path)?]),
        }
    }

    /// Human readable name of a YAML value's kind
    pub fn kind_of(value: &YamlValue) -> &'static str {
        match value {
            YamlValue::Null => "null",
            YamlValue::Bool(_) => "a boolean",
            YamlValue::Number(_) => "a number",
            YamlValue::String(_) => "a string",
            YamlValue::Sequence(_) => "a list",
            YamlValue::Mapping(_) => "a map",
            YamlValue::Tagged(_) => "a tagged value",
        }
    }

    /// Join a document path and a key
    pub fn join(path: &str, field: &str) -> String {
        if path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", path, field)
        }
    }
}
