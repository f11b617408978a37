//! Action list parser
//!
//! ```yaml
//! - type: read only
//!   fields: [fld_a]
//! - type: hide
//!   fields: [fld_b, fld_c]
//! ```

use crate::error::{ParseError, Result};
use crate::yaml_parser::YamlParser;
use formrule_core::{ActionEntry, ActionKind, FieldRef};
use serde_yaml::Value as YamlValue;

/// Action parser
pub struct ActionParser;

impl ActionParser {
    /// Parse an action list from a YAML or JSON string
    pub fn parse(text: &str) -> Result<Vec<ActionEntry>> {
        let yaml = YamlParser::parse(text)?;
        Self::parse_from_yaml(&yaml, "actions")
    }

    /// Parse an action list from a YAML value; `path` names it in errors
    pub fn parse_from_yaml(yaml: &YamlValue, path: &str) -> Result<Vec<ActionEntry>> {
        let entries = yaml.as_sequence().ok_or_else(|| ParseError::InvalidValue {
            field: path.to_string(),
            message: format!("expected a list of actions, got {}", YamlParser::kind_of(yaml)),
        })?;

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Self::parse_entry(entry, &format!("{}[{}]", path, i)))
            .collect()
    }

    fn parse_entry(entry: &YamlValue, path: &str) -> Result<ActionEntry> {
        let tag = YamlParser::get_string(entry, "type", path)?;
        let kind: ActionKind = tag
            .parse()
            .map_err(|e| ParseError::from_core(&YamlParser::join(path, "type"), e))?;

        let fields_path = YamlParser::join(path, "fields");
        let fields = entry.get("fields").ok_or_else(|| ParseError::MissingField {
            field: fields_path.clone(),
        })?;
        let fields = YamlParser::scalar_list(fields, &fields_path)?;

        if let Some(index) = fields.iter().position(|f| f.is_empty()) {
            return Err(ParseError::InvalidValue {
                field: format!("{}[{}]", fields_path, index),
                message: "field reference is empty".to_string(),
            });
        }

        Ok(ActionEntry {
            kind,
            fields: fields.into_iter().map(FieldRef::new).collect(),
        })
    }
}
