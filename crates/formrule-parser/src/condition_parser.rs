//! Condition tree parser
//!
//! Parses condition documents of the form
//!
//! ```yaml
//! type: multiple
//! condition: or
//! data:
//!   - type: single
//!     data:
//!       field: fld_1
//!       type: "=="
//!       values: ["hi"]
//!   - type: single
//!     data:
//!       field: fld_2
//!       type: ">"
//!       values: [5]
//! ```

use crate::error::{ParseError, Result};
use crate::yaml_parser::YamlParser;
use formrule_core::{
    Combinator, Comparator, ConditionGroup, ConditionNode, FieldRef, SingleCondition,
};
use serde_yaml::Value as YamlValue;

/// Deepest nesting accepted for a condition tree
pub const MAX_CONDITION_DEPTH: usize = 32;

/// Condition parser
pub struct ConditionParser;

impl ConditionParser {
    /// Parse a condition tree from a YAML or JSON string
    pub fn parse(text: &str) -> Result<ConditionNode> {
        let yaml = YamlParser::parse(text)?;
        Self::parse_from_yaml(&yaml)
    }

    /// Parse a condition tree from a YAML value
    pub fn parse_from_yaml(yaml: &YamlValue) -> Result<ConditionNode> {
        Self::parse_node(yaml, "condition", 1)
    }

    fn parse_node(yaml: &YamlValue, path: &str, depth: usize) -> Result<ConditionNode> {
        if depth > MAX_CONDITION_DEPTH {
            return Err(ParseError::InvalidValue {
                field: path.to_string(),
                message: format!("condition nested deeper than {}", MAX_CONDITION_DEPTH),
            });
        }
        if !yaml.is_mapping() {
            return Err(ParseError::InvalidValue {
                field: path.to_string(),
                message: format!("expected a condition map, got {}", YamlParser::kind_of(yaml)),
            });
        }

        let node_type = YamlParser::get_string(yaml, "type", path)?;
        match node_type.trim().to_ascii_lowercase().as_str() {
            "single" => {
                let data_path = YamlParser::join(path, "data");
                let data = yaml.get("data").ok_or_else(|| ParseError::MissingField {
                    field: data_path.clone(),
                })?;
                Self::parse_single(data, &data_path).map(ConditionNode::Single)
            }
            "multiple" => Self::parse_multiple(yaml, path, depth).map(ConditionNode::Multiple),
            _ => Err(ParseError::UnknownNodeType {
                field: YamlParser::join(path, "type"),
                node_type,
            }),
        }
    }

    /// Parse the `data` block of a single condition
    fn parse_single(data: &YamlValue, path: &str) -> Result<SingleCondition> {
        let field_path = YamlParser::join(path, "field");
        let field = data.get("field").ok_or_else(|| ParseError::MissingField {
            field: field_path.clone(),
        })?;
        let field = YamlParser::scalar_to_string(field, &field_path)?;
        if field.is_empty() {
            return Err(ParseError::InvalidValue {
                field: field_path,
                message: "field reference is empty".to_string(),
            });
        }

        let type_path = YamlParser::join(path, "type");
        // A bare `type: null` reads as YAML null rather than the string tag
        let comparator_tag = match data.get("type") {
            Some(YamlValue::Null) => "null".to_string(),
            _ => YamlParser::get_string(data, "type", path)?,
        };
        let comparator: Comparator = comparator_tag
            .parse()
            .map_err(|e| ParseError::from_core(&type_path, e))?;

        let values_path = YamlParser::join(path, "values");
        let values = match data.get("values") {
            Some(values) => YamlParser::scalar_list(values, &values_path)?,
            None if comparator.is_presence_check() => Vec::new(),
            None => {
                return Err(ParseError::MissingField { field: values_path });
            }
        };

        tracing::trace!("Parsed single condition at {}: {} {}", path, field, comparator);
        Ok(SingleCondition {
            field: FieldRef::new(field),
            comparator,
            values,
        })
    }

    /// Parse a multiple condition (`condition` combinator + `data` children)
    fn parse_multiple(yaml: &YamlValue, path: &str, depth: usize) -> Result<ConditionGroup> {
        let combinator_tag = YamlParser::get_string(yaml, "condition", path)?;
        let combinator: Combinator = combinator_tag
            .parse()
            .map_err(|e| ParseError::from_core(&YamlParser::join(path, "condition"), e))?;

        let children = YamlParser::get_array(yaml, "data", path)?
            .iter()
            .enumerate()
            .map(|(i, child)| {
                let child_path = format!("{}[{}]", YamlParser::join(path, "data"), i);
                Self::parse_node(child, &child_path, depth + 1)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ConditionGroup {
            combinator,
            children,
        })
    }
}
