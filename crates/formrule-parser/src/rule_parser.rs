//! Rule document parser
//!
//! A rule document holds either one rule at the top level
//!
//! ```yaml
//! id: hide_followup
//! trigger: fld_answer
//! condition: { type: single, data: { field: fld_answer, type: "==", values: ["No"] } }
//! actions:
//!   - type: hide
//!     fields: [fld_followup]
//! ```
//!
//! or a `rules:` list of such entries.

use crate::action_parser::ActionParser;
use crate::condition_parser::ConditionParser;
use crate::error::{ParseError, Result};
use crate::yaml_parser::YamlParser;
use formrule_core::{ConditionalRule, FieldRef};
use serde_yaml::Value as YamlValue;

/// Rule parser
pub struct RuleParser;

impl RuleParser {
    /// Parse all rules of a document
    pub fn parse(text: &str) -> Result<Vec<ConditionalRule>> {
        let yaml = YamlParser::parse(text)?;
        Self::parse_from_yaml(&yaml)
    }

    /// Parse all rules of a YAML value
    pub fn parse_from_yaml(yaml: &YamlValue) -> Result<Vec<ConditionalRule>> {
        if let Some(rules) = yaml.get("rules") {
            let rules = rules.as_sequence().ok_or_else(|| ParseError::InvalidValue {
                field: "rules".to_string(),
                message: format!("expected a list of rules, got {}", YamlParser::kind_of(rules)),
            })?;
            rules
                .iter()
                .enumerate()
                .map(|(i, rule)| Self::parse_rule(rule, &format!("rules[{}]", i)))
                .collect()
        } else if yaml.get("condition").is_some() {
            Ok(vec![Self::parse_rule(yaml, "")?])
        } else {
            Err(ParseError::MissingField {
                field: "rules".to_string(),
            })
        }
    }

    fn parse_rule(yaml: &YamlValue, path: &str) -> Result<ConditionalRule> {
        let condition_path = YamlParser::join(path, "condition");
        let condition = yaml.get("condition").ok_or_else(|| ParseError::MissingField {
            field: condition_path.clone(),
        })?;
        let condition = ConditionParser::parse_from_yaml(condition).map_err(|e| {
            Self::reroot(e, &condition_path)
        })?;

        let actions_path = YamlParser::join(path, "actions");
        let actions = match yaml.get("actions") {
            Some(actions) => ActionParser::parse_from_yaml(actions, &actions_path)?,
            None => Vec::new(),
        };

        let trigger_entry = ["trigger", "triggers"]
            .into_iter()
            .find_map(|key| yaml.get(key).map(|value| (key, value)));
        let triggers = match trigger_entry {
            Some((key, triggers)) => YamlParser::scalar_list(triggers, &YamlParser::join(path, key))?
                .into_iter()
                .map(FieldRef::new)
                .collect(),
            None => Vec::new(),
        };

        let id = YamlParser::get_optional_string(yaml, "id");
        if actions.is_empty() {
            tracing::warn!(
                "Rule {} has no actions; it will be evaluated but has no effect",
                id.as_deref().unwrap_or(path)
            );
        }

        Ok(ConditionalRule {
            id,
            triggers,
            condition,
            actions,
        })
    }

    /// Condition errors carry paths rooted at `condition`; move them under
    /// the rule's own path
    fn reroot(error: ParseError, condition_path: &str) -> ParseError {
        let fix = |field: String| match field.strip_prefix("condition") {
            Some(rest) => format!("{}{}", condition_path, rest),
            None => field,
        };
        match error {
            ParseError::MissingField { field } => ParseError::MissingField { field: fix(field) },
            ParseError::InvalidValue { field, message } => ParseError::InvalidValue {
                field: fix(field),
                message,
            },
            ParseError::InvalidOperator { field, operator } => ParseError::InvalidOperator {
                field: fix(field),
                operator,
            },
            ParseError::UnknownNodeType { field, node_type } => ParseError::UnknownNodeType {
                field: fix(field),
                node_type,
            },
            other => other,
        }
    }
}
