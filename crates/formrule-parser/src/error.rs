//! Parser error types

use formrule_core::CoreError;
use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Unknown comparator or combinator
    #[error("Invalid operator at '{field}': {operator}")]
    InvalidOperator { field: String, operator: String },

    /// Unknown action type
    #[error("Unknown action at '{field}': {action}")]
    UnknownAction { field: String, action: String },

    /// Condition node whose type is neither `single` nor `multiple`
    #[error("Unknown condition type at '{field}': {node_type}")]
    UnknownNodeType { field: String, node_type: String },
}

impl ParseError {
    /// Attach the document path at which a core tag error occurred
    pub(crate) fn from_core(field: &str, error: CoreError) -> Self {
        match error {
            CoreError::UnknownComparator(operator) | CoreError::UnknownCombinator(operator) => {
                ParseError::InvalidOperator {
                    field: field.to_string(),
                    operator,
                }
            }
            CoreError::UnknownAction(action) => ParseError::UnknownAction {
                field: field.to_string(),
                action,
            },
            other => ParseError::InvalidValue {
                field: field.to_string(),
                message: other.to_string(),
            },
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
