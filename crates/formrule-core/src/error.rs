//! Error types for formrule core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown comparator: {0}")]
    UnknownComparator(String),

    #[error("Unknown combinator: {0}")]
    UnknownCombinator(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
