//! Runtime error types

use formrule_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Condition or action references a field the form does not have
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Error raised by the form model
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_not_found_message() {
        let err = RuntimeError::FieldNotFound("fld_x".to_string());
        assert_eq!(err.to_string(), "Field not found: fld_x");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: RuntimeError = CoreError::InvalidValue("bad".to_string()).into();
        assert_eq!(err.to_string(), "Invalid value: bad");
    }
}
