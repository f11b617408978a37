//! formrule Runtime - Condition evaluation and action dispatch
//!
//! The runtime is made of three parts:
//! - `extractor`: normalises any field into a `(value, group_len)` pair
//! - `evaluator`: walks a condition tree depth first, short-circuiting
//!   `and`/`or` groups, and runs the comparators
//! - `dispatcher`: applies read only / disable / hide / highlight actions

pub mod comparators;
pub mod dispatcher;
pub mod error;
pub mod evaluator;
pub mod extractor;
pub mod numeric;
pub mod options;
pub mod trace;

// Re-export main types
pub use dispatcher::ActionDispatcher;
pub use error::{Result, RuntimeError};
pub use evaluator::ConditionEvaluator;
pub use extractor::{extract, FieldValue};
pub use options::{DisplayMode, EvaluationOptions, DEFAULT_SELECT_PLACEHOLDER};
pub use trace::{ConditionTrace, EvaluationTrace};
