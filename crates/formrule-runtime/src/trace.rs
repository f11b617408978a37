//! Evaluation trace types

use formrule_core::Comparator;
use serde::Serialize;

/// Record of one evaluated single condition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionTrace {
    pub field: String,
    pub comparator: Comparator,
    pub values: Vec<String>,
    /// Extracted field value (empty for grouped fields)
    pub resolved_value: String,
    pub group_len: usize,
    pub result: bool,
}

/// Trace of a whole condition tree evaluation
///
/// Only conditions that were actually evaluated appear; children skipped by
/// short-circuiting are absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EvaluationTrace {
    pub result: bool,
    pub conditions: Vec<ConditionTrace>,
}

impl EvaluationTrace {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
