//! Condition trees
//!
//! A condition tree is either a single comparison of one field against a
//! list of acceptable values, or a group of child conditions combined with
//! `and` / `or`. Groups nest to any depth.
//!
//! ## Supported Comparators
//! - `==` (equal, case-insensitive, numeric fallback)
//! - `!=` (not equal)
//! - `<`, `>`, `<=`, `>=` (numeric only)
//! - `null` (field has no value)
//! - `not null` (field has a value)

mod comparator;
mod types;

pub use comparator::{Combinator, Comparator};
pub use types::{ConditionGroup, ConditionNode, FieldRef, SingleCondition};
