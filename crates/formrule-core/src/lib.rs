//! formrule Core - Core types for the formrule conditional field-behaviour engine
//!
//! This crate provides the fundamental types used across the workspace:
//! - Condition trees (single comparisons, and/or groups)
//! - Action entries (read only, disable, hide, highlight)
//! - Conditional rules tying a condition tree to its actions
//! - The form model and its in-memory implementation
//! - Error types

pub mod action;
pub mod condition;
pub mod error;
pub mod form;
pub mod rule;

// Re-export commonly used types
pub use action::{ActionEntry, ActionKind};
pub use condition::{Combinator, Comparator, ConditionGroup, ConditionNode, FieldRef, SingleCondition};
pub use error::{CoreError, Result};
pub use form::{Element, Field, FieldGroup, Form, FormModel, InputKind};
pub use rule::ConditionalRule;
