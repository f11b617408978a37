//! formrule SDK
//!
//! High-level API for evaluating condition trees against a form and
//! applying read only / disable / hide / highlight actions.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod hook;

// Re-export main types
pub use builder::RuleEngineBuilder;
pub use config::EngineConfig;
pub use engine::{RuleEngine, RuleOutcome};
pub use error::{Result, SdkError};
pub use hook::CalendarHook;

// Re-export commonly used types from dependencies
pub use formrule_core::{
    ActionEntry, ActionKind, Comparator, ConditionNode, ConditionalRule, Form, FormModel,
};
pub use formrule_runtime::{DisplayMode, EvaluationTrace};
