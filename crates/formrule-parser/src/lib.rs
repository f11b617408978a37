//! formrule Parser - YAML/JSON to condition tree parser
//!
//! This crate converts condition, action and rule documents into the typed
//! structures of `formrule-core`. Unknown comparator, combinator, action or
//! node tags are rejected here, so evaluation never meets an unknown tag.

pub mod error;
pub mod action_parser;
pub mod condition_parser;
pub mod rule_parser;
pub mod yaml_parser;

// Re-export main parser types
pub use action_parser::ActionParser;
pub use condition_parser::{ConditionParser, MAX_CONDITION_DEPTH};
pub use error::{ParseError, Result};
pub use rule_parser::RuleParser;
pub use yaml_parser::YamlParser;
