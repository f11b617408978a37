//! Comparators and combinators used by condition nodes

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison applied by a single condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// Equal (==)
    #[serde(rename = "==")]
    Eq,
    /// Not equal (!=)
    #[serde(rename = "!=")]
    Ne,
    /// Less than (<)
    #[serde(rename = "<")]
    Lt,
    /// Greater than (>)
    #[serde(rename = ">")]
    Gt,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    Le,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    Ge,
    /// Field has no value
    #[serde(rename = "null")]
    Null,
    /// Field has a value
    #[serde(rename = "not null", alias = "not-null", alias = "not_null")]
    NotNull,
}

impl Comparator {
    /// All comparators, in declaration order
    pub const ALL: [Comparator; 8] = [
        Comparator::Eq,
        Comparator::Ne,
        Comparator::Lt,
        Comparator::Gt,
        Comparator::Le,
        Comparator::Ge,
        Comparator::Null,
        Comparator::NotNull,
    ];

    /// Canonical tag as written in condition documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Eq => "==",
            Comparator::Ne => "!=",
            Comparator::Lt => "<",
            Comparator::Gt => ">",
            Comparator::Le => "<=",
            Comparator::Ge => ">=",
            Comparator::Null => "null",
            Comparator::NotNull => "not null",
        }
    }

    /// Returns true for the four ordering comparators
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Comparator::Lt | Comparator::Gt | Comparator::Le | Comparator::Ge
        )
    }

    /// Returns true if the comparator ignores its acceptable values
    pub fn is_presence_check(&self) -> bool {
        matches!(self, Comparator::Null | Comparator::NotNull)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Comparator {
    type Err = CoreError;

    /// Parses a comparator tag.
    ///
    /// Besides the canonical tags this accepts a few spelled-out forms
    /// (`equals`, `not equals`, `greater than`, ...) that rule authors tend
    /// to write by hand.
    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_ascii_lowercase();
        let comparator = match tag.as_str() {
            "==" | "=" | "equals" | "eq" => Comparator::Eq,
            "!=" | "<>" | "not equals" | "ne" => Comparator::Ne,
            "<" | "less than" | "lt" => Comparator::Lt,
            ">" | "greater than" | "gt" => Comparator::Gt,
            "<=" | "le" => Comparator::Le,
            ">=" | "ge" => Comparator::Ge,
            "null" | "empty" => Comparator::Null,
            "not null" | "not-null" | "not_null" | "not empty" => Comparator::NotNull,
            _ => return Err(CoreError::UnknownComparator(s.to_string())),
        };
        Ok(comparator)
    }
}

/// Boolean combinator of a multiple condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Every child must hold
    And,
    /// At least one child must hold
    Or,
}

impl Combinator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" | "all" | "&&" => Ok(Combinator::And),
            "or" | "any" | "||" => Ok(Combinator::Or),
            _ => Err(CoreError::UnknownCombinator(s.to_string())),
        }
    }
}
