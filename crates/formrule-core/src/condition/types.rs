//! Condition tree definitions

use super::comparator::{Combinator, Comparator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a form field by its form name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRef(String);

impl FieldRef {
    pub fn new(name: impl Into<String>) -> Self {
        FieldRef(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        FieldRef(name.to_string())
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        FieldRef(name)
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Comparison of one field against a list of acceptable values
#[derive(Debug, Clone, PartialEq)]
pub struct SingleCondition {
    /// Source field
    pub field: FieldRef,
    /// Comparison to apply
    pub comparator: Comparator,
    /// Acceptable values; the condition holds if any of them matches
    pub values: Vec<String>,
}

/// Children combined with `and` / `or`
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionGroup {
    pub combinator: Combinator,
    pub children: Vec<ConditionNode>,
}

/// A node of a condition tree
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionNode {
    /// Leaf comparison
    Single(SingleCondition),
    /// Nested group
    Multiple(ConditionGroup),
}

impl SingleCondition {
    pub fn new(
        field: impl Into<FieldRef>,
        comparator: Comparator,
        values: Vec<String>,
    ) -> Self {
        Self {
            field: field.into(),
            comparator,
            values,
        }
    }
}

impl ConditionNode {
    /// Create a single condition node
    pub fn single<I, S>(field: impl Into<FieldRef>, comparator: Comparator, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConditionNode::Single(SingleCondition::new(
            field,
            comparator,
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Create an `and` group
    pub fn all(children: Vec<ConditionNode>) -> Self {
        ConditionNode::Multiple(ConditionGroup {
            combinator: Combinator::And,
            children,
        })
    }

    /// Create an `or` group
    pub fn any(children: Vec<ConditionNode>) -> Self {
        ConditionNode::Multiple(ConditionGroup {
            combinator: Combinator::Or,
            children,
        })
    }

    /// Depth of the tree; a single condition has depth 1
    pub fn depth(&self) -> usize {
        match self {
            ConditionNode::Single(_) => 1,
            ConditionNode::Multiple(group) => {
                1 + group.children.iter().map(|c| c.depth()).max().unwrap_or(0)
            }
        }
    }

    /// All single conditions in the tree (depth first)
    pub fn leaves(&self) -> Vec<&SingleCondition> {
        let mut result = Vec::new();
        self.collect_leaves(&mut result);
        result
    }

    fn collect_leaves<'a>(&'a self, result: &mut Vec<&'a SingleCondition>) {
        match self {
            ConditionNode::Single(single) => result.push(single),
            ConditionNode::Multiple(group) => {
                for child in &group.children {
                    child.collect_leaves(result);
                }
            }
        }
    }

    /// Names of every field the tree reads, deduplicated in first-seen order
    pub fn referenced_fields(&self) -> Vec<&FieldRef> {
        let mut fields: Vec<&FieldRef> = Vec::new();
        for leaf in self.leaves() {
            if !fields.contains(&&leaf.field) {
                fields.push(&leaf.field);
            }
        }
        fields
    }
}

impl fmt::Display for ConditionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionNode::Single(single) => {
                if single.comparator.is_presence_check() {
                    write!(f, "{} {}", single.field, single.comparator)
                } else {
                    write!(
                        f,
                        "{} {} [{}]",
                        single.field,
                        single.comparator,
                        single.values.join(", ")
                    )
                }
            }
            ConditionNode::Multiple(group) => {
                write!(f, "(")?;
                for (i, child) in group.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", group.combinator)?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}
