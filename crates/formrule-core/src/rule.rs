//! Conditional rule: a condition tree plus the actions it drives

use crate::action::ActionEntry;
use crate::condition::{ConditionNode, FieldRef};

/// A condition tree with its actions
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalRule {
    /// Optional identifier, used in logs and traces
    pub id: Option<String>,

    /// Fields whose change should re-run this rule. When empty, every field
    /// the condition reads is a trigger.
    pub triggers: Vec<FieldRef>,

    pub condition: ConditionNode,

    pub actions: Vec<ActionEntry>,
}

impl ConditionalRule {
    pub fn new(condition: ConditionNode, actions: Vec<ActionEntry>) -> Self {
        Self {
            id: None,
            triggers: Vec::new(),
            condition,
            actions,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_trigger(mut self, field: impl Into<FieldRef>) -> Self {
        self.triggers.push(field.into());
        self
    }

    /// Whether a change to `field` should re-run this rule
    pub fn is_triggered_by(&self, field: &str) -> bool {
        if self.triggers.is_empty() {
            self.condition
                .referenced_fields()
                .iter()
                .any(|f| f.as_str() == field)
        } else {
            self.triggers.iter().any(|f| f.as_str() == field)
        }
    }

    /// Identifier for logs; `<anonymous>` when the rule has none
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<anonymous>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use crate::condition::Comparator;

    fn rule() -> ConditionalRule {
        ConditionalRule::new(
            ConditionNode::all(vec![
                ConditionNode::single("fld_a", Comparator::Eq, ["x"]),
                ConditionNode::single("fld_b", Comparator::Null, Vec::<String>::new()),
            ]),
            vec![ActionEntry::new(ActionKind::Hide, ["fld_c"])],
        )
    }

    #[test]
    fn test_implicit_triggers_are_condition_fields() {
        let rule = rule();
        assert!(rule.is_triggered_by("fld_a"));
        assert!(rule.is_triggered_by("fld_b"));
        assert!(!rule.is_triggered_by("fld_c"));
    }

    #[test]
    fn test_explicit_triggers_replace_implicit_ones() {
        let rule = rule().with_trigger("fld_z");
        assert!(rule.is_triggered_by("fld_z"));
        assert!(!rule.is_triggered_by("fld_a"));
    }

    #[test]
    fn test_label() {
        assert_eq!(rule().label(), "<anonymous>");
        assert_eq!(rule().with_id("hide_c").label(), "hide_c");
    }
}
