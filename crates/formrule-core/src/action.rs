//! Action definitions
//!
//! An action names an effect and the fields it applies to. The effect is
//! switched on or off by the result of the condition tree.

use crate::condition::FieldRef;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Effect applied to target fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Fields become read-only
    #[serde(rename = "read only", alias = "read-only", alias = "readonly")]
    ReadOnly,
    /// Fields become disabled and greyed out
    #[serde(rename = "disable", alias = "disabled")]
    Disable,
    /// Fields and their label/container are hidden
    #[serde(rename = "hide", alias = "hidden")]
    Hide,
    /// Fields are flagged with a background highlight
    #[serde(rename = "highlight")]
    Highlight,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ReadOnly => "read only",
            ActionKind::Disable => "disable",
            ActionKind::Hide => "hide",
            ActionKind::Highlight => "highlight",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_ascii_lowercase();
        match tag.as_str() {
            "read only" | "read-only" | "read_only" | "readonly" => Ok(ActionKind::ReadOnly),
            "disable" | "disabled" => Ok(ActionKind::Disable),
            "hide" | "hidden" => Ok(ActionKind::Hide),
            "highlight" | "highlighted" => Ok(ActionKind::Highlight),
            _ => Err(CoreError::UnknownAction(s.to_string())),
        }
    }
}

/// One action entry: an effect and its target fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub fields: Vec<FieldRef>,
}

impl ActionEntry {
    pub fn new<I, F>(kind: ActionKind, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldRef>,
    {
        Self {
            kind,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_from_str() {
        assert_eq!("read only".parse::<ActionKind>().unwrap(), ActionKind::ReadOnly);
        assert_eq!("Read-Only".parse::<ActionKind>().unwrap(), ActionKind::ReadOnly);
        assert_eq!("hidden".parse::<ActionKind>().unwrap(), ActionKind::Hide);
        assert_eq!("highlight".parse::<ActionKind>().unwrap(), ActionKind::Highlight);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let err = "blink".parse::<ActionKind>().unwrap_err();
        assert_eq!(err, CoreError::UnknownAction("blink".to_string()));
    }

    #[test]
    fn test_action_entry_serde() {
        let entry: ActionEntry =
            serde_json::from_str(r#"{"type": "disable", "fields": ["fld_1", "fld_2"]}"#).unwrap();
        assert_eq!(entry, ActionEntry::new(ActionKind::Disable, ["fld_1", "fld_2"]));

        let json = serde_json::to_string(&ActionEntry::new(ActionKind::ReadOnly, ["a"])).unwrap();
        assert!(json.contains(r#""type":"read only""#));
    }
}
