//! Evaluation options

use serde::{Deserialize, Serialize};

/// Placeholder text shown by an unanswered selection list
pub const DEFAULT_SELECT_PLACEHOLDER: &str = "select an option";

/// Which side of a choice is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Selection lists yield the option text, checkboxes/radios their id
    Text,
    /// Selection lists yield the option value, checkboxes/radios their value
    #[default]
    Value,
}

/// Options threaded through extraction and comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    pub display_mode: DisplayMode,

    /// Selection-list text that counts as "no answer" for `null`
    pub select_placeholder: String,

    /// Thousands separator stripped before the second numeric `==` attempt
    pub digit_group_symbol: Option<String>,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::default(),
            select_placeholder: DEFAULT_SELECT_PLACEHOLDER.to_string(),
            digit_group_symbol: Some(",".to_string()),
        }
    }
}

impl EvaluationOptions {
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn with_select_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.select_placeholder = placeholder.into();
        self
    }

    pub fn with_digit_group_symbol(mut self, symbol: Option<String>) -> Self {
        self.digit_group_symbol = symbol;
        self
    }
}
