//! Field value extraction
//!
//! Reduces any field to a `(value, group_len)` pair. Single-element fields
//! resolve to a string; grouped fields report their element count and leave
//! the per-element checked scan to the comparators.

use crate::options::{DisplayMode, EvaluationOptions};
use formrule_core::form::{Element, Field, InputKind};
use serde::Serialize;

/// Resolved value of a field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldValue {
    /// Resolved value; always empty for grouped fields
    pub value: String,
    /// Number of elements of a grouped field, 0 otherwise
    pub group_len: usize,
}

impl FieldValue {
    pub fn is_grouped(&self) -> bool {
        self.group_len > 0
    }
}

/// Extract the comparable value of a field
pub fn extract(field: &Field, options: &EvaluationOptions) -> FieldValue {
    match field {
        Field::Group(group) => FieldValue {
            value: String::new(),
            group_len: group.elements.len(),
        },
        Field::Single(element) => FieldValue {
            value: single_value(element, options),
            group_len: 0,
        },
    }
}

fn single_value(element: &Element, options: &EvaluationOptions) -> String {
    match element.kind {
        InputKind::SelectOne => element
            .selected_option()
            .map(|option| match options.display_mode {
                DisplayMode::Text => option.text.clone(),
                DisplayMode::Value => option.value.clone(),
            })
            .unwrap_or_default(),
        InputKind::Checkbox | InputKind::Radio => {
            if element.checked {
                checked_value(element, options).to_string()
            } else {
                String::new()
            }
        }
        InputKind::Text | InputKind::TextArea | InputKind::Date => element.value.clone(),
    }
}

/// Value a checked checkbox/radio contributes: its id in text mode, its
/// value otherwise
pub fn checked_value<'a>(element: &'a Element, options: &EvaluationOptions) -> &'a str {
    match options.display_mode {
        DisplayMode::Text => &element.id,
        DisplayMode::Value => &element.value,
    }
}

/// Values of the checked elements of a field
pub fn checked_values<'a>(
    field: &'a Field,
    options: &'a EvaluationOptions,
) -> impl Iterator<Item = &'a str> + 'a {
    field
        .elements()
        .iter()
        .filter(|element| element.checked)
        .map(move |element| checked_value(element, options))
}
