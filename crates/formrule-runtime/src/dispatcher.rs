//! Action dispatch
//!
//! Applies each action entry to its target fields, with the condition result
//! as the on/off switch. Entries are applied in order; a missing target
//! field stops dispatch, leaving earlier effects in place.

use crate::error::{Result, RuntimeError};
use formrule_core::form::{Element, Field, InputKind, StyleClass};
use formrule_core::{ActionEntry, ActionKind, FormModel};

/// Applies action entries to a form
pub struct ActionDispatcher;

impl ActionDispatcher {
    /// Apply every entry with the same activation flag
    pub fn apply<F: FormModel + ?Sized>(
        form: &mut F,
        actions: &[ActionEntry],
        active: bool,
    ) -> Result<()> {
        for entry in actions {
            Self::apply_entry(form, entry, active)?;
        }
        Ok(())
    }

    /// Apply one entry to all of its target fields
    pub fn apply_entry<F: FormModel + ?Sized>(
        form: &mut F,
        entry: &ActionEntry,
        active: bool,
    ) -> Result<()> {
        tracing::info!(
            "Applying '{}' (active={}) to {} field(s)",
            entry.kind,
            active,
            entry.fields.len()
        );

        for target in &entry.fields {
            let name = target.as_str();
            let field = form.field_mut(name).ok_or_else(|| {
                tracing::warn!("Action '{}' targets unknown field '{}'", entry.kind, name);
                RuntimeError::FieldNotFound(name.to_string())
            })?;

            match entry.kind {
                ActionKind::ReadOnly => Self::read_only(field, active),
                ActionKind::Disable => Self::disable(field, active),
                ActionKind::Hide => {
                    Self::disable(field, active);
                    form.set_hidden(name, active)?;
                }
                ActionKind::Highlight => Self::highlight(field, active),
            }
        }
        Ok(())
    }

    fn read_only(field: &mut Field, active: bool) {
        match field {
            Field::Single(element) if element.kind == InputKind::SelectOne => {
                Self::lock_choice(element, active);
            }
            Field::Single(element) => Self::lock_text(element, active),
            Field::Group(group) if group.is_choice_group() => {
                group
                    .elements
                    .iter_mut()
                    .for_each(|element| Self::lock_choice(element, active));
            }
            Field::Group(group) => {
                group
                    .elements
                    .iter_mut()
                    .for_each(|element| Self::lock_text(element, active));
            }
        }
    }

    /// Read-only for text-like elements; date fields lose their date picker
    /// instead of being restyled
    fn lock_text(element: &mut Element, active: bool) {
        element.state.read_only = active;
        if element.is_date() {
            if active {
                element.state.date_picker_attached = false;
            }
        } else {
            element.state.style = if active {
                StyleClass::Default
            } else {
                StyleClass::Unstyled
            };
        }
    }

    /// Read-only for choices, which also need `disabled` to stop selection
    fn lock_choice(element: &mut Element, active: bool) {
        element.state.disabled = active;
        element.state.read_only = active;
        element.state.style = if active {
            StyleClass::Default
        } else {
            StyleClass::Unstyled
        };
    }

    fn disable(field: &mut Field, active: bool) {
        for element in field.elements_mut() {
            element.state.disabled = active;
            element.state.style = match (element.is_date(), active) {
                (_, true) => StyleClass::Greyed,
                (true, false) => StyleClass::Unstyled,
                (false, false) => StyleClass::Default,
            };
        }
    }

    fn highlight(field: &mut Field, active: bool) {
        for element in field.elements_mut() {
            element.state.highlighted = active;
        }
    }
}
