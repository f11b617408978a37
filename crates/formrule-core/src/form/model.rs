//! Form model seam and the in-memory form

use super::element::{Element, Field, FieldGroup};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Access to the fields of a form
///
/// Conditions read fields through this trait and actions mutate them. The
/// form itself (and whatever renders it) is owned by the host.
pub trait FormModel {
    /// Look up a field by form name
    fn field(&self, name: &str) -> Option<&Field>;

    /// Look up a field by form name for mutation
    fn field_mut(&mut self, name: &str) -> Option<&mut Field>;

    /// Show or hide the label, container and enclosing layout of a field
    fn set_hidden(&mut self, name: &str, hidden: bool) -> Result<()>;
}

/// Layout cell that encloses a field's container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enclosing {
    /// Not placed in a table
    #[default]
    None,
    /// Label and field share a row of at most two cells; the whole row
    /// (and the label's table) is toggled
    Row,
    /// Field sits in a multi-column row; only its cells are toggled
    Cell,
}

/// Which layout parts exist around a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLayout {
    pub has_label: bool,
    pub has_container: bool,
    pub enclosing: Enclosing,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            has_label: true,
            has_container: true,
            enclosing: Enclosing::None,
        }
    }
}

/// Visibility of the layout parts around a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub label_hidden: bool,
    pub container_hidden: bool,
    pub enclosing_hidden: bool,
}

impl Visibility {
    /// True if any layout part is hidden
    pub fn is_hidden(&self) -> bool {
        self.label_hidden || self.container_hidden || self.enclosing_hidden
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct FieldSlot {
    field: Field,
    #[serde(default)]
    layout: FieldLayout,
    #[serde(default)]
    visibility: Visibility,
}

/// In-memory form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(rename = "fields")]
    slots: Vec<FieldSlot>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a form from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidValue(e.to_string()))
    }

    /// Add a field with the default layout (label and container, no table)
    pub fn with_field(self, field: Field) -> Self {
        self.with_field_in(field, FieldLayout::default())
    }

    /// Add a field with an explicit layout
    pub fn with_field_in(mut self, field: Field, layout: FieldLayout) -> Self {
        self.insert(field, layout);
        self
    }

    /// Add a single-element field
    pub fn with_element(self, element: Element) -> Self {
        self.with_field(Field::Single(element))
    }

    /// Add a group of same-named elements
    pub fn with_group(self, name: impl Into<String>, elements: Vec<Element>) -> Self {
        self.with_field(Field::Group(FieldGroup::new(name, elements)))
    }

    /// Insert a field, replacing any field with the same name
    pub fn insert(&mut self, field: Field, layout: FieldLayout) {
        let slot = FieldSlot {
            field,
            layout,
            visibility: Visibility::default(),
        };
        match self.position(slot.field.name()) {
            Some(index) => {
                log::debug!("Replacing field '{}'", slot.field.name());
                self.slots[index] = slot;
            }
            None => self.slots.push(slot),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.field.name())
    }

    pub fn layout(&self, name: &str) -> Option<FieldLayout> {
        self.slot(name).map(|slot| slot.layout)
    }

    pub fn visibility(&self, name: &str) -> Option<Visibility> {
        self.slot(name).map(|slot| slot.visibility)
    }

    /// Set the value of a single-element field
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let element = self
            .field_mut(name)
            .and_then(Field::as_single_mut)
            .ok_or_else(|| CoreError::FieldNotFound(name.to_string()))?;
        element.value = value.into();
        Ok(())
    }

    /// Check or uncheck elements of a field by id (single or grouped)
    pub fn set_checked(&mut self, name: &str, id: &str, checked: bool) -> Result<()> {
        let field = self
            .field_mut(name)
            .ok_or_else(|| CoreError::FieldNotFound(name.to_string()))?;
        let element = field
            .elements_mut()
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::InvalidValue(format!("no element '{}' in '{}'", id, name)))?;
        element.checked = checked;
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.field.name() == name)
    }

    fn slot(&self, name: &str) -> Option<&FieldSlot> {
        self.slots.iter().find(|slot| slot.field.name() == name)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut FieldSlot> {
        self.slots.iter_mut().find(|slot| slot.field.name() == name)
    }
}

impl FormModel for Form {
    fn field(&self, name: &str) -> Option<&Field> {
        self.slot(name).map(|slot| &slot.field)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.slot_mut(name).map(|slot| &mut slot.field)
    }

    fn set_hidden(&mut self, name: &str, hidden: bool) -> Result<()> {
        let slot = self
            .slot_mut(name)
            .ok_or_else(|| CoreError::FieldNotFound(name.to_string()))?;
        let layout = slot.layout;
        let visibility = &mut slot.visibility;

        if layout.has_label {
            visibility.label_hidden = hidden;
        }
        // The enclosing row or cell is only reachable through the container
        if layout.has_container {
            visibility.container_hidden = hidden;
            if layout.enclosing != Enclosing::None {
                visibility.enclosing_hidden = hidden;
            }
        }

        log::debug!("Field '{}' visibility: {:?}", name, visibility);
        Ok(())
    }
}
