//! Form elements and fields

use serde::{Deserialize, Serialize};
use std::slice;

/// Kind of input control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    TextArea,
    /// Text input backed by a date picker
    Date,
    /// Single-selection list
    SelectOne,
    Checkbox,
    Radio,
}

impl InputKind {
    /// Checkbox or radio button
    pub fn is_choice(&self) -> bool {
        matches!(self, InputKind::Checkbox | InputKind::Radio)
    }
}

/// Presentation class of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleClass {
    #[default]
    Unstyled,
    Default,
    Greyed,
}

/// Mutable interaction state of an element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementState {
    pub read_only: bool,
    pub disabled: bool,
    pub style: StyleClass,
    /// Date fields only: whether the date picker is still attached
    pub date_picker_attached: bool,
    /// Background highlight flag
    pub highlighted: bool,
}

/// Option of a selection list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display text
    pub text: String,
    /// Underlying value
    pub value: String,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// One input element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub kind: InputKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    /// Index into `options`
    #[serde(default)]
    pub selected: Option<usize>,
    #[serde(default)]
    pub state: ElementState,
}

impl Element {
    fn with_kind(name: impl Into<String>, kind: InputKind) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            kind,
            value: String::new(),
            checked: false,
            options: Vec::new(),
            selected: None,
            state: ElementState::default(),
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = Self::with_kind(name, InputKind::Text);
        element.value = value.into();
        element
    }

    pub fn text_area(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = Self::with_kind(name, InputKind::TextArea);
        element.value = value.into();
        element
    }

    pub fn date(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = Self::with_kind(name, InputKind::Date);
        element.value = value.into();
        element.state.date_picker_attached = true;
        element
    }

    /// Selection list built from `(text, value)` pairs
    pub fn select<I, T, V>(name: impl Into<String>, options: I, selected: Option<usize>) -> Self
    where
        I: IntoIterator<Item = (T, V)>,
        T: Into<String>,
        V: Into<String>,
    {
        let mut element = Self::with_kind(name, InputKind::SelectOne);
        element.options = options
            .into_iter()
            .map(|(text, value)| SelectOption::new(text, value))
            .collect();
        element.selected = selected;
        element
    }

    pub fn checkbox(
        name: impl Into<String>,
        id: impl Into<String>,
        value: impl Into<String>,
        checked: bool,
    ) -> Self {
        let mut element = Self::with_kind(name, InputKind::Checkbox);
        element.id = id.into();
        element.value = value.into();
        element.checked = checked;
        element
    }

    pub fn radio(
        name: impl Into<String>,
        id: impl Into<String>,
        value: impl Into<String>,
        checked: bool,
    ) -> Self {
        let mut element = Self::with_kind(name, InputKind::Radio);
        element.id = id.into();
        element.value = value.into();
        element.checked = checked;
        element
    }

    /// Currently selected option of a selection list
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected.and_then(|index| self.options.get(index))
    }

    /// Select the option whose value equals `value`; returns false if none does
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn is_date(&self) -> bool {
        self.kind == InputKind::Date
    }

    /// Presentation class name as rendered on the page
    pub fn class_name(&self) -> &'static str {
        match (self.is_date(), self.state.style) {
            (true, StyleClass::Greyed) => "datefield inpGrey",
            (true, _) => "datefield",
            (false, StyleClass::Unstyled) => "",
            (false, StyleClass::Default) => "inpDefault",
            (false, StyleClass::Greyed) => "inpGrey",
        }
    }
}

/// Same-named elements treated as one logical field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub name: String,
    pub elements: Vec<Element>,
}

impl FieldGroup {
    pub fn new(name: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }

    /// Number of checked elements
    pub fn checked_count(&self) -> usize {
        self.elements.iter().filter(|e| e.checked).count()
    }

    /// Checkbox or radio set (judged by the first element)
    pub fn is_choice_group(&self) -> bool {
        self.elements
            .first()
            .map(|e| e.kind.is_choice())
            .unwrap_or(false)
    }
}

/// A field as seen by conditions and actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Single(Element),
    Group(FieldGroup),
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Field::Single(element) => &element.name,
            Field::Group(group) => &group.name,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Field::Group(_))
    }

    pub fn elements(&self) -> &[Element] {
        match self {
            Field::Single(element) => slice::from_ref(element),
            Field::Group(group) => &group.elements,
        }
    }

    pub fn elements_mut(&mut self) -> &mut [Element] {
        match self {
            Field::Single(element) => slice::from_mut(element),
            Field::Group(group) => &mut group.elements,
        }
    }

    pub fn as_single(&self) -> Option<&Element> {
        match self {
            Field::Single(element) => Some(element),
            Field::Group(_) => None,
        }
    }

    pub fn as_single_mut(&mut self) -> Option<&mut Element> {
        match self {
            Field::Single(element) => Some(element),
            Field::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&FieldGroup> {
        match self {
            Field::Single(_) => None,
            Field::Group(group) => Some(group),
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut FieldGroup> {
        match self {
            Field::Single(_) => None,
            Field::Group(group) => Some(group),
        }
    }
}
