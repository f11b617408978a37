//! Form model
//!
//! Fields are either a single element (text input, text area, date input,
//! selection list, lone checkbox/radio) or a group of same-named
//! checkbox/radio elements. The [`FormModel`] trait is the seam between the
//! engine and whatever owns the real form; [`Form`] is an in-memory
//! implementation.

mod element;
mod model;

pub use element::{Element, ElementState, Field, FieldGroup, InputKind, SelectOption, StyleClass};
pub use model::{Enclosing, FieldLayout, Form, FormModel, Visibility};
