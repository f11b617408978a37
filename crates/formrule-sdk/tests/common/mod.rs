//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use formrule_core::form::{Element, Enclosing, Field, FieldLayout, Form};
use formrule_core::FormModel;
use formrule_sdk::{DisplayMode, RuleEngine, RuleEngineBuilder};

/// Intake form used across the integration tests
///
/// - `fld_smoker`: Yes/No selection, currently "No"
/// - `fld_packs`: number of packs per day
/// - `fld_quit_date`: date field in a two-cell row
/// - `fld_symptoms`: checkbox group, "Cough" checked
/// - `fld_contact`: radio group, nothing checked
/// - `fld_notes`: free text
pub fn intake_form() -> Form {
    Form::new()
        .with_element(Element::select(
            "fld_smoker",
            [("Select an option", ""), ("Yes", "Y"), ("No", "N")],
            Some(2),
        ))
        .with_element(Element::text("fld_packs", "2"))
        .with_field_in(
            Field::Single(Element::date("fld_quit_date", "")),
            FieldLayout {
                has_label: true,
                has_container: true,
                enclosing: Enclosing::Row,
            },
        )
        .with_group(
            "fld_symptoms",
            vec![
                Element::checkbox("fld_symptoms", "sym_cough", "Cough", true),
                Element::checkbox("fld_symptoms", "sym_fever", "Fever", false),
            ],
        )
        .with_group(
            "fld_contact",
            vec![
                Element::radio("fld_contact", "contact_phone", "Phone", false),
                Element::radio("fld_contact", "contact_mail", "Mail", false),
            ],
        )
        .with_element(Element::text_area("fld_notes", ""))
}

/// Build an engine from inline rule YAML
pub fn engine_with(rules_yaml: &str) -> RuleEngine {
    engine_with_mode(rules_yaml, DisplayMode::Value)
}

/// Build an engine from inline rule YAML with a display mode
pub fn engine_with_mode(rules_yaml: &str, mode: DisplayMode) -> RuleEngine {
    RuleEngineBuilder::new()
        .display_mode(mode)
        .add_rule_content(rules_yaml.trim())
        .build()
        .unwrap_or_else(|e| panic!("Failed to build engine: {}", e))
}

/// Assertion helpers for forms
pub trait FormAssertions {
    fn assert_hidden(&self, name: &str, hidden: bool);
    fn assert_disabled(&self, name: &str, disabled: bool);
    fn assert_read_only(&self, name: &str, read_only: bool);
    fn assert_highlighted(&self, name: &str, highlighted: bool);
}

impl FormAssertions for Form {
    fn assert_hidden(&self, name: &str, hidden: bool) {
        let visibility = self
            .visibility(name)
            .unwrap_or_else(|| panic!("No field named {}", name));
        assert_eq!(
            visibility.container_hidden, hidden,
            "Expected {} hidden={}, got {:?}",
            name, hidden, visibility
        );
    }

    fn assert_disabled(&self, name: &str, disabled: bool) {
        for element in elements(self, name) {
            assert_eq!(
                element.state.disabled, disabled,
                "Expected {} ({}) disabled={}",
                name, element.id, disabled
            );
        }
    }

    fn assert_read_only(&self, name: &str, read_only: bool) {
        for element in elements(self, name) {
            assert_eq!(
                element.state.read_only, read_only,
                "Expected {} ({}) read_only={}",
                name, element.id, read_only
            );
        }
    }

    fn assert_highlighted(&self, name: &str, highlighted: bool) {
        for element in elements(self, name) {
            assert_eq!(
                element.state.highlighted, highlighted,
                "Expected {} ({}) highlighted={}",
                name, element.id, highlighted
            );
        }
    }
}

fn elements<'a>(form: &'a Form, name: &str) -> &'a [Element] {
    form.field(name)
        .unwrap_or_else(|| panic!("No field named {}", name))
        .elements()
}
