//! Visibility Toggle Example
//!
//! A follow-up question is only shown when the previous answer is "No".
//! The rule document names its trigger field, so the engine re-runs it
//! whenever the host reports a change to that field.
//!
//! Run with `RUST_LOG=debug` to see the engine's decisions.

use formrule_core::form::{Element, Enclosing, Field, FieldLayout};
use formrule_sdk::{DisplayMode, Form, FormModel, RuleEngineBuilder};

const RULES: &str = r#"
rules:
  - id: ask_reason_when_unhappy
    trigger: fld_satisfied
    condition:
      type: single
      data:
        field: fld_satisfied
        type: "=="
        values: ["No"]
    actions:
      - type: highlight
        fields: [fld_reason]
  - id: hide_reason_otherwise
    trigger: fld_satisfied
    condition:
      type: single
      data:
        field: fld_satisfied
        type: "!="
        values: ["No"]
    actions:
      - type: hide
        fields: [fld_reason]
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    println!("=== Visibility Toggle Example ===\n");

    let engine = RuleEngineBuilder::new()
        .add_rule_content(RULES)
        .display_mode(DisplayMode::Text)
        .build()?;
    println!("✓ Engine built with {} rule(s)\n", engine.rules().len());

    let mut form = Form::new()
        .with_element(Element::select(
            "fld_satisfied",
            [("Select an option", ""), ("Yes", "1"), ("No", "0")],
            Some(1),
        ))
        .with_field_in(
            Field::Single(Element::text_area("fld_reason", "")),
            FieldLayout {
                has_label: true,
                has_container: true,
                enclosing: Enclosing::Row,
            },
        );

    // Initial render
    engine.run_all(&mut form)?;
    report(&form, "Answer 'Yes'");

    // User switches to "No"
    if let Some(select) = form.field_mut("fld_satisfied").and_then(|f| f.as_single_mut()) {
        select.select_value("0");
    }
    engine.on_field_change("fld_satisfied", &mut form)?;
    report(&form, "Answer 'No'");

    println!("\n=== Example Complete ===");
    Ok(())
}

fn report(form: &Form, label: &str) {
    let hidden = form
        .visibility("fld_reason")
        .map_or(false, |v| v.is_hidden());
    let highlighted = form
        .field("fld_reason")
        .and_then(|f| f.as_single())
        .map_or(false, |e| e.state.highlighted);
    println!("{}: reason hidden={}, highlighted={}", label, hidden, highlighted);
}
