//! Nested Conditions Example
//!
//! Builds an `or` of `and` groups, explains how it was evaluated and then
//! locks an order once it has been paid or shipped in full.

use formrule_core::form::Element;
use formrule_parser::ConditionParser;
use formrule_sdk::{ActionEntry, ActionKind, Form, RuleEngine};

const CONDITION: &str = r#"
type: multiple
condition: or
data:
  - type: multiple
    condition: and
    data:
      - { type: single, data: { field: fld_status, type: "==", values: [shipped] } }
      - { type: single, data: { field: fld_shipped_qty, type: ">=", values: [10] } }
  - type: single
    data: { field: fld_paid, type: "not null" }
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Nested Conditions Example ===\n");

    let condition = ConditionParser::parse(CONDITION)?;
    println!("Condition: {}\n", condition);

    let mut form = Form::new()
        .with_element(Element::text("fld_status", "Shipped"))
        .with_element(Element::text("fld_shipped_qty", "12"))
        .with_group(
            "fld_paid",
            vec![Element::checkbox("fld_paid", "paid", "paid", false)],
        )
        .with_element(Element::text("fld_total", "1,200.00"))
        .with_element(Element::date("fld_delivery", "2026-11-02"));

    let engine = RuleEngine::default();

    let trace = engine.explain(&condition, &form)?;
    println!("Evaluation trace:\n{}\n", trace.to_json()?);

    let actions = vec![
        ActionEntry::new(ActionKind::ReadOnly, ["fld_total", "fld_delivery"]),
        ActionEntry::new(ActionKind::Disable, ["fld_paid"]),
    ];
    let active = engine.check_conditions(&condition, &actions, &mut form)?;
    println!("Order locked: {}", active);

    println!("\n=== Example Complete ===");
    Ok(())
}
