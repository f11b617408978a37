//! Integration tests for engine configuration and host hooks

mod common;

use common::{intake_form, FormAssertions};
use formrule_sdk::{DisplayMode, EngineConfig, FormModel, RuleEngineBuilder, SdkError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const SMOKER_RULES: &str = r#"
rules:
  - id: lock_packs_for_non_smokers
    condition: { type: single, data: { field: fld_smoker, type: "==", values: ["No"] } }
    actions: [{ type: read only, fields: [fld_packs] }]
"#;

#[test]
fn test_config_file_drives_engine() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let rules_path = dir.path().join("smoker.yaml");
    std::fs::write(&rules_path, SMOKER_RULES)?;

    let config_path = dir.path().join("engine.yaml");
    std::fs::write(
        &config_path,
        format!(
            "rule_files:\n  - {}\ndisplay_mode: text\nrefresh_calendar: false\n",
            rules_path.display()
        ),
    )?;

    let config = EngineConfig::from_file(&config_path)?;
    assert_eq!(config.display_mode, DisplayMode::Text);
    assert_eq!(config.select_placeholder, "select an option");

    let engine = RuleEngineBuilder::new().with_config(config).build()?;
    assert_eq!(engine.rules().len(), 1);

    let mut form = intake_form();
    let outcomes = engine.run_all(&mut form)?;
    assert!(outcomes[0].active);
    form.assert_read_only("fld_packs", true);
    Ok(())
}

#[test]
fn test_value_mode_ignores_option_text() {
    let engine = RuleEngineBuilder::new()
        .add_rule_content(SMOKER_RULES)
        .build()
        .unwrap();

    let mut form = intake_form();
    assert!(!engine.run_all(&mut form).unwrap()[0].active);
    form.assert_read_only("fld_packs", false);
}

#[test]
fn test_invalid_config_is_reported() {
    let err = EngineConfig::from_yaml_str("display_mode: sideways\n").unwrap_err();
    assert!(matches!(err, SdkError::ConfigError(_)));
}

#[test]
fn test_calendar_hook_runs_after_each_rule() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let engine = RuleEngineBuilder::new()
        .add_rule_content(SMOKER_RULES)
        .add_rule_content(
            r#"
condition: { type: single, data: { field: fld_quit_date, type: "null" } }
actions: [{ type: disable, fields: [fld_quit_date] }]
"#,
        )
        .with_calendar_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    let mut form = intake_form();
    engine.run_all(&mut form).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    engine.on_field_change("fld_quit_date", &mut form).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_custom_placeholder() {
    let engine = RuleEngineBuilder::new()
        .with_config(
            EngineConfig::new()
                .with_display_mode(DisplayMode::Text)
                .with_select_placeholder("Select an option"),
        )
        .add_rule_content(
            r#"
condition: { type: single, data: { field: fld_smoker, type: "null" } }
actions: [{ type: highlight, fields: [fld_smoker] }]
"#,
        )
        .build()
        .unwrap();

    let mut form = intake_form();
    engine.run_all(&mut form).unwrap();
    form.assert_highlighted("fld_smoker", false);

    let smoker = form
        .field_mut("fld_smoker")
        .and_then(|f| f.as_single_mut())
        .unwrap();
    smoker.selected = Some(0);
    engine.run_all(&mut form).unwrap();
    form.assert_highlighted("fld_smoker", true);
}
