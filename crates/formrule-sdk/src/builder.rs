//! Builder pattern for RuleEngine

use crate::config::EngineConfig;
use crate::engine::RuleEngine;
use crate::error::Result;
use crate::hook::CalendarHook;
use formrule_core::ConditionalRule;
use formrule_parser::RuleParser;
use formrule_runtime::DisplayMode;
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for RuleEngine
///
/// # Example
///
/// ```rust,ignore
/// use formrule_sdk::RuleEngineBuilder;
///
/// let engine = RuleEngineBuilder::new()
///     .add_rule_file("rules/intake.yaml")
///     .add_rule_content(yaml_content)
///     .with_calendar_hook(|| reattach_date_pickers())
///     .build()?;
/// ```
pub struct RuleEngineBuilder {
    config: EngineConfig,
    rule_contents: Vec<String>,
    rules: Vec<ConditionalRule>,
    calendar_hook: Option<Arc<dyn CalendarHook>>,
}

impl RuleEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            rule_contents: Vec::new(),
            rules: Vec::new(),
            calendar_hook: None,
        }
    }

    /// Replace the configuration. Rule files added earlier with
    /// [`add_rule_file`](Self::add_rule_file) are kept, after the files the
    /// new configuration lists.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        let added = std::mem::take(&mut self.config.rule_files);
        self.config = config;
        self.config.rule_files.extend(added);
        self
    }

    /// Add a rule document file
    pub fn add_rule_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.rule_files.push(path.into());
        self
    }

    /// Add rule document content directly (alternative to a file)
    pub fn add_rule_content(mut self, content: impl Into<String>) -> Self {
        self.rule_contents.push(content.into());
        self
    }

    /// Add an already built rule
    pub fn add_rule(mut self, rule: ConditionalRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.config.display_mode = mode;
        self
    }

    pub fn with_calendar_hook(mut self, hook: impl CalendarHook + 'static) -> Self {
        self.calendar_hook = Some(Arc::new(hook));
        self
    }

    /// Parse all rule sources and build the engine.
    ///
    /// Rules are registered in this order: configured files, inline
    /// contents, then rules added with [`add_rule`](Self::add_rule).
    pub fn build(self) -> Result<RuleEngine> {
        let mut rules = Vec::new();

        for path in &self.config.rule_files {
            let content = std::fs::read_to_string(path)?;
            let parsed = RuleParser::parse(&content)?;
            tracing::info!("Loaded {} rule(s) from {}", parsed.len(), path.display());
            rules.extend(parsed);
        }

        for content in &self.rule_contents {
            rules.extend(RuleParser::parse(content)?);
        }

        rules.extend(self.rules);
        tracing::info!("Rule engine built with {} rule(s)", rules.len());

        Ok(RuleEngine::with_parts(self.config, rules, self.calendar_hook))
    }
}

impl Default for RuleEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use formrule_core::{ActionEntry, ActionKind, Comparator, ConditionNode};

    const RULES: &str = r#"
rules:
  - id: from_content
    condition: { type: single, data: { field: a, type: "not null" } }
    actions: [{ type: highlight, fields: [b] }]
"#;

    #[test]
    fn test_build_from_content_and_rules() {
        let engine = RuleEngineBuilder::new()
            .add_rule_content(RULES)
            .add_rule(
                ConditionalRule::new(
                    ConditionNode::single("a", Comparator::Null, Vec::<String>::new()),
                    vec![ActionEntry::new(ActionKind::Hide, ["b"])],
                )
                .with_id("added"),
            )
            .display_mode(DisplayMode::Text)
            .build()
            .unwrap();

        let ids: Vec<_> = engine.rules().iter().map(|r| r.label()).collect();
        assert_eq!(ids, vec!["from_content", "added"]);
        assert_eq!(engine.config().display_mode, DisplayMode::Text);
    }

    #[test]
    fn test_build_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.yaml");
        std::fs::write(&path, RULES).unwrap();

        let engine = RuleEngineBuilder::new().add_rule_file(&path).build().unwrap();
        assert_eq!(engine.rules().len(), 1);
    }

    #[test]
    fn test_with_config_keeps_added_rule_files() {
        let builder = RuleEngineBuilder::new()
            .add_rule_file("added.yaml")
            .with_config(EngineConfig::new().with_rule_file(PathBuf::from("configured.yaml")));

        assert_eq!(
            builder.config.rule_files,
            vec![PathBuf::from("configured.yaml"), PathBuf::from("added.yaml")]
        );
    }

    #[test]
    fn test_build_fails_on_bad_content() {
        let err = RuleEngineBuilder::new()
            .add_rule_content("condition: { type: single, data: { field: a, type: '~', values: [] } }")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SdkError::ParseError(_)));
    }

    #[test]
    fn test_build_fails_on_missing_file() {
        let err = RuleEngineBuilder::new()
            .add_rule_file("/no/such/rules.yaml")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SdkError::IoError(_)));
    }
}
