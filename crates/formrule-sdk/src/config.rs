//! Configuration types for RuleEngine

use crate::error::{Result, SdkError};
use formrule_runtime::{DisplayMode, EvaluationOptions, DEFAULT_SELECT_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rule document path(s)
    pub rule_files: Vec<PathBuf>,

    /// Compare option text / element ids (`text`) or raw values (`value`)
    pub display_mode: DisplayMode,

    /// Selection-list text treated as "no answer"
    pub select_placeholder: String,

    /// Thousands separator ignored by numeric `==`; `null` disables it
    pub digit_group_symbol: Option<String>,

    /// Call the calendar hook after actions are applied
    pub refresh_calendar: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            rule_files: Vec::new(),
            display_mode: DisplayMode::default(),
            select_placeholder: DEFAULT_SELECT_PLACEHOLDER.to_string(),
            digit_group_symbol: Some(",".to_string()),
            refresh_calendar: true,
        }
    }

    /// Load configuration from YAML (or JSON) text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| SdkError::ConfigError(e.to_string()))
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded engine configuration from {}", path.display());
        Self::from_yaml_str(&text)
    }

    /// Add a rule file
    pub fn with_rule_file(mut self, path: PathBuf) -> Self {
        self.rule_files.push(path);
        self
    }

    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn with_select_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.select_placeholder = placeholder.into();
        self
    }

    pub fn with_digit_group_symbol(mut self, symbol: Option<String>) -> Self {
        self.digit_group_symbol = symbol;
        self
    }

    pub fn refresh_calendar(mut self, enable: bool) -> Self {
        self.refresh_calendar = enable;
        self
    }

    /// Options handed to the condition evaluator
    pub fn evaluation_options(&self) -> EvaluationOptions {
        EvaluationOptions {
            display_mode: self.display_mode,
            select_placeholder: self.select_placeholder.clone(),
            digit_group_symbol: self.digit_group_symbol.clone(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::new()
            .with_rule_file(PathBuf::from("rules.yaml"))
            .with_display_mode(DisplayMode::Text)
            .refresh_calendar(false);

        assert_eq!(config.rule_files.len(), 1);
        assert_eq!(config.display_mode, DisplayMode::Text);
        assert!(!config.refresh_calendar);
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.display_mode, DisplayMode::Value);
        assert_eq!(config.select_placeholder, "select an option");
        assert_eq!(config.digit_group_symbol.as_deref(), Some(","));
        assert!(config.refresh_calendar);
        assert_eq!(config.evaluation_options(), EvaluationOptions::default());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = EngineConfig::from_yaml_str(
            "display_mode: text\ndigit_group_symbol: '.'\nrule_files: [a.yaml]\n",
        )
        .unwrap();
        assert_eq!(config.display_mode, DisplayMode::Text);
        assert_eq!(config.digit_group_symbol.as_deref(), Some("."));
        assert_eq!(config.rule_files, vec![PathBuf::from("a.yaml")]);
        assert!(config.refresh_calendar);
    }

    #[test]
    fn test_from_yaml_rejects_bad_mode() {
        let err = EngineConfig::from_yaml_str("display_mode: fancy\n").unwrap_err();
        assert!(matches!(err, SdkError::ConfigError(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = EngineConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, SdkError::IoError(_)));
    }
}
