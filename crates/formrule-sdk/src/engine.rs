//! RuleEngine - Main API for conditional field behaviour

use crate::config::EngineConfig;
use crate::error::Result;
use crate::hook::CalendarHook;
use formrule_core::{ActionEntry, ConditionNode, ConditionalRule, FormModel};
use formrule_parser::RuleParser;
use formrule_runtime::{ActionDispatcher, ConditionEvaluator, EvaluationTrace};
use serde::Serialize;
use std::sync::Arc;

/// Result of running one registered rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub rule_id: Option<String>,
    /// Condition result, used as the activation flag of the actions
    pub active: bool,
}

/// Evaluates condition trees against a form and applies their actions
pub struct RuleEngine {
    config: EngineConfig,
    evaluator: ConditionEvaluator,
    rules: Vec<ConditionalRule>,
    calendar_hook: Option<Arc<dyn CalendarHook>>,
}

impl RuleEngine {
    /// Create an engine without registered rules
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(config, Vec::new(), None)
    }

    pub(crate) fn with_parts(
        config: EngineConfig,
        rules: Vec<ConditionalRule>,
        calendar_hook: Option<Arc<dyn CalendarHook>>,
    ) -> Self {
        let evaluator = ConditionEvaluator::new(config.evaluation_options());
        Self {
            config,
            evaluator,
            rules,
            calendar_hook,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registered rules
    pub fn rules(&self) -> &[ConditionalRule] {
        &self.rules
    }

    /// Evaluate `condition`, apply every action with the result, then
    /// refresh calendars. Returns the condition result.
    pub fn check_conditions<F: FormModel + ?Sized>(
        &self,
        condition: &ConditionNode,
        actions: &[ActionEntry],
        form: &mut F,
    ) -> Result<bool> {
        let active = self.evaluator.evaluate(condition, &*form)?;
        tracing::debug!("Condition {} evaluated to {}", condition, active);

        ActionDispatcher::apply(form, actions, active)?;
        self.refresh_calendar();
        Ok(active)
    }

    /// Run one rule
    pub fn run_rule<F: FormModel + ?Sized>(
        &self,
        rule: &ConditionalRule,
        form: &mut F,
    ) -> Result<RuleOutcome> {
        tracing::info!("Running rule {}", rule.label());
        let active = self.check_conditions(&rule.condition, &rule.actions, form)?;
        Ok(RuleOutcome {
            rule_id: rule.id.clone(),
            active,
        })
    }

    /// Parse a rule document and run each of its rules in order
    pub fn check_document<F: FormModel + ?Sized>(
        &self,
        text: &str,
        form: &mut F,
    ) -> Result<Vec<RuleOutcome>> {
        let rules = RuleParser::parse(text)?;
        rules.iter().map(|rule| self.run_rule(rule, form)).collect()
    }

    /// Run every registered rule triggered by a change of `field`
    pub fn on_field_change<F: FormModel + ?Sized>(
        &self,
        field: &str,
        form: &mut F,
    ) -> Result<Vec<RuleOutcome>> {
        let triggered: Vec<&ConditionalRule> = self
            .rules
            .iter()
            .filter(|rule| rule.is_triggered_by(field))
            .collect();
        tracing::debug!("Field '{}' changed, {} rule(s) triggered", field, triggered.len());

        triggered
            .into_iter()
            .map(|rule| self.run_rule(rule, form))
            .collect()
    }

    /// Run every registered rule, e.g. when a form is first shown
    pub fn run_all<F: FormModel + ?Sized>(&self, form: &mut F) -> Result<Vec<RuleOutcome>> {
        self.rules.iter().map(|rule| self.run_rule(rule, form)).collect()
    }

    /// Evaluate a condition without applying anything and report which
    /// single conditions were evaluated
    pub fn explain<F: FormModel + ?Sized>(
        &self,
        condition: &ConditionNode,
        form: &F,
    ) -> Result<EvaluationTrace> {
        Ok(self.evaluator.evaluate_with_trace(condition, form)?)
    }

    fn refresh_calendar(&self) {
        if !self.config.refresh_calendar {
            return;
        }
        if let Some(hook) = &self.calendar_hook {
            tracing::trace!("Refreshing calendars");
            hook.refresh();
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
