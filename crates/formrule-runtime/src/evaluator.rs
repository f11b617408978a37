//! Condition tree evaluation

use crate::comparators::compare;
use crate::error::{Result, RuntimeError};
use crate::extractor::extract;
use crate::options::EvaluationOptions;
use crate::trace::{ConditionTrace, EvaluationTrace};
use formrule_core::condition::{Combinator, ConditionGroup, ConditionNode, SingleCondition};
use formrule_core::FormModel;

/// Reduces a condition tree to one boolean
#[derive(Debug, Clone, Default)]
pub struct ConditionEvaluator {
    options: EvaluationOptions,
}

impl ConditionEvaluator {
    pub fn new(options: EvaluationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Evaluate a condition tree against a form
    pub fn evaluate<F: FormModel + ?Sized>(&self, node: &ConditionNode, form: &F) -> Result<bool> {
        self.evaluate_node(node, form, &mut None)
    }

    /// Evaluate a condition tree and record every evaluated single condition
    pub fn evaluate_with_trace<F: FormModel + ?Sized>(
        &self,
        node: &ConditionNode,
        form: &F,
    ) -> Result<EvaluationTrace> {
        let mut traces = Some(Vec::new());
        let result = self.evaluate_node(node, form, &mut traces)?;
        Ok(EvaluationTrace {
            result,
            conditions: traces.unwrap_or_default(),
        })
    }

    fn evaluate_node<F: FormModel + ?Sized>(
        &self,
        node: &ConditionNode,
        form: &F,
        traces: &mut Option<Vec<ConditionTrace>>,
    ) -> Result<bool> {
        match node {
            ConditionNode::Single(single) => self.evaluate_single(single, form, traces),
            ConditionNode::Multiple(group) => self.evaluate_group(group, form, traces),
        }
    }

    fn evaluate_group<F: FormModel + ?Sized>(
        &self,
        group: &ConditionGroup,
        form: &F,
        traces: &mut Option<Vec<ConditionTrace>>,
    ) -> Result<bool> {
        let result = match group.combinator {
            Combinator::Or => {
                let mut any = false;
                for child in &group.children {
                    if self.evaluate_node(child, form, traces)? {
                        any = true;
                        break;
                    }
                }
                any
            }
            Combinator::And => {
                let mut all = true;
                for child in &group.children {
                    if !self.evaluate_node(child, form, traces)? {
                        all = false;
                        break;
                    }
                }
                all
            }
        };

        tracing::debug!(
            "{} group of {} children evaluated to {}",
            group.combinator,
            group.children.len(),
            result
        );
        Ok(result)
    }

    fn evaluate_single<F: FormModel + ?Sized>(
        &self,
        single: &SingleCondition,
        form: &F,
        traces: &mut Option<Vec<ConditionTrace>>,
    ) -> Result<bool> {
        let name = single.field.as_str();
        let field = form.field(name).ok_or_else(|| {
            tracing::warn!("Condition references unknown field '{}'", name);
            RuntimeError::FieldNotFound(name.to_string())
        })?;

        let extracted = extract(field, &self.options);
        let result = compare(
            single.comparator,
            field,
            &extracted,
            &single.values,
            &self.options,
        );

        tracing::debug!(
            field = name,
            comparator = %single.comparator,
            value = %extracted.value,
            group_len = extracted.group_len,
            "Single condition evaluated to {}",
            result
        );

        if let Some(traces) = traces.as_mut() {
            traces.push(ConditionTrace {
                field: name.to_string(),
                comparator: single.comparator,
                values: single.values.clone(),
                resolved_value: extracted.value,
                group_len: extracted.group_len,
                result,
            });
        }

        Ok(result)
    }
}
