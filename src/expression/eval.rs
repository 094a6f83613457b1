use log::debug;
use serde::{Deserialize, Serialize};

use crate::expression::ast::{ExpressionNode, Operand};
use crate::expression::builder::ExpressionTreeBuilder;
use crate::expression::decimal::Decimal;
use crate::expression::errors::ExpressionError;
use crate::utils::Range;

/// Which semantic rules an evaluation enforces. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ValidationRules {
    pub self_division: bool,
    pub self_subtraction: bool,
    pub negative_results: bool,
    pub decimal_results: bool,
    pub decimal_solution: bool,
}

/// Folds an [`ExpressionNode`] tree with exact decimal arithmetic,
/// rejecting the first rule violation it meets.
#[derive(Debug, Clone, Default)]
pub struct ExpressionEvaluator {
    rules: ValidationRules,
    solution_range: Option<Range<Decimal>>,
}

impl ExpressionEvaluator {
    /// An evaluator that only computes, without any validation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            rules,
            solution_range: None,
        }
    }

    pub fn prohibit_self_division(mut self, value: bool) -> Self {
        self.rules.self_division = value;
        self
    }

    pub fn prohibit_self_subtraction(mut self, value: bool) -> Self {
        self.rules.self_subtraction = value;
        self
    }

    pub fn prohibit_negative_results(mut self, value: bool) -> Self {
        self.rules.negative_results = value;
        self
    }

    pub fn prohibit_decimal_results(mut self, value: bool) -> Self {
        self.rules.decimal_results = value;
        self
    }

    pub fn prohibit_decimal_solution(mut self, value: bool) -> Self {
        self.rules.decimal_solution = value;
        self
    }

    pub fn keep_within(mut self, range: Option<Range<Decimal>>) -> Self {
        self.solution_range = range;
        self
    }

    /// Builds the tree for `expression` (anything after `=` is ignored)
    /// and evaluates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be built into a tree, a leaf is
    /// not a decimal number, a division by zero occurs, or any enabled
    /// validation rule is violated.
    pub fn solve(&self, expression: &str) -> Result<Decimal, ExpressionError> {
        let tree = ExpressionTreeBuilder::build_equation(expression)?;
        self.evaluate(&tree)
    }

    /// # Errors
    ///
    /// See [`ExpressionEvaluator::solve`].
    pub fn evaluate(&self, tree: &ExpressionNode) -> Result<Decimal, ExpressionError> {
        debug!("Evaluating expression: {}", tree.text());

        let result = self
            .evaluate_node(tree)
            .and_then(|value| self.check_solution(value));

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }

    fn check_solution(&self, value: Decimal) -> Result<Decimal, ExpressionError> {
        if let Some(range) = &self.solution_range
            && !range.contains(&value)
        {
            return Err(ExpressionError::SolutionOutOfRange {
                value: value.to_string(),
                min: range.min.to_string(),
                max: range.max.to_string(),
            });
        }
        if self.rules.decimal_solution && !value.is_integer() {
            return Err(ExpressionError::DecimalSolution(value.to_string()));
        }
        Ok(value)
    }

    fn evaluate_node(&self, node: &ExpressionNode) -> Result<Decimal, ExpressionError> {
        let (text, operand, children) = match node {
            ExpressionNode::Leaf(text) => return text.parse(),
            ExpressionNode::Internal {
                text,
                operand,
                children,
            } => (text, *operand, children),
        };

        if self.rules.self_subtraction && is_self_subtraction(operand, children) {
            return Err(ExpressionError::SelfSubtraction(text.clone()));
        }

        let mut remaining = children.iter();
        let first = remaining
            .next()
            .ok_or_else(|| ExpressionError::MalformedExpression(text.clone()))?;
        let (mut result, mut result_text) = self.operand_value(first)?;

        for child in remaining {
            let (value, value_text) = self.operand_value(child)?;

            if self.rules.self_division
                && operand == Operand::Division
                && result_text == value_text
            {
                return Err(ExpressionError::SelfDivision {
                    node: text.clone(),
                    left: result_text,
                    right: value_text,
                });
            }

            result = apply(operand, &result, &value)?;
            result_text = result.to_string();

            if self.rules.negative_results && result.is_negative() {
                return Err(ExpressionError::NegativeResult {
                    node: text.clone(),
                    value: result_text,
                });
            }
            if self.rules.decimal_results && !result.is_integer() {
                return Err(ExpressionError::DecimalResult {
                    node: text.clone(),
                    value: result_text,
                });
            }
        }

        Ok(result)
    }

    /// A child's value together with the text it takes part in a step with:
    /// a leaf keeps its source text, a subtree is represented by its result.
    fn operand_value(&self, node: &ExpressionNode) -> Result<(Decimal, String), ExpressionError> {
        match node {
            ExpressionNode::Leaf(text) => Ok((text.parse()?, text.clone())),
            ExpressionNode::Internal { .. } => {
                let value = self.evaluate_node(node)?;
                let text = value.to_string();
                Ok((value, text))
            }
        }
    }
}

fn apply(operand: Operand, left: &Decimal, right: &Decimal) -> Result<Decimal, ExpressionError> {
    match operand {
        Operand::Addition => Ok(left + right),
        Operand::Subtraction => Ok(left - right),
        Operand::Multiplication => Ok(left * right),
        Operand::Division => left.checked_div(right),
    }
}

/// A subtraction node cancels itself when two adjacent children read the
/// same, or when an addition child ends in the term subtracted next
/// (`(a+b)-b`).
fn is_self_subtraction(operand: Operand, children: &[ExpressionNode]) -> bool {
    if operand != Operand::Subtraction {
        return false;
    }
    children.windows(2).any(|pair| match pair {
        [current, next] => {
            current.text() == next.text()
                || (current.operand() == Some(Operand::Addition)
                    && current
                        .children()
                        .last()
                        .is_some_and(|last| last.text() == next.text()))
        }
        _ => false,
    })
}
