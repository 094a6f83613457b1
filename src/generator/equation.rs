use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{EquationConfig, Substitution};
use crate::expression::{
    CLOSE_PARENTHESIS, EQUALS, ExpressionEvaluator, OPEN_PARENTHESIS, Operand,
};
use crate::generator::errors::AttemptError;
use crate::generator::types::{Equation, Variable};

/// Rendered in place of the solution when it is hidden.
pub const HIDDEN_SOLUTION: &str = "?";

fn inconsistency(reason: impl Into<String>) -> AttemptError {
    AttemptError::ConfigurationInconsistency(reason.into())
}

/// Builds one random equation for an equation slot and validates it.
pub struct EquationAssembler<'a> {
    config: &'a EquationConfig,
    evaluator: ExpressionEvaluator,
}

impl<'a> EquationAssembler<'a> {
    pub fn new(config: &'a EquationConfig) -> Self {
        let evaluator = ExpressionEvaluator::with_rules(config.validate)
            .keep_within(config.solution.range.clone());
        Self { config, evaluator }
    }

    /// One assembly attempt.
    ///
    /// # Errors
    ///
    /// Returns [`AttemptError::ConfigurationInconsistency`] when the slot
    /// cannot be filled with the given variables and config, and
    /// [`AttemptError::ExpressionInvalid`] when the drawn expression breaks
    /// a validation rule. Either way the caller is expected to retry.
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        variables: &[Variable],
        rng: &mut R,
    ) -> Result<Equation, AttemptError> {
        let amount = self.config.variables.amount;
        if amount == 0 {
            return Err(inconsistency("required variable count must be positive"));
        }

        let operands = (1..amount)
            .map(|_| self.config.operands.choose(rng).copied())
            .collect::<Option<Vec<Operand>>>()
            .ok_or_else(|| inconsistency("no operands configured"))?;

        let combo = self
            .config
            .variables
            .combos
            .choose(rng)
            .ok_or_else(|| inconsistency("no variable combos configured"))?;

        let pool: Vec<&Variable> = variables
            .iter()
            .filter(|variable| combo.contains(&variable.identifier))
            .collect();

        let mut ordered: Vec<&Variable> = Vec::with_capacity(amount);
        for identifier in combo {
            if ordered.len() == amount {
                break;
            }
            if let Some(variable) = pool.iter().find(|v| &v.identifier == identifier) {
                ordered.push(*variable);
            }
        }
        while ordered.len() < amount {
            match pool.choose(rng) {
                Some(variable) => ordered.push(*variable),
                None => break,
            }
        }

        if operands.len() + 1 != ordered.len() {
            return Err(inconsistency(format!(
                "expected {} operands for {} variables, got {}",
                ordered.len().saturating_sub(1),
                ordered.len(),
                operands.len()
            )));
        }

        let with_identifiers = self.build_expression(&ordered, &operands, rng)?;
        let with_values = substitute(self.config.substitution, &with_identifiers, &ordered);
        trace!("Assembled '{}' as '{}'", with_identifiers, with_values);

        let solution = self.evaluator.solve(&with_values)?;
        let solution = if self.config.solution.hide {
            HIDDEN_SOLUTION.to_string()
        } else {
            solution.to_string()
        };

        Ok(Equation {
            identifiers: format!("{with_identifiers}{EQUALS}{solution}"),
            values: format!("{with_values}{EQUALS}{solution}"),
        })
    }

    fn build_expression<R: Rng + ?Sized>(
        &self,
        variables: &[&Variable],
        operands: &[Operand],
        rng: &mut R,
    ) -> Result<String, AttemptError> {
        let mut expression = String::new();
        for (index, variable) in variables.iter().enumerate() {
            expression.push_str(&self.mutate(&variable.identifier, rng)?);
            if let Some(operand) = operands.get(index) {
                expression.push(operand.symbol());
            }
        }
        Ok(expression)
    }

    /// Wraps an affected identifier as `(amplifier*(identifier*multiplier))`,
    /// leaving out the parts that would be a factor of one.
    fn mutate<R: Rng + ?Sized>(
        &self,
        identifier: &str,
        rng: &mut R,
    ) -> Result<String, AttemptError> {
        let mutation = &self.config.mutation;
        if !mutation.affects(identifier) {
            return Ok(identifier.to_string());
        }
        if !(0.0..=1.0).contains(&mutation.chance) {
            return Err(inconsistency(format!(
                "mutation chance {} is outside [0, 1]",
                mutation.chance
            )));
        }
        if !rng.gen_bool(mutation.chance) {
            return Ok(identifier.to_string());
        }

        let times = Operand::Multiplication;
        let multiplied = match mutation.multiplier.literal() {
            Some(literal) => {
                format!("{OPEN_PARENTHESIS}{identifier}{times}{literal}{CLOSE_PARENTHESIS}")
            }
            None => identifier.to_string(),
        };

        let amplifier = &mutation.amplifier;
        if amplifier.is_empty() {
            return Err(inconsistency(format!(
                "mutation amplifier range {}..={} is empty",
                amplifier.min, amplifier.max
            )));
        }
        let amplifier = rng.gen_range(amplifier.min..=amplifier.max);
        if amplifier == 1 {
            Ok(multiplied)
        } else {
            Ok(format!(
                "{OPEN_PARENTHESIS}{amplifier}{times}{multiplied}{CLOSE_PARENTHESIS}"
            ))
        }
    }
}

/// Produces the value-form of an identifier-form expression.
pub fn substitute(mode: Substitution, expression: &str, variables: &[&Variable]) -> String {
    match mode {
        Substitution::Literal => variables.iter().fold(expression.to_string(), |text, variable| {
            text.replace(&variable.identifier, &variable.value.to_string())
        }),
        Substitution::Token => {
            let mut result = String::with_capacity(expression.len());
            let mut token = String::new();
            for c in expression.chars() {
                if is_structural(c) {
                    push_token(&mut result, &token, variables);
                    token.clear();
                    result.push(c);
                } else {
                    token.push(c);
                }
            }
            push_token(&mut result, &token, variables);
            result
        }
    }
}

fn is_structural(c: char) -> bool {
    Operand::from_symbol(c).is_some() || c == OPEN_PARENTHESIS || c == CLOSE_PARENTHESIS
}

fn push_token(result: &mut String, token: &str, variables: &[&Variable]) {
    match variables.iter().find(|variable| variable.identifier == token) {
        Some(variable) => result.push_str(&variable.value.to_string()),
        None => result.push_str(token),
    }
}
