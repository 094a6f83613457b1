use log::warn;
use rand::Rng;

use crate::config::VariableConfig;
use crate::expression::Decimal;
use crate::generator::attempts::{VARIABLE_ATTEMPTS, retry};
use crate::generator::errors::AttemptError;
use crate::generator::types::Variable;

/// Draws one value per configured variable, unique across all variables
/// of the attempt.
pub struct VariableGenerator<'a> {
    configs: &'a [VariableConfig],
}

impl<'a> VariableGenerator<'a> {
    pub fn new(configs: &'a [VariableConfig]) -> Self {
        Self { configs }
    }

    /// A variable whose draws keep colliding is left out, so the result may
    /// be shorter than the configured list.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Variable> {
        let mut variables: Vec<Variable> = Vec::with_capacity(self.configs.len());

        for config in self.configs {
            let drawn = retry("Variable", VARIABLE_ATTEMPTS, || {
                draw_unique(config, &variables, rng)
            });
            match drawn {
                Some(value) => variables.push(Variable {
                    identifier: config.identifier.clone(),
                    value,
                }),
                None => warn!(
                    "Failed to generate variable '{}' after {} attempts",
                    config.identifier, VARIABLE_ATTEMPTS
                ),
            }
        }

        variables
    }
}

fn draw_unique<R: Rng + ?Sized>(
    config: &VariableConfig,
    taken: &[Variable],
    rng: &mut R,
) -> Result<Decimal, AttemptError> {
    let range = &config.range;
    if range.is_empty() {
        return Err(AttemptError::EmptyRange {
            identifier: config.identifier.clone(),
            min: range.min,
            max: range.max,
        });
    }

    let value = Decimal::from(rng.gen_range(range.min..=range.max));
    if taken.iter().any(|variable| variable.value == value) {
        return Err(AttemptError::ValueTaken {
            identifier: config.identifier.clone(),
            value: value.to_string(),
        });
    }
    Ok(value)
}
