use log::{debug, warn};

use crate::config::errors::ConfigError;
use crate::config::types::{Config, EquationConfig};
use crate::utils::validate_identifier;

const MANY_QUIZZES: usize = 10_000;
const MANY_VARIABLES: usize = 10;

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}

/// Checks a loaded config before generation.
///
/// The generator itself tolerates a bad config (every attempt simply fails
/// and the unit is omitted); this check turns such mistakes into an error
/// up front. Numbering in messages is 1-based.
///
/// # Errors
///
/// Returns the first problem found.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    debug!("Validating config");

    if config.variables.is_empty() {
        return Err(invalid("config does not contain any variables".to_string()));
    }
    if config.equations.is_empty() {
        return Err(invalid("config does not contain any equations".to_string()));
    }
    if config.quiz.amount < 1 {
        return Err(invalid(format!(
            "invalid amount of quizzes: {}",
            config.quiz.amount
        )));
    }
    if config.quiz.amount > MANY_QUIZZES {
        warn!(
            "generating more than {} quizzes ({}) may take longer than expected",
            MANY_QUIZZES, config.quiz.amount
        );
    }

    for (index, variable) in config.variables.iter().enumerate() {
        let number = index + 1;
        validate_identifier(&variable.identifier)?;
        if variable.range.is_empty() {
            return Err(invalid(format!(
                "range minimum ({}) of variable #{} ({}) is bigger than its maximum ({})",
                variable.range.min, number, variable.identifier, variable.range.max
            )));
        }
    }

    for (index, equation) in config.equations.iter().enumerate() {
        validate_equation(config, equation, index + 1)?;
    }

    debug!("Config validation successful");
    Ok(())
}

fn validate_equation(
    config: &Config,
    equation: &EquationConfig,
    number: usize,
) -> Result<(), ConfigError> {
    let is_known = |identifier: &str| {
        config
            .variables
            .iter()
            .any(|variable| variable.identifier == identifier)
    };

    if equation.operands.is_empty() {
        return Err(invalid(format!("equation #{number} has no operands set")));
    }

    let amount = equation.variables.amount;
    if amount < 2 {
        return Err(invalid(format!(
            "invalid amount of variables ({amount}) for equation #{number}, must be at least 2"
        )));
    }
    if amount > MANY_VARIABLES {
        warn!(
            "generating equations with more than {} variables may take significantly longer (equation #{}: {} variables)",
            MANY_VARIABLES, number, amount
        );
    }

    let combos = &equation.variables.combos;
    if combos.is_empty() || combos.iter().any(Vec::is_empty) {
        return Err(invalid(format!(
            "equation #{number} needs at least one variable combo, each with at least one variable"
        )));
    }
    if let Some(unknown) = combos
        .iter()
        .flatten()
        .find(|identifier| !is_known(identifier.as_str()))
    {
        return Err(invalid(format!(
            "combo variable '{unknown}' of equation #{number} does not match any defined variable"
        )));
    }

    if let Some(range) = &equation.solution.range
        && range.is_empty()
    {
        return Err(invalid(format!(
            "solution range minimum ({}) of equation #{} is bigger than its maximum ({})",
            range.min, number, range.max
        )));
    }

    let mutation = &equation.mutation;
    if mutation.enabled {
        if !(0.0..=1.0).contains(&mutation.chance) {
            return Err(invalid(format!(
                "invalid mutation chance ({}) for equation #{}",
                mutation.chance, number
            )));
        }
        if mutation.amplifier.min < 1 {
            return Err(invalid(format!(
                "mutation amplifier minimum for equation #{number} must be at least 1"
            )));
        }
        if mutation.amplifier.is_empty() {
            return Err(invalid(format!(
                "mutation amplifier range minimum ({}) of equation #{} is bigger than its maximum ({})",
                mutation.amplifier.min, number, mutation.amplifier.max
            )));
        }
        if mutation.affected_variables.is_empty() {
            warn!(
                "no variables to be affected by mutation defined for equation #{}",
                number
            );
        }
        if let Some(unknown) = mutation
            .affected_variables
            .iter()
            .find(|identifier| !is_known(identifier.as_str()))
        {
            return Err(invalid(format!(
                "mutation-affected variable '{unknown}' of equation #{number} does not match any defined variable"
            )));
        }
    }

    Ok(())
}
