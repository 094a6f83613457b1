//! Configuration consumed by the generator, plus loading and validation
//! used by the command line front end

mod errors;
mod loader;
mod types;
mod validation;

pub use errors::ConfigError;
pub use loader::load_config;
pub use types::{
    Config, EquationConfig, EquationVariableConfig, MutationConfig, Multiplier, QuizConfig,
    SolutionConfig, Substitution, VariableConfig,
};
pub use validation::validate_config;

#[cfg(test)]
mod tests;
