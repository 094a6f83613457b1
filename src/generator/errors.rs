use thiserror::Error;

use crate::expression::ExpressionError;

/// Why a single generation attempt was discarded. Always recovered from by
/// retrying; never returned past the quiz generator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttemptError {
    #[error("Configuration inconsistency: {0}")]
    ConfigurationInconsistency(String),
    #[error("Invalid expression: {0}")]
    ExpressionInvalid(#[from] ExpressionError),
    #[error("Value {value} for variable '{identifier}' is already taken")]
    ValueTaken { identifier: String, value: String },
    #[error("Range {min}..={max} of variable '{identifier}' is empty")]
    EmptyRange {
        identifier: String,
        min: i64,
        max: i64,
    },
    #[error("Quiz has {variables} variables and {equations} equations")]
    IncompleteQuiz { variables: usize, equations: usize },
}
