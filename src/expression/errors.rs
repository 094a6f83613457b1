use thiserror::Error;

/// Reasons an expression cannot be built, solved or accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Expression is empty")]
    EmptyExpression,
    #[error("Malformed expression: '{0}'")]
    MalformedExpression(String),
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Self-division at node '{node}': '{left}/{right}'")]
    SelfDivision {
        node: String,
        left: String,
        right: String,
    },
    #[error("Self-subtraction at node '{0}'")]
    SelfSubtraction(String),
    #[error("Negative result at node '{node}': {value}")]
    NegativeResult { node: String, value: String },
    #[error("Decimal result at node '{node}': {value}")]
    DecimalResult { node: String, value: String },
    #[error("Solution {value} is outside the range {min}..={max}")]
    SolutionOutOfRange {
        value: String,
        min: String,
        max: String,
    },
    #[error("Solution {0} is not an integer")]
    DecimalSolution(String),
}
