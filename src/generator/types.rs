use serde::Serialize;

use crate::expression::Decimal;

/// A variable drawn for one quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub identifier: String,
    pub value: Decimal,
}

/// One equation in both renderings, each ending in `=solution`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equation {
    /// Variable names, possibly wrapped by mutation.
    pub identifiers: String,
    /// The same text with every identifier replaced by its value.
    pub values: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quiz {
    pub variables: Vec<Variable>,
    pub equations: Vec<Equation>,
}
