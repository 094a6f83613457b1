//! Flat expression text, its precedence tree and exact evaluation

mod ast;
mod builder;
mod decimal;
mod errors;
mod eval;

pub use ast::{ExpressionNode, Operand};
pub use builder::{CLOSE_PARENTHESIS, EQUALS, ExpressionTreeBuilder, OPEN_PARENTHESIS};
pub use decimal::{DECIMAL_SCALE, Decimal};
pub use errors::ExpressionError;
pub use eval::{ExpressionEvaluator, ValidationRules};
