use log::trace;

use crate::expression::ast::{ExpressionNode, Operand};
use crate::expression::errors::ExpressionError;

pub const OPEN_PARENTHESIS: char = '(';
pub const CLOSE_PARENTHESIS: char = ')';
pub const EQUALS: char = '=';

/// Turns flat expression text into an [`ExpressionNode`] tree.
///
/// There is no tokenizer: the text is split at one operator tier at a time,
/// loosest tier first (see [`Operand::TIERS`]), and only at parenthesis
/// depth zero. Text that no tier can split is taken to be a parenthesized
/// sub-expression, unwrapped once and split again from the loosest tier.
pub struct ExpressionTreeBuilder;

impl ExpressionTreeBuilder {
    /// # Errors
    ///
    /// Returns an error if the expression is blank, or if a part that no
    /// tier can split is not wrapped in parentheses.
    pub fn build(expression: &str) -> Result<ExpressionNode, ExpressionError> {
        if expression.trim().is_empty() {
            return Err(ExpressionError::EmptyExpression);
        }
        let tree = Self::build_at(expression, Some(Operand::TIERS[0]))?;
        trace!("Built tree {} from '{}'", tree, expression);
        Ok(tree)
    }

    /// Builds the tree of the left-hand side of `expression=solution`.
    ///
    /// # Errors
    ///
    /// Same as [`ExpressionTreeBuilder::build`].
    pub fn build_equation(equation: &str) -> Result<ExpressionNode, ExpressionError> {
        let expression = equation.split(EQUALS).next().unwrap_or_default();
        Self::build(expression)
    }

    fn build_at(text: &str, tier: Option<Operand>) -> Result<ExpressionNode, ExpressionError> {
        if !contains_operator(text) {
            return Ok(ExpressionNode::Leaf(text.to_string()));
        }

        let Some(tier) = tier else {
            let inner = text
                .strip_prefix(OPEN_PARENTHESIS)
                .and_then(|rest| rest.strip_suffix(CLOSE_PARENTHESIS))
                .ok_or_else(|| ExpressionError::MalformedExpression(text.to_string()))?;
            return Self::build_at(inner, Some(Operand::TIERS[0]));
        };

        match split_at_tier(text, tier) {
            None => Self::build_at(text, tier.next_tier()),
            Some(parts) => {
                let children = parts
                    .into_iter()
                    .map(|part| Self::build_at(part, tier.next_tier()))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ExpressionNode::Internal {
                    text: text.to_string(),
                    operand: tier,
                    children,
                })
            }
        }
    }
}

fn contains_operator(text: &str) -> bool {
    text.chars().any(|c| Operand::from_symbol(c).is_some())
}

/// Splits `text` at every depth-zero occurrence of the tier's symbol.
///
/// The remainder after the last split is always kept, and a symbol in the
/// final position never splits. Returns `None` when nothing was split, so
/// the caller moves on to the next tier.
fn split_at_tier(text: &str, tier: Operand) -> Option<Vec<&str>> {
    let symbol = tier.symbol();
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (index, c) in text.char_indices() {
        match c {
            OPEN_PARENTHESIS => depth += 1,
            CLOSE_PARENTHESIS => depth -= 1,
            _ => {}
        }

        let next = index + c.len_utf8();
        if next == text.len() {
            parts.push(&text[start..]);
        } else if c == symbol && depth == 0 {
            parts.push(&text[start..index]);
            start = next;
        }
    }

    (parts.len() > 1).then_some(parts)
}
