use std::fmt;

use serde::{Deserialize, Serialize};

/// Arithmetic operators, each bound to a one-character symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    #[serde(rename = "+")]
    Addition,
    #[serde(rename = "-")]
    Subtraction,
    #[serde(rename = "*")]
    Multiplication,
    #[serde(rename = "/")]
    Division,
}

impl Operand {
    pub const ALL: [Operand; 4] = [
        Operand::Addition,
        Operand::Subtraction,
        Operand::Multiplication,
        Operand::Division,
    ];

    /// Precedence tiers used by the tree builder, loosest first.
    ///
    /// Subtraction binds looser than addition, and multiplication looser than
    /// division. This is not standard precedence: `8-2+1` reads as `8-(2+1)`.
    pub const TIERS: [Operand; 4] = [
        Operand::Subtraction,
        Operand::Addition,
        Operand::Multiplication,
        Operand::Division,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operand::Addition => '+',
            Operand::Subtraction => '-',
            Operand::Multiplication => '*',
            Operand::Division => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operand> {
        Operand::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// The tier tried after this one, `None` past division.
    pub fn next_tier(self) -> Option<Operand> {
        match self {
            Operand::Subtraction => Some(Operand::Addition),
            Operand::Addition => Some(Operand::Multiplication),
            Operand::Multiplication => Some(Operand::Division),
            Operand::Division => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A precedence tree over the text of a flat expression.
///
/// `Internal { operand, children: [c0, c1, .., ck] }` means
/// `c0 op c1 op .. op ck`, folded strictly left to right.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    Leaf(String),
    Internal {
        text: String,
        operand: Operand,
        children: Vec<ExpressionNode>,
    },
}

impl ExpressionNode {
    /// The source text this node was built from (outer parentheses stripped).
    pub fn text(&self) -> &str {
        match self {
            ExpressionNode::Leaf(text) => text,
            ExpressionNode::Internal { text, .. } => text,
        }
    }

    pub fn operand(&self) -> Option<Operand> {
        match self {
            ExpressionNode::Leaf(_) => None,
            ExpressionNode::Internal { operand, .. } => Some(*operand),
        }
    }

    pub fn children(&self) -> &[ExpressionNode] {
        match self {
            ExpressionNode::Leaf(_) => &[],
            ExpressionNode::Internal { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ExpressionNode::Leaf(_))
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExpressionNode::Leaf(text) => write!(f, "{text}"),
            ExpressionNode::Internal {
                operand, children, ..
            } => {
                write!(f, "({operand}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
