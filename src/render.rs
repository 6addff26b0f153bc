//! Rendering an expression tree back into a fully-parenthesised string, in any
//! of the three notations.
//!
//! Each notation is an independent recursive traversal over the same immutable
//! tree, so a caller can request any notation from a tree built from any other
//! notation, as many times as it likes.

use std::fmt;

use crate::node::ExpressionNode;

/// Where an operator token sits relative to its two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// `(left op right)`
    Infix,
    /// `(op left right)`
    Prefix,
    /// `(left right op)`
    Postfix,
}

impl<N: fmt::Display> ExpressionNode<N> {
    /// Renders this tree in the given notation.
    ///
    /// Every operator application is parenthesised; an operand renders as the
    /// decimal form of its value regardless of notation.
    pub fn render(&self, notation: Notation) -> String {
        match self {
            ExpressionNode::Operand(value) => value.to_string(),
            ExpressionNode::Operator { token, left, right, .. } => {
                let left = left.render(notation);
                let right = right.render(notation);
                match notation {
                    Notation::Infix => format!("({} {} {})", left, token, right),
                    Notation::Prefix => format!("({} {} {})", token, left, right),
                    Notation::Postfix => format!("({} {} {})", left, right, token),
                }
            }
        }
    }
}

impl<N: fmt::Display> fmt::Display for ExpressionNode<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(Notation::Infix))
    }
}
