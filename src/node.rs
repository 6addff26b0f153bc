//! The expression tree: a binary tree of operand leaves and operator nodes.
//!
//! Which kind a node is gets decided exactly once, at construction. An operator
//! node carries the [`BinaryOp`] resolved from the registry at parse time, so an
//! operator node whose token is absent from the registry cannot exist, and
//! evaluation never has to probe the registry again.

use crate::registry::BinaryOp;

/// One node of an expression tree. The tree exclusively owns its children and
/// is immutable once built, so the same tree can be evaluated and rendered any
/// number of times.
#[derive(Clone, Debug)]
pub enum ExpressionNode<N> {
    /// A leaf holding a numeric value.
    Operand(N),

    /// An operator applied to two fully-formed subtrees.
    Operator {
        token: char,
        apply: BinaryOp<N>,
        left: Box<ExpressionNode<N>>,
        right: Box<ExpressionNode<N>>,
    },
}

impl<N: Copy> ExpressionNode<N> {
    /// Evaluates this tree into a single number.
    ///
    /// Infallible: a tree is well-formed by construction, and the operator
    /// functions are total over floats, with division by zero producing an
    /// infinity rather than an error.
    pub fn evaluate(&self) -> N {
        match self {
            ExpressionNode::Operand(value) => *value,
            ExpressionNode::Operator { apply, left, right, .. } =>
                apply(left.evaluate(), right.evaluate()),
        }
    }
}

impl<N> ExpressionNode<N> {
    /// Returns true if this node is an operand leaf.
    pub fn is_operand(&self) -> bool {
        matches!(self, ExpressionNode::Operand(_))
    }

    /// Returns true if this node is an operator application.
    pub fn is_operator(&self) -> bool {
        matches!(self, ExpressionNode::Operator { .. })
    }
}

// The token alone identifies an operator, so equality ignores the resolved
// function pointer.
impl<N: PartialEq> PartialEq for ExpressionNode<N> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ExpressionNode::Operand(a), ExpressionNode::Operand(b)) => a == b,
            (
                ExpressionNode::Operator { token: a, left: al, right: ar, .. },
                ExpressionNode::Operator { token: b, left: bl, right: br, .. },
            ) => a == b && al == bl && ar == br,
            _ => false,
        }
    }
}
