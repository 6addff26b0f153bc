//! A single-pass, stack-based parser which accepts infix, prefix and postfix
//! expressions without being told which notation is in use.
//!
//! The trick is that a `)` always closes exactly one binary application. The
//! three notations only differ in *when* the operator token arrives relative to
//! its two operands, but by the time the `)` is scanned both operands are on
//! the node stack and the one pending operator is on the operator stack no
//! matter the order, so the scan never needs to inspect position at all.

use log::trace;
use num_traits::FromPrimitive;

use crate::error::MalformedExpressionError;
use crate::node::ExpressionNode;
use crate::registry::{BinaryOp, OperatorRegistry};

/// Parses one expression string into an [`ExpressionNode`] tree, using
/// `registry` to recognise operator tokens.
pub fn parse<N: FromPrimitive>(
    expression: &str,
    registry: &OperatorRegistry<N>,
) -> Result<ExpressionNode<N>, MalformedExpressionError> {
    Parser::new(registry).parse(expression)
}

/// The transient state of one parse: a node stack, an operator stack and an
/// open-parenthesis counter. Discarded when [`parse`](Parser::parse) returns.
pub struct Parser<'a, N> {
    registry: &'a OperatorRegistry<N>,
    node_stack: Vec<ExpressionNode<N>>,
    operator_stack: Vec<(char, BinaryOp<N>)>,
    open_parens: usize,
}

impl<'a, N: FromPrimitive> Parser<'a, N> {
    pub fn new(registry: &'a OperatorRegistry<N>) -> Self {
        Parser {
            registry,
            node_stack: Vec::new(),
            operator_stack: Vec::new(),
            open_parens: 0,
        }
    }

    /// Scans `expression` left to right and returns the root of the resulting
    /// tree, or the error for the first structural violation encountered. No
    /// partial tree is ever returned.
    pub fn parse(
        mut self,
        expression: &str,
    ) -> Result<ExpressionNode<N>, MalformedExpressionError> {
        for character in expression.chars() {
            match character {
                c if c.is_whitespace() => continue,

                // Parentheses exist purely to bound sub-expressions for the
                // `)` handler; `(` itself only needs bookkeeping.
                '(' => self.open_parens += 1,
                ')' => self.close_expression()?,

                c => {
                    if let Some(apply) = self.registry.lookup(c) {
                        trace!("operator {:?}", c);
                        self.operator_stack.push((c, apply));
                    } else if let Some(value) = c.to_digit(10).and_then(N::from_u32) {
                        trace!("operand {:?}", c);
                        self.node_stack.push(ExpressionNode::Operand(value));
                    } else {
                        return Err(MalformedExpressionError::UnexpectedCharacter(c));
                    }
                }
            }
        }

        self.finish()
    }

    /// Handles a `)`: pops the two pending operands (right first) and the one
    /// pending operator, and pushes the combined operator node.
    fn close_expression(&mut self) -> Result<(), MalformedExpressionError> {
        if self.open_parens == 0 {
            return Err(MalformedExpressionError::UnmatchedCloseParen);
        }
        self.open_parens -= 1;

        let right = self
            .node_stack
            .pop()
            .ok_or(MalformedExpressionError::MissingOperand)?;
        let left = self
            .node_stack
            .pop()
            .ok_or(MalformedExpressionError::MissingOperand)?;
        let (token, apply) = self
            .operator_stack
            .pop()
            .ok_or(MalformedExpressionError::MissingOperator)?;

        trace!("reduced sub-expression under {:?}", token);
        self.node_stack.push(ExpressionNode::Operator {
            token,
            apply,
            left: Box::new(left),
            right: Box::new(right),
        });
        Ok(())
    }

    /// End-of-scan checks: everything opened was closed, every operator was
    /// consumed, and exactly one node remains: the root.
    fn finish(mut self) -> Result<ExpressionNode<N>, MalformedExpressionError> {
        if self.open_parens > 0 {
            return Err(MalformedExpressionError::UnmatchedOpenParen);
        }
        if let Some((token, _)) = self.operator_stack.pop() {
            return Err(MalformedExpressionError::DanglingOperator(token));
        }

        let root = self
            .node_stack
            .pop()
            .ok_or(MalformedExpressionError::EmptyExpression)?;
        if !self.node_stack.is_empty() {
            return Err(MalformedExpressionError::TrailingOperand);
        }
        Ok(root)
    }
}
