//! Build expression trees from fully-parenthesised arithmetic written in infix,
//! prefix or postfix notation, evaluate them, and print them back in any of the
//! three notations.

pub mod error;
pub mod registry;
pub mod node;
pub mod render;
pub mod parser;
pub mod flatten;

#[cfg(test)]
mod tests;

pub use crate::{
    error::MalformedExpressionError,
    registry::{BinaryOp, OperatorRegistry},
    node::ExpressionNode,
    render::Notation,
    parser::Parser,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
