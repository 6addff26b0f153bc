//! The operator registry: a fixed mapping from operator token to binary numeric
//! function, shared immutably by the parser and anything else that needs to ask
//! "is this character an operator?".
//!
//! The registry is the only extension point of the crate. Adding an operator is
//! a pure data insertion; the parser and the node types never change.

use std::collections::BTreeMap;

use num_traits::Float;

/// A pure binary numeric function, the semantics of one operator token.
pub type BinaryOp<N> = fn(N, N) -> N;

/// Maps one-`char` operator tokens to their [`BinaryOp`]s.
///
/// Built once at startup (usually via [`OperatorRegistry::standard`]) and then
/// only read. Tokens need not be ASCII; the standard division token is `÷`.
#[derive(Clone, Debug)]
pub struct OperatorRegistry<N> {
    ops: BTreeMap<char, BinaryOp<N>>,
}

impl<N: Float> Default for OperatorRegistry<N> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<N> OperatorRegistry<N> {
    /// An empty registry which recognises no operators at all.
    pub fn new() -> Self {
        OperatorRegistry { ops: BTreeMap::new() }
    }

    /// Registers `op` under `token`, replacing any previous function for the
    /// same token.
    pub fn register(&mut self, token: char, op: BinaryOp<N>) {
        self.ops.insert(token, op);
    }

    /// The function registered for `token`, if there is one.
    pub fn lookup(&self, token: char) -> Option<BinaryOp<N>> {
        self.ops.get(&token).copied()
    }

    /// Whether `token` names a registered operator. The parser uses this to
    /// distinguish operator tokens from operand tokens.
    pub fn is_operator(&self, token: char) -> bool {
        self.ops.contains_key(&token)
    }

    /// All registered tokens, in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = char> + '_ {
        self.ops.keys().copied()
    }
}

impl<N: Float> OperatorRegistry<N> {
    /// The four baseline operators: `x` multiply, `÷` divide, `+` add,
    /// `-` subtract.
    ///
    /// Division is ordinary float division, so `9 ÷ 0` evaluates to an
    /// infinity rather than failing.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register('x', |left, right| left * right);
        registry.register('÷', |left, right| left / right);
        registry.register('+', |left, right| left + right);
        registry.register('-', |left, right| left - right);
        registry
    }
}
