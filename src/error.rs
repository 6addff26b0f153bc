use thiserror::Error;

/// The structural ways in which a token stream can fail to describe a
/// well-formed expression.
///
/// Numeric edge cases are deliberately absent: division by zero and friends
/// follow IEEE float semantics (`9 ÷ 0` is an infinity, `0 ÷ 0` is NaN) and
/// never produce an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedExpressionError {
    /// A non-whitespace character which is neither a digit, a registered
    /// operator token nor a parenthesis.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// A `)` appeared with no `(` still open.
    #[error("closing parenthesis without a matching opening parenthesis")]
    UnmatchedCloseParen,

    /// At least one `(` was never closed.
    #[error("opening parenthesis was never closed")]
    UnmatchedOpenParen,

    /// A `)` appeared with fewer than two pending operands to combine.
    #[error("sub-expression closed with fewer than two operands")]
    MissingOperand,

    /// A `)` appeared with no pending operator to combine its operands with.
    #[error("sub-expression closed without an operator")]
    MissingOperator,

    /// An operator was scanned but no `)` ever consumed it.
    #[error("operator {0:?} is not part of any sub-expression")]
    DanglingOperator(char),

    /// More than one node remained once the scan finished, e.g. `"1 2"`.
    #[error("expression does not reduce to a single tree")]
    TrailingOperand,

    /// The input contained no tokens at all.
    #[error("expression is empty")]
    EmptyExpression,
}
