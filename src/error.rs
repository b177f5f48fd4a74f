//! # error.rs
//!
//! Error taxonomy of the crate.
//!
//! - [`ParseError`]: the expression text was rejected. Expected and user-facing.
//! - [`EvalError`]: a name could not be resolved against the registries, or a
//!   reserved name was about to be rebound.
//!
//! Mathematically undefined results (division by zero and friends) are not
//! errors at all, see [`crate::cmath`].

use std::ops::Range;

/// Convenience result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The specific rule an expression violated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("empty statement")]
    EmptyStatement,

    #[error("unsupported character {0}")]
    UnsupportedCharacter(char),

    #[error("multiple periods in a number")]
    MultiplePeriods,

    #[error("period after exponent")]
    PeriodAfterExponent,

    #[error("multiple exponent in a number")]
    MultipleExponents,

    #[error("exponent follows period")]
    ExponentFollowsPeriod,

    #[error("multiple exponent signs in a number")]
    MultipleExponentSigns,

    #[error("sign does not follow exponent")]
    SignDoesNotFollowExponent,

    #[error("number ends in {0}")]
    NumberEndsIn(char),

    /// A literal passed the shape check but `f64` parsing still failed. The
    /// shape check admits only forms `f64::from_str` accepts, so this guards
    /// the conversion rather than any known input.
    #[error("can't parse value {0}")]
    InvalidValue(String),

    #[error("statement can't begin with ')'")]
    LeadingRightParen,

    #[error("statement can't begin with a binary operator")]
    LeadingBinaryOperator,

    #[error("left parenthesis can't follow a number")]
    LeftParenFollowsNumber,

    #[error("left parenthesis can't follow ')'")]
    LeftParenFollowsRightParen,

    #[error("parentheses out of balance")]
    ParenthesesOutOfBalance,

    #[error("operator can't follow an operator")]
    OperatorFollowsOperator,

    #[error("binary operator can't follow '('")]
    BinaryOperatorFollowsLeftParen,

    #[error("number can't follow ')'")]
    NumberFollowsRightParen,

    #[error("number can't follow a number or a name")]
    NumberFollowsValue,

    #[error("name can't follow ')'")]
    NameFollowsRightParen,

    #[error("name can't follow a number or a name")]
    NameFollowsValue,

    #[error("statement can't end in an operator")]
    TrailingOperator,

    #[error("')' can't follow an operator")]
    OperatorBeforeRightParen,

    #[error("empty parentheses are not allowed")]
    EmptyParentheses,

    /// Only reachable for token sequences that skipped the grammar check.
    #[error("operator {0} is missing an operand")]
    MissingOperand(String),

    #[error("expression is nested deeper than {0} levels")]
    TooDeep(usize),

    #[error("unexpected token {0}")]
    UnexpectedToken(String),
}

/// A rejected expression: which rule was broken and where.
///
/// `span` is a byte range into the input text. For whole-statement failures
/// (empty input, unbalanced parentheses at the end) it covers the end of the
/// input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {start}..{end}", start = .span.start, end = .span.end)]
pub struct ParseError {
    kind: ParseErrorKind,
    span: Range<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// The violated rule.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Byte range of the offending text.
    pub fn span(&self) -> &Range<usize> {
        &self.span
    }
}

/// Name resolution failures against the variable or function registry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("variable table contains no variable {0}")]
    UnknownVariable(String),

    #[error("function table contains no function {0}")]
    UnknownFunction(String),

    #[error("variable name {0} is reserved")]
    ReservedVariable(String),
}

/// Top-level error returned by the crate's convenience APIs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ParseErrorKind::NumberEndsIn('e'), 0..3);
        assert_eq!(err.to_string(), "number ends in e at 0..3");
        assert_eq!(err.kind(), &ParseErrorKind::NumberEndsIn('e'));
        assert_eq!(err.span(), &(0..3));
    }

    #[test]
    fn test_too_deep_display() {
        let err = ParseError::new(ParseErrorKind::TooDeep(512), 0..9);
        assert_eq!(err.to_string(), "expression is nested deeper than 512 levels at 0..9");
    }

    #[test]
    fn test_eval_error_display() {
        assert_eq!(
            EvalError::ReservedVariable("i".into()).to_string(),
            "variable name i is reserved"
        );
        assert_eq!(
            EvalError::UnknownFunction("foo".into()).to_string(),
            "function table contains no function foo"
        );
    }

    #[test]
    fn test_error_from() {
        let err: Error = ParseError::new(ParseErrorKind::EmptyStatement, 0..0).into();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(err.to_string(), "parse error: empty statement at 0..0");

        let err: Error = EvalError::UnknownVariable("x".into()).into();
        assert!(matches!(err, Error::Eval(EvalError::UnknownVariable(ref name)) if name == "x"));
    }
}
