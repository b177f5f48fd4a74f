//! # parser.rs
//!
//! This module turns expression text into an [`AstNode`] tree.
//!
//! Parsing runs in three stages:
//! 1. [`crate::lexer`] splits the text into tokens and resolves ambiguous
//!    minus signs and names.
//! 2. [`crate::grammar`] validates the whole token sequence.
//! 3. The tree builder below recursively splits the token range at its root
//!    operator.
//!
//! # Notes
//! - The root of a range is the rightmost operator at the shallowest
//!   parenthesis depth, except that an `+` further left at the same depth
//!   takes over from any other operator. There is no other precedence: `2*3^2`
//!   is `(2*3)^2` and `-z^2` is `(-z)^2`.
//! - A function call only becomes the root when nothing else sits at its depth,
//!   so `2*sin(z)` splits at `*`.
//! - Trees deeper than [`MAX_DEPTH`] are rejected with
//!   [`ParseErrorKind::TooDeep`].
//! - Names are not resolved here. Unknown variables and functions are reported
//!   when the tree is bound to an [`crate::Evaluator`].

use crate::astnode::AstNode;
use crate::error::{ParseError, ParseErrorKind};
use crate::grammar;
use crate::lexer;
use crate::operators::{BinaryOperatorKind, UnaryOperatorKind};
use crate::token::{Token, TokenGroup, TokenKind};
use num_complex::Complex;
use std::ops::Range;

/// Deepest tree the builder produces. A flat sum of `n` terms is `n` levels
/// deep, so this also bounds the length of `+`/`-` chains.
pub const MAX_DEPTH: usize = 512;

/// Parses an expression into an evaluation tree.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found. No partial
/// tree is ever returned.
///
/// # Examples
///
/// ```
/// use cplot::parser::parse;
///
/// let tree = parse("sin(z) + 1").unwrap();
/// assert_eq!(tree.to_string(), "(sin(z)+1)");
///
/// assert!(parse("1 +").is_err());
/// ```
#[tracing::instrument(level = "debug")]
pub fn parse(input: &str) -> Result<AstNode, ParseError> {
    let tokens = lexer::from(input)?;
    tracing::debug!(count = tokens.len(), "tokenized");

    grammar::check(&tokens)?;

    let root = build(&tokens, 0, tokens.len() - 1, 1)?;
    tracing::debug!(%root, "parsed");
    Ok(root)
}

/// Parses optional text; absent text is an empty statement.
pub fn parse_opt(input: Option<&str>) -> Result<AstNode, ParseError> {
    match input {
        Some(text) => parse(text),
        None => Err(ParseError::new(ParseErrorKind::EmptyStatement, 0..0)),
    }
}

fn range_span(tokens: &[Token], start: usize, end: usize) -> Range<usize> {
    tokens[start].span().start..tokens[end].span().end
}

/// Finds the root token of `tokens[start..=end]`.
///
/// Scans right to left. `depth` rises on `)` and falls on `(`, so the lowest
/// value seen marks the shallowest nesting level. Returns `None` when the
/// range has no operator or function token.
fn find_next_operator(tokens: &[Token], start: usize, end: usize) -> Option<usize> {
    let mut depth: isize = 0;
    let mut min_depth = isize::MAX;
    let mut found: Option<usize> = None;

    for i in (start..=end).rev() {
        let kind = tokens[i].kind();
        match kind {
            TokenKind::LParen => depth -= 1,
            TokenKind::RParen => depth += 1,
            TokenKind::Function => {
                if depth < min_depth {
                    min_depth = depth;
                    found = Some(i);
                }
            },
            _ if tokens[i].group() == TokenGroup::Operator => {
                if depth < min_depth {
                    min_depth = depth;
                    found = Some(i);
                } else if depth == min_depth {
                    let current = found.map(|j| tokens[j].kind());
                    match current {
                        Some(TokenKind::Function) => found = Some(i),
                        Some(TokenKind::Add) => (),
                        Some(_) if kind == TokenKind::Add => found = Some(i),
                        _ => (),
                    }
                }
            },
            _ => (),
        }
    }

    found
}

/// Builds the leaf of an operator-free range.
fn build_leaf(tokens: &[Token], start: usize, end: usize) -> Result<AstNode, ParseError> {
    let mut inner = tokens[start..=end]
        .iter()
        .filter(|token| token.group() != TokenGroup::Parenthesis);

    let token = match inner.next() {
        Some(token) => token,
        None => {
            return Err(ParseError::new(
                ParseErrorKind::EmptyParentheses,
                range_span(tokens, start, end),
            ));
        },
    };
    if let Some(extra) = inner.next() {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedToken(extra.text().to_string()),
            extra.span().clone(),
        ));
    }

    match token.kind() {
        TokenKind::Variable => Ok(AstNode::Variable(token.text().to_string())),
        TokenKind::Value(val) => Ok(AstNode::Value(Complex::new(val, 0.0))),
        _ => Err(ParseError::new(
            ParseErrorKind::UnexpectedToken(token.text().to_string()),
            token.span().clone(),
        )),
    }
}

/// Builds the operand on one side of `tokens[op]`, failing if that side is empty.
///
/// The grammar check leaves no operator without its operands, so the failure
/// branch only guards unchecked token sequences.
fn build_operand(
    tokens: &[Token],
    op: usize,
    range: Option<(usize, usize)>,
    depth: usize,
) -> Result<AstNode, ParseError> {
    match range {
        Some((start, end)) if start <= end => build(tokens, start, end, depth),
        _ => Err(ParseError::new(
            ParseErrorKind::MissingOperand(tokens[op].text().to_string()),
            tokens[op].span().clone(),
        )),
    }
}

/// Recursively builds the tree for `tokens[start..=end]`, whose root sits at
/// level `depth` of the whole tree.
fn build(tokens: &[Token], start: usize, end: usize, depth: usize) -> Result<AstNode, ParseError> {
    if depth > MAX_DEPTH {
        return Err(ParseError::new(
            ParseErrorKind::TooDeep(MAX_DEPTH),
            range_span(tokens, start, end),
        ));
    }

    let i = match find_next_operator(tokens, start, end) {
        Some(i) => i,
        None => return build_leaf(tokens, start, end),
    };

    let token = &tokens[i];
    let left_range = if i > start { Some((start, i - 1)) } else { None };
    let right_range = if i < end { Some((i + 1, end)) } else { None };

    if token.kind() == TokenKind::Function {
        let arg = build_operand(tokens, i, right_range, depth + 1)?;
        return Ok(AstNode::call(token.text(), arg));
    }
    if let Some(kind) = UnaryOperatorKind::from_token(token.kind()) {
        let expr = build_operand(tokens, i, right_range, depth + 1)?;
        return Ok(AstNode::unary(kind, expr));
    }
    if let Some(kind) = BinaryOperatorKind::from_token(token.kind()) {
        let left = build_operand(tokens, i, left_range, depth + 1)?;
        let right = build_operand(tokens, i, right_range, depth + 1)?;
        return Ok(AstNode::binary(kind, left, right));
    }

    Err(ParseError::new(
        ParseErrorKind::UnexpectedToken(token.text().to_string()),
        token.span().clone(),
    ))
}
