//! # grammar.rs
//!
//! Structural validation of a resolved token sequence.
//!
//! The check runs over the whole statement before any tree is built, so the
//! tree builder only ever sees sequences in which parentheses balance, every
//! operator has operands on the sides it needs, and no two values are
//! juxtaposed. Implicit multiplication (`2z`, `(z)(z)`, `(z)2`) is not part of
//! the language and is rejected here.

use crate::error::{ParseError, ParseErrorKind};
use crate::token::{Token, TokenGroup, TokenKind};

fn error_at(kind: ParseErrorKind, token: &Token) -> ParseError {
    ParseError::new(kind, token.span().clone())
}

/// Validates `tokens`, returning the first violated rule.
///
/// `tokens` must already be disambiguated and must not be empty.
pub fn check(tokens: &[Token]) -> Result<(), ParseError> {
    let (first, rest) = match tokens.split_first() {
        Some(split) => split,
        None => return Err(ParseError::new(ParseErrorKind::EmptyStatement, 0..0)),
    };

    let mut balance: usize = 0;
    match first.kind() {
        TokenKind::RParen => return Err(error_at(ParseErrorKind::LeadingRightParen, first)),
        TokenKind::LParen => balance += 1,
        TokenKind::Neg => (),
        _ if first.group() == TokenGroup::Operator => {
            return Err(error_at(ParseErrorKind::LeadingBinaryOperator, first));
        },
        _ => (),
    }

    let mut prev = first;
    for cur in rest {
        match cur.group() {
            TokenGroup::Parenthesis => {
                if cur.kind() == TokenKind::LParen {
                    if prev.group() == TokenGroup::Value {
                        return Err(error_at(ParseErrorKind::LeftParenFollowsNumber, cur));
                    }
                    if prev.kind() == TokenKind::RParen {
                        return Err(error_at(ParseErrorKind::LeftParenFollowsRightParen, cur));
                    }
                    balance += 1;
                } else {
                    if prev.group() == TokenGroup::Operator {
                        return Err(error_at(ParseErrorKind::OperatorBeforeRightParen, cur));
                    }
                    if balance == 0 {
                        return Err(error_at(ParseErrorKind::ParenthesesOutOfBalance, cur));
                    }
                    balance -= 1;
                }
            },
            TokenGroup::Operator => {
                if prev.group() == TokenGroup::Operator {
                    return Err(error_at(ParseErrorKind::OperatorFollowsOperator, cur));
                }
                if prev.kind() == TokenKind::LParen && cur.kind() != TokenKind::Neg {
                    return Err(error_at(ParseErrorKind::BinaryOperatorFollowsLeftParen, cur));
                }
            },
            TokenGroup::Value => {
                if prev.kind() == TokenKind::RParen {
                    return Err(error_at(ParseErrorKind::NumberFollowsRightParen, cur));
                }
                if matches!(prev.group(), TokenGroup::Value | TokenGroup::Name) {
                    return Err(error_at(ParseErrorKind::NumberFollowsValue, cur));
                }
            },
            TokenGroup::Name => {
                if prev.kind() == TokenKind::RParen {
                    return Err(error_at(ParseErrorKind::NameFollowsRightParen, cur));
                }
                if matches!(prev.group(), TokenGroup::Value | TokenGroup::Name) {
                    return Err(error_at(ParseErrorKind::NameFollowsValue, cur));
                }
            },
        }
        prev = cur;
    }

    if prev.group() == TokenGroup::Operator {
        return Err(error_at(ParseErrorKind::TrailingOperator, prev));
    }
    if balance != 0 {
        let end = prev.span().end;
        return Err(ParseError::new(ParseErrorKind::ParenthesesOutOfBalance, end..end));
    }

    Ok(())
}
