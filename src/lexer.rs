//! lexer.rs
//!
//! This module turns an expression string into a sequence of [`Token`]s.
//!
//! Lexical rules:
//! - a name starts with an ASCII letter or `_` and continues with ASCII
//!   letters, digits or `_`;
//! - a number has the shape `digits ['.' digits] [('e'|'E') ['+'|'-'] digits]`
//!   and must start with a digit;
//! - `(`, `)`, `+`, `-`, `*`, `/`, `^` are single-character tokens;
//! - the plain space character is skipped, anything else is rejected.
//!
//! After scanning, two passes run over the complete sequence: minus signs
//! become negation or subtraction, and names become function calls or
//! variable references, depending on their neighbours.

use crate::error::{ParseError, ParseErrorKind};
use crate::token::{Token, TokenKind, Tokens};

type CharIter<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// Parses an identifier starting at `start_idx`.
///
/// Returns the end index of the identifier.
fn parse_ident(start_idx: usize, chars: &mut CharIter) -> usize
{
    let mut end = start_idx + 1;
    while let Some(&(idx, ch)) = chars.peek() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            chars.next();
            end = idx + ch.len_utf8();
        } else {
            break;
        }
    }

    end
}

/// Parses a numeric literal starting at `start_idx`, which must be a digit.
///
/// The scanner accepts characters greedily and reports malformed shapes
/// (second period, second exponent, misplaced sign) as soon as they are seen.
/// A `+` or `-` before any exponent marker terminates the number.
///
/// Returns the end index of the literal.
fn parse_number(start_idx: usize, chars: &mut CharIter) -> Result<usize, ParseError>
{
    let mut end = start_idx + 1;
    let mut last = '0';
    let mut seen_period = false;
    let mut seen_exp = false;
    let mut seen_exp_sign = false;

    while let Some(&(idx, ch)) = chars.peek() {
        let fail = |kind| Err(ParseError::new(kind, start_idx..idx + ch.len_utf8()));
        match ch {
            '0'..='9' => (),
            '.' => {
                if seen_period {
                    return fail(ParseErrorKind::MultiplePeriods);
                }
                if seen_exp {
                    return fail(ParseErrorKind::PeriodAfterExponent);
                }
                seen_period = true;
            },
            'e' | 'E' => {
                if seen_exp {
                    return fail(ParseErrorKind::MultipleExponents);
                }
                if last == '.' {
                    return fail(ParseErrorKind::ExponentFollowsPeriod);
                }
                seen_exp = true;
            },
            '+' | '-' if seen_exp => {
                if seen_exp_sign {
                    return fail(ParseErrorKind::MultipleExponentSigns);
                }
                if last != 'e' && last != 'E' {
                    return fail(ParseErrorKind::SignDoesNotFollowExponent);
                }
                seen_exp_sign = true;
            },
            _ => break,
        }
        chars.next();
        last = ch;
        end = idx + ch.len_utf8();
    }

    if matches!(last, '.' | 'e' | 'E' | '+' | '-') {
        return Err(ParseError::new(ParseErrorKind::NumberEndsIn(last), start_idx..end));
    }

    Ok(end)
}

/// Reads the raw token sequence, leaving minus signs and names unresolved.
fn scan(input: &str) -> Result<Tokens, ParseError> {
    let mut tokens = Tokens::default();
    let mut chars = input.char_indices().peekable();

    while let Some((start_idx, ch)) = chars.next() {
        if ch == ' ' {
            continue;
        }

        let (kind, end_idx) = match ch {
            'a'..='z' | 'A'..='Z' | '_' => (TokenKind::UnknownName, parse_ident(start_idx, &mut chars)),
            '0'..='9' => {
                let end = parse_number(start_idx, &mut chars)?;
                let text = &input[start_idx..end];
                let value = text.parse::<f64>().map_err(|_| {
                    ParseError::new(ParseErrorKind::InvalidValue(text.to_string()), start_idx..end)
                })?;
                (TokenKind::Value(value), end)
            },
            '(' => (TokenKind::LParen, start_idx + 1),
            ')' => (TokenKind::RParen, start_idx + 1),
            '+' => (TokenKind::Add, start_idx + 1),
            '-' => (TokenKind::UnknownMinus, start_idx + 1),
            '*' => (TokenKind::Mul, start_idx + 1),
            '/' => (TokenKind::Div, start_idx + 1),
            '^' => (TokenKind::Pow, start_idx + 1),
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::UnsupportedCharacter(ch),
                    start_idx..start_idx + ch.len_utf8(),
                ));
            },
        };

        tokens.push(Token::new(kind, &input[start_idx..end_idx], start_idx..end_idx));
    }

    Ok(tokens)
}

/// A minus is a negation at the start of the statement or right after `(`,
/// and a subtraction everywhere else.
fn resolve_minuses(tokens: &mut Tokens) {
    for i in 0..tokens.len() {
        if tokens[i].kind() != TokenKind::UnknownMinus {
            continue;
        }
        let kind = if i == 0 || tokens[i - 1].kind() == TokenKind::LParen {
            TokenKind::Neg
        } else {
            TokenKind::Sub
        };
        tracing::trace!(token = %tokens[i], ?kind, "resolved minus");
        tokens[i].resolve(kind);
    }
}

/// A name is a function call when the next token is `(`, otherwise a
/// variable reference.
fn resolve_names(tokens: &mut Tokens) {
    for i in 0..tokens.len() {
        if tokens[i].kind() != TokenKind::UnknownName {
            continue;
        }
        let kind = match tokens.get(i + 1) {
            Some(next) if next.kind() == TokenKind::LParen => TokenKind::Function,
            _ => TokenKind::Variable,
        };
        tracing::trace!(token = %tokens[i], ?kind, "resolved name");
        tokens[i].resolve(kind);
    }
}

/// Splits the input string into a sequence of resolved tokens.
///
/// The returned sequence contains no `UnknownMinus` or `UnknownName` tokens.
/// It may be empty if the input is empty or only contains spaces.
pub fn from(input: &str) -> Result<Tokens, ParseError> {
    let mut tokens = scan(input)?;
    resolve_minuses(&mut tokens);
    resolve_names(&mut tokens);
    Ok(tokens)
}
