//! # token.rs
//!
//! Classified lexemes produced by the lexer.
//!
//! A token belongs to one of four groups. Minus signs and bare names start out
//! ambiguous (`UnknownMinus`, `UnknownName`) and are resolved once the whole
//! token sequence is known, see [`crate::lexer`].

use std::ops::Range;

/// Coarse token class used by the grammar checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenGroup {
    Name,
    Operator,
    Parenthesis,
    Value,
}

/// Fine token class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Variable reference.
    Variable,
    /// Function name, i.e. a name immediately followed by `(`.
    Function,
    /// Real numeric literal.
    Value(f64),
    /// Unary `-`.
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    LParen,
    RParen,
    /// `-` before disambiguation.
    UnknownMinus,
    /// Name before disambiguation.
    UnknownName,
}

impl TokenKind {
    /// Returns the group the kind belongs to.
    pub fn group(&self) -> TokenGroup {
        match self {
            Self::Variable | Self::Function | Self::UnknownName => TokenGroup::Name,
            Self::Value(_) => TokenGroup::Value,
            Self::Neg | Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow
            | Self::UnknownMinus => TokenGroup::Operator,
            Self::LParen | Self::RParen => TokenGroup::Parenthesis,
        }
    }
}

/// A single token with the text it was read from and its byte span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.to_string(),
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn group(&self) -> TokenGroup {
        self.kind.group()
    }

    /// Replaces an ambiguous kind with a resolved one.
    pub(crate) fn resolve(&mut self, kind: TokenKind) {
        self.kind = kind;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> &Range<usize> {
        &self.span
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{text}' at {start}..{end}", text=self.text, start=self.span.start, end=self.span.end)
    }
}

/// Type alias for a token sequence.
pub type Tokens = Vec<Token>;
