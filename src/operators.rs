//! # operators.rs
//!
//! Unary and binary operator kinds and their complex semantics.

use crate::cmath;
use crate::token::TokenKind;

use num_complex::Complex;

macro_rules! unary_operator_kinds {
    ($( $name: ident => { symbol: $symbol:expr, token: $token:pat, apply: $apply:expr } ), + $(,)? ) => {
        /// Prefix operator applied to a single operand.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum UnaryOperatorKind {
            $($name), *
        }

        impl UnaryOperatorKind {
            /// Applies the operator to a complex number.
            pub fn apply(&self, x: Complex<f64>) -> Complex<f64>
            {
                match self {
                    $( Self::$name => $apply(x), )*
                }
            }

            /// Maps a resolved token kind onto the operator, if it is one.
            pub fn from_token(kind: TokenKind) -> Option<Self>
            {
                match kind {
                    $( $token => Some(Self::$name), )*
                    _ => None,
                }
            }

            pub fn symbol(&self) -> &'static str
            {
                match self {
                    $( Self::$name => $symbol, )*
                }
            }

            pub fn names() -> &'static [&'static str]
            {
                &[ $( $symbol ),+ ]
            }
        }

        impl std::fmt::Display for UnaryOperatorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.symbol())
            }
        }
    };
}

unary_operator_kinds! {
    Neg => { symbol: "-", token: TokenKind::Neg, apply: cmath::neg },
}

macro_rules! binary_operator_kinds {
    ($( $name: ident => { symbol: $symbol:expr, token: $token:pat, apply: $apply:expr } ), + $(,)? ) => {
        /// Infix operator combining two operands.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum BinaryOperatorKind {
            $($name), *
        }

        impl BinaryOperatorKind {
            /// Applies the operator to two complex numbers.
            pub fn apply(&self, l: Complex<f64>, r: Complex<f64>) -> Complex<f64>
            {
                match self {
                    $( Self::$name => $apply(l, r), )*
                }
            }

            /// Maps a resolved token kind onto the operator, if it is one.
            pub fn from_token(kind: TokenKind) -> Option<Self>
            {
                match kind {
                    $( $token => Some(Self::$name), )*
                    _ => None,
                }
            }

            pub fn symbol(&self) -> &'static str
            {
                match self {
                    $( Self::$name => $symbol, )*
                }
            }

            pub fn names() -> &'static [&'static str]
            {
                &[ $( $symbol ),+ ]
            }
        }

        impl std::fmt::Display for BinaryOperatorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.symbol())
            }
        }
    };
}

binary_operator_kinds! {
    Add => { symbol: "+", token: TokenKind::Add, apply: cmath::add },
    Sub => { symbol: "-", token: TokenKind::Sub, apply: cmath::sub },
    Mul => { symbol: "*", token: TokenKind::Mul, apply: cmath::mul },
    Div => { symbol: "/", token: TokenKind::Div, apply: cmath::div },
    Pow => { symbol: "^", token: TokenKind::Pow, apply: cmath::pow },
}
