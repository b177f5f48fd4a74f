//! # buildin.rs
//!
//! Built-in complex functions.
//!
//! Every built-in takes exactly one complex argument and returns a complex
//! value. Real-valued results (`abs`, `re`, `im`, `arg`) come back with a zero
//! imaginary part.

use crate::cmath;

use num_complex::Complex;

/// Error type for parsing built-in function names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFuncKindError;

macro_rules! define_functions {
    ( $( $name:ident => $imp:expr), + $(,)? ) => {
        /// Enumeration of built-in functions.
        #[allow(non_camel_case_types)] // To use ident as string to compare them.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum FuncKind {
            $( $name ), +
        }

        impl FuncKind {
            /// Returns a list of available function names.
            pub fn available_names() -> &'static [&'static str]
            {
                &[ $( stringify!($name) ),+ ]
            }

            /// Returns every built-in, in declaration order.
            pub fn all() -> &'static [FuncKind]
            {
                &[ $( Self::$name ),+ ]
            }

            /// Returns the name the function is called by.
            pub fn name(&self) -> &'static str
            {
                match self {
                    $( Self::$name => stringify!($name), )+
                }
            }

            /// Applies the function to its argument.
            pub fn apply(&self, z: Complex<f64>) -> Complex<f64>
            {
                match self {
                    $( Self::$name => $imp(z), )+
                }
            }
        }

        impl std::str::FromStr for FuncKind {
            type Err = ParseFuncKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err>
            {
                match s {
                    $(
                        stringify!($name) => Ok(Self::$name),
                    )+
                    _ => Err(ParseFuncKindError),
                }
            }
        }
    };
}

define_functions!(
    abs     => |z: Complex<f64>| Complex::new(cmath::abs(z), 0.0),
    re      => |z: Complex<f64>| Complex::new(z.re, 0.0),
    im      => |z: Complex<f64>| Complex::new(z.im, 0.0),
    arg     => |z: Complex<f64>| Complex::new(cmath::arg(z), 0.0),
    conj    => cmath::conj,
    exp     => cmath::exp,
    log     => cmath::log,
    sqrt    => cmath::sqrt,
    sin     => cmath::sin,
    cos     => cmath::cos,
    tan     => cmath::tan,
);

impl std::fmt::Display for FuncKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
