//! # cplot
//!
//! `cplot` is the expression core of a complex-function plotter: it parses a
//! formula in one complex variable and evaluates it at many points of the
//! complex plane.
//!
//! ## Overview
//! - Parse formulas such as `sin(z)/z + i` into an evaluation tree.
//! - Evaluate the tree at a point, or at many points in parallel.
//! - Undefined results (`1/0`, `log(0)`, `tan(pi/2)`) become `NaN` instead of
//!   failing, so a plot simply leaves those points blank.
//! - Register your own variables and single-argument functions.
//!
//! Internally, expressions are first tokenized, then validated as a whole by a
//! grammar pass, and finally split recursively at their lowest-priority
//! operator into an [`AstNode`] tree.
//!
//! ## Language
//! - Numbers: `12`, `0.5`, `1e-3`, `2.5E+4`. They must start with a digit.
//! - Names: `z` (the input point by default), `i` (the imaginary unit, read
//!   only), and any variable you define.
//! - Functions: `abs re im arg conj exp log sqrt sin cos tan`.
//! - Operators: binary `+ - * / ^` and prefix `-`. Only `+` binds looser than
//!   the rest; everything else groups left to right, so `2*3^2` is `36`.
//!   Use parentheses to be explicit.
//!
//! ## Example
//! ```rust
//! use num_complex::Complex;
//! use cplot::Builder;
//!
//! fn main() {
//!     let mut evaluator = Builder::new("z*z + i")
//!         .build()
//!         .expect("Failed to parse formula");
//!
//!     let result = evaluator.eval_at(Complex::new(1.0, 1.0));
//!     assert_eq!(result, Complex::new(0.0, 3.0));
//!
//!     let row: Vec<Complex<f64>> = (0..4).map(|x| Complex::new(x as f64, 0.0)).collect();
//!     let values = evaluator.eval_many(&row);
//!     assert_eq!(values[2], Complex::new(4.0, 1.0));
//! }
//! ```
//!
//! ## Example: Retrieving All Names
//! ```rust
//! use cplot::{functions, operators::{UnaryOperatorKind, BinaryOperatorKind}};
//!
//! println!("Functions: {:?}", functions::names());
//! println!("Unary Operators: {:?}", UnaryOperatorKind::names());
//! println!("Binary Operators: {:?}", BinaryOperatorKind::names());
//! ```
//!
//! ## License
//! Licensed under **GPL-3.0-or-later**.

pub mod astnode;
pub mod builder;
pub mod cmath;
pub mod error;
pub mod evaluator;
pub mod functions;
mod grammar;
mod lexer;
pub mod operators;
pub mod parser;
pub mod token;
pub mod variable;

pub use astnode::AstNode;
pub use builder::Builder;
pub use error::{Error, EvalError, ParseError, ParseErrorKind, Result};
pub use evaluator::Evaluator;
pub use functions::{CustomFunction, FuncKind, FunctionTable};
pub use parser::parse;
pub use variable::Variables;
