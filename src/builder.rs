//! # builder.rs
//!
//! This module provides [`Builder`], which configures and produces an
//! [`Evaluator`] with an expression already bound.

use crate::error::Result;
use crate::evaluator::{Evaluator, DEFAULT_INPUT_NAME};
use crate::functions::{CustomFunction, FunctionTable};
use crate::parser;
use crate::variable::Variables;

/// Consuming builder for an [`Evaluator`].
///
/// # Examples
/// ```rust
/// use cplot::{Builder, CustomFunction, Variables};
/// use num_complex::Complex;
///
/// let vars = Variables::from(&[("a", Complex::new(0.0, 2.0))]).unwrap();
/// let mut evaluator = Builder::new("twice(w) + a")
///     .with_input_name("w")
///     .with_variables(vars)
///     .with_function("twice", CustomFunction::new("twice", |z| z * 2.0))
///     .build()
///     .expect("Failed to build 'twice(w) + a'");
///
/// assert_eq!(evaluator.eval_at(Complex::new(1.0, 0.0)), Complex::new(2.0, 2.0));
/// ```
pub struct Builder
{
    formula: String,
    input: String,
    vars: Variables,
    funcs: FunctionTable,
}

impl Builder
{
    /// Creates a new `Builder` for `formula`, with input variable `z`, no extra
    /// variables and the built-in functions.
    pub fn new(formula: &str) -> Self
    {
        Self {
            formula: formula.to_string(),
            input: DEFAULT_INPUT_NAME.to_string(),
            vars: Variables::new(),
            funcs: FunctionTable::new(),
        }
    }

    /// Sets the name of the variable bound to each input point.
    pub fn with_input_name(mut self, name: &str) -> Self
    {
        self.input = name.to_string();
        self
    }

    /// Replaces the variable table.
    ///
    /// The reserved variables are always present, see [`Variables::new`].
    pub fn with_variables(mut self, variables: Variables) -> Self
    {
        self.vars = variables;
        self
    }

    /// Registers a user-defined function. A built-in of the same name is
    /// replaced.
    pub fn with_function(mut self, name: &str, func: CustomFunction) -> Self
    {
        self.funcs.register(name, func);
        self
    }

    /// Parses the formula and binds it to a new [`Evaluator`].
    ///
    /// # Errors
    /// - [`crate::Error::Parse`] when the formula is not a valid expression.
    /// - [`crate::Error::Eval`] when the input name is reserved, or when the
    ///   formula uses a variable or function missing from the tables.
    pub fn build(self) -> Result<Evaluator>
    {
        let root = parser::parse(&self.formula)?;
        let mut evaluator = Evaluator::with_tables(self.vars, self.funcs, &self.input)?;
        evaluator.set_root(root)?;
        Ok(evaluator)
    }
}
