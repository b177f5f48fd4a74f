//! # evaluator.rs
//!
//! The owning evaluator: a variable table, a function table and the active
//! expression tree.
//!
//! A tree is checked against the tables when it is bound with
//! [`Evaluator::set_root`]. After that every name it uses resolves, so a lookup
//! failure while evaluating a point is an internal fault and panics instead of
//! being reported per point.

use crate::astnode::AstNode;
use crate::error::EvalError;
use crate::functions::{Function, FunctionTable};
use crate::variable::{self, Variables};
use num_complex::Complex;
use rayon::prelude::*;

/// Name of the input variable unless configured otherwise.
pub const DEFAULT_INPUT_NAME: &str = "z";

/// Evaluates a bound expression at complex input points.
///
/// # Examples
///
/// ```
/// use cplot::{parser, Evaluator};
/// use num_complex::Complex;
///
/// let mut evaluator = Evaluator::new();
/// evaluator.set_root(parser::parse("z*z").unwrap()).unwrap();
///
/// assert_eq!(evaluator.eval_at(Complex::new(2.0, 0.0)), Complex::new(4.0, 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    vars: Variables,
    funcs: FunctionTable,
    root: Option<AstNode>,
    input: String,
}

impl Evaluator {
    /// Creates an evaluator with default tables, input `z` and no expression.
    pub fn new() -> Self {
        Self {
            vars: Variables::new(),
            funcs: FunctionTable::new(),
            root: None,
            input: DEFAULT_INPUT_NAME.to_string(),
        }
    }

    /// Creates an evaluator from existing tables.
    ///
    /// # Errors
    /// [`EvalError::ReservedVariable`] when `input` names a reserved variable.
    pub fn with_tables(vars: Variables, funcs: FunctionTable, input: &str) -> Result<Self, EvalError> {
        if variable::is_reserved(input) {
            tracing::warn!(input, "reserved name used as input variable");
            return Err(EvalError::ReservedVariable(input.to_string()));
        }
        Ok(Self {
            vars,
            funcs,
            root: None,
            input: input.to_string(),
        })
    }

    /// Checks that every name used by `root` resolves.
    ///
    /// The input variable counts as bound even before the first evaluation.
    pub fn validate(&self, root: &AstNode) -> Result<(), EvalError> {
        if let Some(name) = root.variables()
            .into_iter()
            .find(|name| *name != self.input && !self.vars.contains(name))
        {
            return Err(EvalError::UnknownVariable(name.to_string()));
        }
        if let Some(name) = root.functions()
            .into_iter()
            .find(|name| !self.funcs.contains(name))
        {
            return Err(EvalError::UnknownFunction(name.to_string()));
        }
        Ok(())
    }

    /// Binds `root` as the active expression, dropping the previous one.
    ///
    /// # Errors
    /// Returns the first unresolved name. The previous expression stays bound
    /// in that case.
    pub fn set_root(&mut self, root: AstNode) -> Result<(), EvalError> {
        if let Err(err) = self.validate(&root) {
            tracing::warn!(%err, "expression rejected");
            return Err(err);
        }
        tracing::info!(nodes = root.node_count(), "expression accepted");
        tracing::debug!(%root);
        self.root = Some(root);
        Ok(())
    }

    /// Unbinds the active expression.
    pub fn clear_root(&mut self) -> Option<AstNode> {
        self.root.take()
    }

    pub fn root(&self) -> Option<&AstNode> {
        self.root.as_ref()
    }

    pub fn input_name(&self) -> &str {
        &self.input
    }

    pub fn variables(&self) -> &Variables {
        &self.vars
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.funcs
    }

    /// Assigns a variable other than the input.
    pub fn set_variable(&mut self, name: &str, val: Complex<f64>) -> Result<(), EvalError> {
        self.vars.set(name, val)
    }

    /// Registers a function, replacing any entry with the same name.
    pub fn register_function<F>(&mut self, name: &str, func: F)
    where
        Function: From<F>,
    {
        self.funcs.register(name, func);
    }

    /// Binds the input variable to `z` and evaluates the active expression.
    ///
    /// # Panics
    /// Panics if no expression is bound, or if a name fails to resolve, which
    /// cannot happen for a tree accepted by [`Self::set_root`].
    pub fn eval_at(&mut self, z: Complex<f64>) -> Complex<f64> {
        if let Err(err) = self.vars.set(&self.input, z) {
            panic!("cannot bind input variable: {err}");
        }
        let root = match &self.root {
            Some(root) => root,
            None => panic!("no expression bound to the evaluator"),
        };
        match root.eval(&self.vars, &self.funcs) {
            Ok(val) => val,
            Err(err) => panic!("accepted expression failed to evaluate: {err}"),
        }
    }

    /// Evaluates the active expression at every point, in parallel.
    ///
    /// Each worker binds the input in its own copy of the variable table, so
    /// the evaluator itself is not modified. Results keep the order of
    /// `points`.
    ///
    /// # Panics
    /// Same conditions as [`Self::eval_at`].
    pub fn eval_many(&self, points: &[Complex<f64>]) -> Vec<Complex<f64>> {
        let root = match &self.root {
            Some(root) => root,
            None => panic!("no expression bound to the evaluator"),
        };
        let funcs = &self.funcs;
        let input = self.input.as_str();

        points
            .par_iter()
            .map_init(
                || self.vars.clone(),
                |vars, z| {
                    if let Err(err) = vars.set(input, *z) {
                        panic!("cannot bind input variable: {err}");
                    }
                    match root.eval(vars, funcs) {
                        Ok(val) => val,
                        Err(err) => panic!("accepted expression failed to evaluate: {err}"),
                    }
                },
            )
            .collect()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
