//! # astnode.rs
//!
//! The evaluation tree produced by [`crate::parser`].
//!
//! Leaves are literal values and variable references; inner nodes are operators
//! and single-argument function calls. Nodes carry names, not resolved values,
//! so one tree can be evaluated against any pair of tables:
//!
//! ```
//! use cplot::{parser, variable::Variables, functions::FunctionTable};
//! use num_complex::Complex;
//!
//! let tree = parser::parse("z*z + 1").unwrap();
//! let mut vars = Variables::new();
//! vars.set("z", Complex::new(0.0, 1.0)).unwrap();
//!
//! let value = tree.eval(&vars, &FunctionTable::new()).unwrap();
//! assert_eq!(value, Complex::new(0.0, 0.0));
//! ```

use crate::error::EvalError;
use crate::functions::FunctionTable;
use crate::operators::{BinaryOperatorKind, UnaryOperatorKind};
use crate::variable::Variables;
use num_complex::Complex;
use std::collections::BTreeSet;

/// A node of the evaluation tree.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Literal value.
    Value(Complex<f64>),

    /// Variable reference, resolved at evaluation time.
    Variable(String),

    /// Call of a single-argument function, resolved at evaluation time.
    FunctionCall {
        name: String,
        arg: Box<AstNode>,
    },

    UnaryOperator {
        kind: UnaryOperatorKind,
        expr: Box<AstNode>,
    },

    BinaryOperator {
        kind: BinaryOperatorKind,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
}

impl AstNode {
    pub(crate) fn unary(kind: UnaryOperatorKind, expr: AstNode) -> Self {
        Self::UnaryOperator { kind, expr: Box::new(expr) }
    }

    pub(crate) fn binary(kind: BinaryOperatorKind, left: AstNode, right: AstNode) -> Self {
        Self::BinaryOperator { kind, left: Box::new(left), right: Box::new(right) }
    }

    pub(crate) fn call(name: &str, arg: AstNode) -> Self {
        Self::FunctionCall { name: name.to_string(), arg: Box::new(arg) }
    }

    /// Evaluates the tree against the given tables.
    ///
    /// Children are evaluated before their parent; a function's name is looked
    /// up only after its argument has been evaluated.
    ///
    /// # Errors
    /// [`EvalError::UnknownVariable`] or [`EvalError::UnknownFunction`] for the
    /// first name (in evaluation order) missing from its table.
    pub fn eval(&self, vars: &Variables, funcs: &FunctionTable) -> Result<Complex<f64>, EvalError> {
        match self {
            Self::Value(val) => Ok(*val),
            Self::Variable(name) => vars.get(name),
            Self::FunctionCall { name, arg } => {
                let z = arg.eval(vars, funcs)?;
                let func = funcs.get(name)
                    .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
                Ok(func.apply(z))
            },
            Self::UnaryOperator { kind, expr } => {
                Ok(kind.apply(expr.eval(vars, funcs)?))
            },
            Self::BinaryOperator { kind, left, right } => {
                let l = left.eval(vars, funcs)?;
                let r = right.eval(vars, funcs)?;
                Ok(kind.apply(l, r))
            },
        }
    }

    /// Returns the distinct variable names referenced by the tree, sorted.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.walk(&mut |node| {
            if let Self::Variable(name) = node {
                names.insert(name.as_str());
            }
        });
        names
    }

    /// Returns the distinct function names called by the tree, sorted.
    pub fn functions(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.walk(&mut |node| {
            if let Self::FunctionCall { name, .. } = node {
                names.insert(name.as_str());
            }
        });
        names
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// Pre-order traversal.
    fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a AstNode),
    {
        visit(self);
        match self {
            Self::Value(_) | Self::Variable(_) => (),
            Self::FunctionCall { arg, .. } => arg.walk(visit),
            Self::UnaryOperator { expr, .. } => expr.walk(visit),
            Self::BinaryOperator { left, right, .. } => {
                left.walk(visit);
                right.walk(visit);
            },
        }
    }
}

impl std::fmt::Display for AstNode {
    /// Writes the tree with every operator application parenthesised.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(val) if val.im == 0.0 => write!(f, "{}", val.re),
            Self::Value(val) => write!(f, "({})", val),
            Self::Variable(name) => f.write_str(name),
            Self::FunctionCall { name, arg } => write!(f, "{name}({arg})"),
            Self::UnaryOperator { kind, expr } => write!(f, "({kind}{expr})"),
            Self::BinaryOperator { kind, left, right } => write!(f, "({left}{kind}{right})"),
        }
    }
}
