//! Function registry.
//!
//! This module groups function-related implementations used by the evaluator:
//!
//! - `buildin`: the fixed set of built-in functions as the [`FuncKind`] enum.
//! - `custom`: user-defined functions wrapping closures.
//!
//! [`FunctionTable`] maps names to either kind. It starts populated with all
//! built-ins; registering a name that already exists replaces the previous
//! entry, built-ins included.
pub(crate) mod buildin;
pub(crate) mod custom;

pub use buildin::FuncKind;
pub use custom::CustomFunction;

use num_complex::Complex;
use std::collections::HashMap;

/// Return the available built-in function names.
///
/// The slice is static and intended for use by error messages or
/// autocompletion UI.
pub fn names() -> &'static [&'static str]
{
    FuncKind::available_names()
}

/// An entry of the function registry.
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Builtin(FuncKind),
    Custom(CustomFunction),
}

impl Function {
    /// Applies the function to its argument.
    pub fn apply(&self, z: Complex<f64>) -> Complex<f64> {
        match self {
            Self::Builtin(kind) => kind.apply(z),
            Self::Custom(func) => func.apply(z),
        }
    }
}

impl From<FuncKind> for Function {
    fn from(kind: FuncKind) -> Self {
        Self::Builtin(kind)
    }
}

impl From<CustomFunction> for Function {
    fn from(func: CustomFunction) -> Self {
        Self::Custom(func)
    }
}

/// Name to function mapping consulted when a function-call node is evaluated.
///
/// Keys are case-sensitive.
///
/// # Examples
///
/// ```
/// use cplot::functions::{CustomFunction, FunctionTable};
/// use num_complex::Complex;
///
/// let mut table = FunctionTable::new();
/// assert!(table.contains("sin"));
///
/// table.register("double", CustomFunction::new("double", |z| z + z));
/// let f = table.get("double").unwrap();
/// assert_eq!(f.apply(Complex::new(1.0, 2.0)), Complex::new(2.0, 4.0));
/// ```
#[derive(Clone, Debug)]
pub struct FunctionTable {
    table: HashMap<String, Function>,
}

impl FunctionTable {
    /// Creates a table holding every built-in function.
    pub fn new() -> Self {
        let table = FuncKind::all()
            .iter()
            .map(|kind| (kind.name().to_string(), Function::Builtin(*kind)))
            .collect();
        Self { table }
    }

    /// Creates a table with no functions at all.
    pub fn empty() -> Self {
        Self { table: HashMap::new() }
    }

    /// Registers a function under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: &str, func: F)
    where
        Function: From<F>,
    {
        if self.table.insert(name.to_string(), Function::from(func)).is_some() {
            tracing::debug!(name, "function replaced");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.table.get(name)
    }

    /// Returns the registered names, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::new()
    }
}
