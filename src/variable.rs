//! # variable.rs
//!
//! This module provides the `Variables` struct, which manages a table of named
//! variables used in expressions.
//!
//! Each variable is stored as a `Complex<f64>`. Names listed in [`RESERVED`]
//! (currently only the imaginary unit `i`) are seeded into every table and can
//! never be reassigned.

use crate::error::EvalError;
use num_complex::Complex;
use phf::Map;
use phf_macros::phf_map;
use std::collections::HashMap;

/// Reserved variable names and their fixed values.
pub static RESERVED: Map<&'static str, Complex<f64>> = phf_map! {
    "i" => Complex::new(0.0, 1.0),
};

/// Returns `true` if `name` is a reserved variable.
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains_key(name)
}

/// A collection of named variables for expression evaluation.
///
/// # Examples
///
/// ```
/// use cplot::variable::Variables;
/// use num_complex::Complex;
///
/// let mut vars = Variables::new();
/// vars.set("z", Complex::new(1.0, 0.0)).unwrap();
///
/// assert!(vars.contains("z"));
/// assert_eq!(vars.get("i").unwrap(), Complex::new(0.0, 1.0));
/// assert!(vars.set("i", Complex::new(2.0, 0.0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variables {
    table: HashMap<String, Complex<f64>>
}

impl Variables {
    /// Creates a table holding only the reserved variables.
    pub fn new() -> Self {
        let table = RESERVED.entries()
            .map(|(name, val)| (name.to_string(), *val))
            .collect();
        Self { table }
    }

    /// Constructs a `Variables` table from a slice of key-value pairs.
    ///
    /// Values can be any type convertible into `Complex<f64>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cplot::variable::Variables;
    ///
    /// let vars = Variables::from(&[("a", 1.0), ("b", 2.0)]).unwrap();
    /// assert!(vars.contains("a"));
    /// ```
    pub fn from<V>(items: &[(&str, V)]) -> Result<Self, EvalError>
    where
        V: Clone,
        Complex<f64>: From<V>,
    {
        let mut vars = Self::new();
        vars.insert(items)?;
        Ok(vars)
    }

    /// Assigns multiple variables, stopping at the first reserved name.
    pub fn insert<V>(&mut self, items: &[(&str, V)]) -> Result<(), EvalError>
    where
        V: Clone,
        Complex<f64>: From<V>,
    {
        for (key, val) in items {
            self.set(key, Complex::from(val.clone()))?;
        }
        Ok(())
    }

    /// Assigns `val` to `name`, creating the variable if needed.
    ///
    /// # Errors
    /// Returns [`EvalError::ReservedVariable`] when `name` is reserved. The table
    /// is left unchanged in that case.
    pub fn set(&mut self, name: &str, val: Complex<f64>) -> Result<(), EvalError> {
        if is_reserved(name) {
            tracing::warn!(name, "attempt to assign a reserved variable");
            return Err(EvalError::ReservedVariable(name.to_string()));
        }
        match self.table.get_mut(name) {
            Some(slot) => *slot = val,
            None => {
                self.table.insert(name.to_string(), val);
            },
        }
        Ok(())
    }

    /// Checks if a variable with the given name exists in the table.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Retrieves the value of a variable by name.
    ///
    /// # Errors
    /// Returns [`EvalError::UnknownVariable`] when the name is absent.
    pub fn get(&self, name: &str) -> Result<Complex<f64>, EvalError> {
        self.table.get(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownVariable(name.to_string()))
    }

    /// Removes a variable. Reserved variables stay.
    pub fn remove(&mut self, name: &str) -> Option<Complex<f64>> {
        if is_reserved(name) {
            return None;
        }
        self.table.remove(name)
    }

    /// Removes every non-reserved variable.
    pub fn clear(&mut self) {
        self.table.retain(|name, _| is_reserved(name));
    }

    /// Returns the variable names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Variables {
    fn default() -> Self {
        Self::new()
    }
}
