//! # custom.rs
//!
//! User-defined functions.
//!
//! A `CustomFunction` wraps an arbitrary closure from one complex number to
//! another so it can be registered in a [`crate::functions::FunctionTable`]
//! next to the built-ins and called from expressions by name.

use num_complex::Complex;
use std::sync::Arc;

/// A user-supplied unary complex function.
///
/// Cloning is cheap: clones share the same closure.
#[derive(Clone)]
pub struct CustomFunction {
    func: Arc<dyn Fn(Complex<f64>) -> Complex<f64> + Send + Sync>,
    name: String,
}

impl CustomFunction {
    /// Creates a new custom function.
    ///
    /// # Arguments
    ///
    /// * `name` - A descriptive name, used for debugging output only
    /// * `func` - A closure implementing the function logic
    pub fn new<F>(name: &str, func: F) -> Self
    where
        F: Fn(Complex<f64>) -> Complex<f64> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            name: name.to_string(),
        }
    }

    /// Applies the function to its argument.
    pub fn apply(&self, z: Complex<f64>) -> Complex<f64> {
        (self.func)(z)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for CustomFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CustomFunction {
    fn eq(&self, other: &Self) -> bool {
        // equal only when both handles share one closure
        Arc::ptr_eq(&self.func, &other.func)
    }
}
