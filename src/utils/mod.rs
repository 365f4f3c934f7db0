//! Helpers for evaluating function objects over many points.

#[cfg(feature = "parallel")]
pub mod parallel;

use crate::error::{Func1Error, Result};
use crate::func1::Func1;
use ndarray::Array1;

/// Samples `f` on `n` evenly spaced points of [start, end], returning `(x, f(x))`.
///
/// # Errors
///
/// * `Func1Error::InvalidInput` if `n < 2` or the bounds are not finite
pub fn sample(f: &dyn Func1, start: f64, end: f64, n: usize) -> Result<(Array1<f64>, Array1<f64>)> {
    if n < 2 {
        return Err(Func1Error::InvalidInput(format!(
            "Need at least 2 sample points, got {}",
            n
        )));
    }
    if !(start.is_finite() && end.is_finite()) {
        return Err(Func1Error::InvalidInput(
            "Sample bounds must be finite".to_string(),
        ));
    }
    let x = Array1::linspace(start, end, n);
    let y = f.eval_array(&x);
    Ok((x, y))
}

#[cfg(feature = "parallel")]
pub use parallel::{eval_functions_parallel, eval_parallel};
