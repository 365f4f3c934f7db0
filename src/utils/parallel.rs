//! Parallel evaluation of function objects.
//!
//! Function objects are immutable and `Sync`, so a single tree can be
//! evaluated from many threads without locking.

use ndarray::{Array1, Array2};
use rayon::prelude::*;

use crate::func1::{Func1, Func1Ref};

/// Evaluate `f` at every element of `x` in parallel.
///
/// # Arguments
///
/// * `f` - The function to evaluate
/// * `x` - The evaluation points
///
/// # Returns
///
/// * `Array1<f64>` - f(x[i]) for each i, in the order of `x`
pub fn eval_parallel(f: &dyn Func1, x: &Array1<f64>) -> Array1<f64> {
    let values: Vec<f64> = x
        .to_vec()
        .into_par_iter()
        .map(|xi| f.eval(xi))
        .collect();
    Array1::from_vec(values)
}

/// Evaluate several functions on the same points, one row per function.
///
/// # Returns
///
/// * `Array2<f64>` - Row `i` holds `funcs[i]` evaluated at `x`
pub fn eval_functions_parallel(funcs: &[Func1Ref], x: &Array1<f64>) -> Array2<f64> {
    let rows: Vec<Array1<f64>> = funcs.par_iter().map(|f| f.eval_array(x)).collect();

    let mut out = Array2::zeros((funcs.len(), x.len()));
    for (i, row) in rows.into_iter().enumerate() {
        out.row_mut(i).assign(&row);
    }
    out
}
