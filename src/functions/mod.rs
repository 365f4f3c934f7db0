//! Leaf function catalog.
//!
//! Leaves are parametrized functions of a single variable that do not hold
//! other function objects: elementary functions, polynomials and Fourier
//! series, physical rate and pulse forms, and tabulated data.

use crate::error::{Func1Error, Result};

mod basic;
mod physical;
mod polynomial;
mod tabulated;

pub use basic::{Constant, Cos, Exp, Log, Pow, Sin};
pub use physical::{Arrhenius, Gaussian};
pub use polynomial::{Fourier, Polynomial};
pub use tabulated::{Tabulated, TabulationMode};

/// Extracts the only entry of a parameter vector that must hold exactly one value.
pub(crate) fn single_parameter(type_name: &str, params: &[f64]) -> Result<f64> {
    match params {
        [c] => Ok(*c),
        _ => Err(Func1Error::parameter_count(type_name, "1", params.len())),
    }
}

/// Checks a fixed-length parameter vector.
pub(crate) fn exact_parameters<const N: usize>(
    type_name: &str,
    params: &[f64],
) -> Result<[f64; N]> {
    <[f64; N]>::try_from(params)
        .map_err(|_| Func1Error::parameter_count(type_name, &N.to_string(), params.len()))
}
