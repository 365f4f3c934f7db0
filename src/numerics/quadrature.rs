//! Definite integrals of tabulated data.
//!
//! Both rules work on non-uniform grids. Abscissas must be strictly
//! increasing and every value finite.

use crate::error::{Func1Error, Result};
use ndarray::{s, Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named quadrature rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadratureRule {
    /// Composite trapezoidal rule.
    Trapezoidal,
    /// Composite Simpson's 1/3 rule with a trapezoidal last interval when the interval count
    /// is odd.
    Simpson,
}

impl QuadratureRule {
    /// The name used for lookup.
    pub fn name(self) -> &'static str {
        match self {
            QuadratureRule::Trapezoidal => "trapezoidal",
            QuadratureRule::Simpson => "simpson",
        }
    }

    /// Integrates `f` sampled at `x` with this rule.
    pub fn integrate(self, f: &Array1<f64>, x: &Array1<f64>) -> Result<f64> {
        match self {
            QuadratureRule::Trapezoidal => trapezoidal(f, x),
            QuadratureRule::Simpson => simpson(f, x),
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuadratureRule {
    type Err = Func1Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "trapezoidal" => Ok(QuadratureRule::Trapezoidal),
            "simpson" => Ok(QuadratureRule::Simpson),
            _ => Err(Func1Error::UnknownType {
                category: "quadrature rule",
                name: s.to_string(),
            }),
        }
    }
}

/// Integrate with the rule named `method` ("trapezoidal" or "simpson").
///
/// # Errors
///
/// * `Func1Error::UnknownType` if the rule name is not recognized
/// * `Func1Error::InvalidInput` if the samples are invalid
pub fn numerical_quadrature(method: &str, f: &Array1<f64>, x: &Array1<f64>) -> Result<f64> {
    method.parse::<QuadratureRule>()?.integrate(f, x)
}

/// Integrate with the composite trapezoidal rule.
///
/// Σ (f[i] + f[i+1]) / 2 * (x[i+1] - x[i])
pub fn trapezoidal(f: &Array1<f64>, x: &Array1<f64>) -> Result<f64> {
    validate(f, x)?;
    Ok(basic_trapezoidal(f.view(), x.view()))
}

/// Integrate with the composite Simpson's rule for non-uniform grids.
///
/// With an even number of intervals Simpson's rule covers the whole range.
/// With an odd number it covers all but the last interval, which is
/// integrated with the trapezoidal rule. Two points reduce to the
/// trapezoidal rule.
pub fn simpson(f: &Array1<f64>, x: &Array1<f64>) -> Result<f64> {
    validate(f, x)?;
    let n = f.len();
    if n == 2 {
        return Ok(basic_trapezoidal(f.view(), x.view()));
    }
    if n % 2 == 0 {
        Ok(basic_simpson(f.slice(s![..n - 1]), x.slice(s![..n - 1]))
            + basic_trapezoidal(f.slice(s![n - 2..]), x.slice(s![n - 2..])))
    } else {
        Ok(basic_simpson(f.view(), x.view()))
    }
}

fn validate(f: &Array1<f64>, x: &Array1<f64>) -> Result<()> {
    if f.len() != x.len() {
        return Err(Func1Error::InvalidInput(format!(
            "Expected {} function values, got {}",
            x.len(),
            f.len()
        )));
    }
    if x.len() < 2 {
        return Err(Func1Error::InvalidInput(format!(
            "Need at least 2 points to integrate, got {}",
            x.len()
        )));
    }
    if f.iter().chain(x.iter()).any(|v| !v.is_finite()) {
        return Err(Func1Error::InvalidInput(
            "Quadrature inputs must be finite".to_string(),
        ));
    }
    if x.windows(2).into_iter().any(|w| w[1] <= w[0]) {
        return Err(Func1Error::InvalidInput(
            "Abscissas must be strictly increasing".to_string(),
        ));
    }
    Ok(())
}

fn basic_trapezoidal(f: ArrayView1<f64>, x: ArrayView1<f64>) -> f64 {
    (0..f.len() - 1)
        .map(|i| 0.5 * (f[i] + f[i + 1]) * (x[i + 1] - x[i]))
        .sum()
}

/// Simpson's rule over an even number of intervals of unequal width.
fn basic_simpson(f: ArrayView1<f64>, x: ArrayView1<f64>) -> f64 {
    (1..f.len() - 1)
        .step_by(2)
        .map(|i| {
            let h0 = x[i] - x[i - 1];
            let h1 = x[i + 1] - x[i];
            let hph = h1 + h0;
            let hdh = h1 / h0;
            let hmh = h1 * h0;
            hph / 6.0
                * ((2.0 - hdh) * f[i - 1] + hph * hph / hmh * f[i] + (2.0 - 1.0 / hdh) * f[i + 1])
        })
        .sum()
}
