//! Weighted polynomial least-squares fitting.
//!
//! Fits p(x) = c[0] + c[1]*x + ... + c[m]*x^m to `n > m` samples by
//! minimizing Σ w[i] * (y[i] - p(x[i]))^2. The weights multiply squared
//! residuals, so each row of the Vandermonde system is scaled by sqrt(w[i])
//! before the solve.

use crate::error::{Func1Error, Result};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Method for solving the weighted least-squares system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMethod {
    /// Singular value decomposition of the scaled Vandermonde matrix (stable, handles rank
    /// deficiency)
    Svd,

    /// Cholesky solve of the normal equations AᵀA c = Aᵀy (fastest, loses precision for
    /// high degrees)
    NormalEquations,
}

impl Default for SolveMethod {
    fn default() -> Self {
        SolveMethod::Svd
    }
}

/// Configuration options for [`polyfit_with_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolyfitConfig {
    /// Method used to solve the least-squares system. Default: Svd
    pub method: SolveMethod,

    /// Singular values below `rcond` times the largest one are treated as zero. Default: 1e-13
    pub rcond: f64,
}

impl Default for PolyfitConfig {
    fn default() -> Self {
        Self {
            method: SolveMethod::default(),
            rcond: 1e-13,
        }
    }
}

/// Result of a polynomial fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyfitResult {
    /// Coefficients in ascending power order, `degree + 1` of them.
    pub coefficients: Vec<f64>,

    /// Root-mean-square of the weighted residuals: ||sqrt(W) (A c - y)|| / sqrt(n).
    pub rms: f64,
}

impl PolyfitResult {
    /// Degree of the fitted polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the fitted polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        polyval(&self.coefficients, x)
    }
}

/// Evaluates a polynomial with ascending coefficients using Horner's scheme.
pub fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Fit a polynomial of the given degree with the default configuration.
///
/// # Arguments
///
/// * `x` - The sample abscissas
/// * `y` - The sample ordinates
/// * `weights` - Optional non-negative weights on the squared residuals; `None` weighs all
///   samples equally
/// * `degree` - The polynomial degree, which must be less than the number of samples
///
/// # Returns
///
/// * The fitted coefficients and the RMS residual
///
/// # Errors
///
/// * `Func1Error::InvalidInput` if the inputs are inconsistent or not finite
/// * `Func1Error::LinearAlgebraError` if the solve fails
pub fn polyfit(
    x: &[f64],
    y: &[f64],
    weights: Option<&[f64]>,
    degree: usize,
) -> Result<PolyfitResult> {
    polyfit_with_config(x, y, weights, degree, &PolyfitConfig::default())
}

/// Fit a polynomial using the given solver configuration.
///
/// See [`polyfit`] for the arguments and errors.
pub fn polyfit_with_config(
    x: &[f64],
    y: &[f64],
    weights: Option<&[f64]>,
    degree: usize,
    config: &PolyfitConfig,
) -> Result<PolyfitResult> {
    let n = x.len();
    validate_samples(x, y, weights, degree)?;

    let scale: Vec<f64> = match weights {
        Some(w) => w.iter().map(|wi| wi.sqrt()).collect(),
        None => vec![1.0; n],
    };

    // Row i of the scaled Vandermonde matrix: sqrt(w[i]) * [1, x[i], x[i]^2, ...]
    let mut a = DMatrix::<f64>::zeros(n, degree + 1);
    for i in 0..n {
        let mut power = scale[i];
        for j in 0..=degree {
            a[(i, j)] = power;
            power *= x[i];
        }
    }
    let b = DVector::from_fn(n, |i, _| scale[i] * y[i]);

    log::debug!(
        "polyfit: {} samples, degree {}, method {:?}",
        n,
        degree,
        config.method
    );

    let coefficients = match config.method {
        SolveMethod::Svd => solve_svd(&a, &b, config.rcond)?,
        SolveMethod::NormalEquations => solve_normal_equations(&a, &b)?,
    };

    let residuals = &a * &coefficients - &b;
    let rms = residuals.norm() / (n as f64).sqrt();

    Ok(PolyfitResult {
        coefficients: coefficients.iter().copied().collect(),
        rms,
    })
}

fn validate_samples(x: &[f64], y: &[f64], weights: Option<&[f64]>, degree: usize) -> Result<()> {
    let n = x.len();
    if y.len() != n {
        return Err(Func1Error::InvalidInput(format!(
            "Expected {} ordinates, got {}",
            n,
            y.len()
        )));
    }
    if degree >= n {
        return Err(Func1Error::InvalidInput(format!(
            "Polynomial degree ({}) must be less than the number of samples ({})",
            degree, n
        )));
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(Func1Error::InvalidInput(
            "Sample values must be finite".to_string(),
        ));
    }
    if let Some(w) = weights {
        if w.len() != n {
            return Err(Func1Error::InvalidInput(format!(
                "Expected {} weights, got {}",
                n,
                w.len()
            )));
        }
        if w.iter().any(|wi| !(wi.is_finite() && *wi >= 0.0)) {
            return Err(Func1Error::InvalidInput(
                "Weights must be finite and non-negative".to_string(),
            ));
        }
        if w.iter().all(|wi| *wi == 0.0) {
            return Err(Func1Error::InvalidInput(
                "At least one weight must be positive".to_string(),
            ));
        }
    }
    Ok(())
}

fn solve_svd(a: &DMatrix<f64>, b: &DVector<f64>, rcond: f64) -> Result<DVector<f64>> {
    let svd = a.clone().svd(true, true);
    let tol = rcond * svd.singular_values.max();
    let rank = svd.singular_values.iter().filter(|&&s| s > tol).count();
    if rank < a.ncols() {
        log::warn!(
            "polyfit: rank-deficient system (rank {} of {}), returning minimum-norm solution",
            rank,
            a.ncols()
        );
    }
    svd.solve(b, tol)
        .map_err(|e| Func1Error::LinearAlgebraError(e.to_string()))
}

fn solve_normal_equations(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    let at = a.transpose();
    let ata = &at * a;
    let atb = &at * b;
    let cholesky = ata.cholesky().ok_or_else(|| {
        Func1Error::LinearAlgebraError("Normal matrix is not positive definite".to_string())
    })?;
    Ok(cholesky.solve(&atb))
}
