//! Polynomial and Fourier series functions.

use crate::error::{Func1Error, Result};
use crate::func1::{
    write_scaled_arg, Func1, ORDER_ADDITIVE, ORDER_ATOM, ORDER_MULTIPLICATIVE, ORDER_POWER,
};

/// A polynomial with coefficients in ascending power order.
///
/// f(x) = c[0] + c[1]*x + c[2]*x^2 + ... + c[n]*x^n
///
/// Evaluated with Horner's scheme. The derivative is not provided.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from ascending coefficients.
    ///
    /// # Errors
    ///
    /// * `Func1Error::InvalidParameterShape` if `coeffs` is empty
    pub fn new(coeffs: Vec<f64>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(Func1Error::parameter_count("polynomial", "at least 1", 0));
        }
        Ok(Self { coeffs })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }
}

impl Func1 for Polynomial {
    fn type_name(&self) -> &'static str {
        "polynomial"
    }

    fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    fn write(&self, arg: &str) -> String {
        let mut terms = Vec::new();
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 && self.coeffs.len() > 1 {
                continue;
            }
            let term = match i {
                0 => format!("{}", c),
                1 => write_scaled_arg(c, arg),
                _ => write_scaled_arg(c, &format!("{}^{{{}}}", arg, i)),
            };
            terms.push(term);
        }
        if terms.is_empty() {
            return "0".to_string();
        }
        terms.join(" + ").replace("+ -", "- ")
    }

    fn order(&self) -> u8 {
        let mut nonzero = self.coeffs.iter().enumerate().filter(|(_, c)| **c != 0.0);
        match (nonzero.next(), nonzero.next()) {
            (Some(_), Some(_)) => ORDER_ADDITIVE,
            (Some((_, &c)), None) if c < 0.0 => ORDER_ADDITIVE,
            (Some((0, _)), None) | (None, _) => ORDER_ATOM,
            (Some((_, &c)), None) if c != 1.0 => ORDER_MULTIPLICATIVE,
            (Some((1, _)), None) => ORDER_ATOM,
            (Some(_), None) => ORDER_POWER,
        }
    }
}

/// A truncated Fourier series.
///
/// f(x) = a[0]/2 + Σ_{i=1..n} a[i]*cos(iωx) + b[i]*sin(iωx)
///
/// The parameter vector is laid out as `[a0, a1..an, ω, b1..bn]`, so it has
/// an even length of at least four. The derivative is not provided.
#[derive(Debug, Clone, PartialEq)]
pub struct Fourier {
    half_a0: f64,
    omega: f64,
    cos_coeffs: Vec<f64>,
    sin_coeffs: Vec<f64>,
}

impl Fourier {
    /// Create a series from its mean term, frequency and matching cosine/sine coefficients.
    pub fn new(a0: f64, omega: f64, cos_coeffs: Vec<f64>, sin_coeffs: Vec<f64>) -> Result<Self> {
        if cos_coeffs.len() != sin_coeffs.len() {
            return Err(Func1Error::InvalidParameterShape {
                type_name: "Fourier".to_string(),
                message: format!(
                    "invalid parameter count: {} cosine and {} sine coefficients",
                    cos_coeffs.len(),
                    sin_coeffs.len()
                ),
            });
        }
        Ok(Self {
            half_a0: 0.5 * a0,
            omega,
            cos_coeffs,
            sin_coeffs,
        })
    }

    /// Builds the series from the packed `[a0, a1..an, ω, b1..bn]` layout.
    pub fn from_params(params: &[f64]) -> Result<Self> {
        if params.len() < 4 || params.len() % 2 != 0 {
            return Err(Func1Error::parameter_count(
                "Fourier",
                "an even count of at least 4",
                params.len(),
            ));
        }
        let n = params.len() / 2 - 1;
        let a0 = params[0];
        let cos_coeffs = params[1..=n].to_vec();
        let omega = params[n + 1];
        let sin_coeffs = params[n + 2..].to_vec();
        Self::new(a0, omega, cos_coeffs, sin_coeffs)
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Number of harmonics in the series.
    pub fn harmonics(&self) -> usize {
        self.cos_coeffs.len()
    }
}

impl Func1 for Fourier {
    fn type_name(&self) -> &'static str {
        "Fourier"
    }

    fn eval(&self, x: f64) -> f64 {
        self.cos_coeffs
            .iter()
            .zip(&self.sin_coeffs)
            .enumerate()
            .fold(self.half_a0, |sum, (i, (&a, &b))| {
                let phase = (i + 1) as f64 * self.omega * x;
                sum + a * phase.cos() + b * phase.sin()
            })
    }

    fn order(&self) -> u8 {
        ORDER_ADDITIVE
    }
}
