//! Parametrized physical forms: pulse shapes and rate expressions.

use crate::error::Result;
use crate::functions::exact_parameters;
use crate::func1::{Func1, ORDER_MULTIPLICATIVE};

/// A Gaussian pulse parametrized by its full width at half maximum.
///
/// f(x) = A * exp(-((x - t0) / τ)^2), with τ = fwhm / (2 * sqrt(ln 2))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    amplitude: f64,
    center: f64,
    tau: f64,
}

impl Gaussian {
    /// Create a pulse with peak value `amplitude` at `center`.
    pub fn new(amplitude: f64, center: f64, fwhm: f64) -> Self {
        Self {
            amplitude,
            center,
            tau: fwhm / (2.0 * 2.0_f64.ln().sqrt()),
        }
    }

    /// Builds the pulse from `[A, t0, fwhm]`.
    pub fn from_params(params: &[f64]) -> Result<Self> {
        let [amplitude, center, fwhm] = exact_parameters::<3>("Gaussian", params)?;
        Ok(Self::new(amplitude, center, fwhm))
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn fwhm(&self) -> f64 {
        self.tau * 2.0 * 2.0_f64.ln().sqrt()
    }
}

impl Func1 for Gaussian {
    fn type_name(&self) -> &'static str {
        "Gaussian"
    }

    fn eval(&self, x: f64) -> f64 {
        let z = (x - self.center) / self.tau;
        self.amplitude * (-z * z).exp()
    }

    fn write(&self, arg: &str) -> String {
        format!(
            "{} \\exp\\left(-\\left(\\frac{{{} - {}}}{{{}}}\\right)^{{2}}\\right)",
            self.amplitude, arg, self.center, self.tau
        )
    }

    fn order(&self) -> u8 {
        ORDER_MULTIPLICATIVE
    }
}

/// A modified Arrhenius rate expression.
///
/// k(T) = A * T^b * exp(-E / T), with the activation energy `E` given in
/// temperature units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrhenius {
    pre_exponential: f64,
    temperature_exponent: f64,
    activation_temperature: f64,
}

impl Arrhenius {
    pub fn new(
        pre_exponential: f64,
        temperature_exponent: f64,
        activation_temperature: f64,
    ) -> Self {
        Self {
            pre_exponential,
            temperature_exponent,
            activation_temperature,
        }
    }

    /// Builds the rate from `[A, b, E]`.
    pub fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b, e] = exact_parameters::<3>("Arrhenius", params)?;
        Ok(Self::new(a, b, e))
    }

    pub fn pre_exponential(&self) -> f64 {
        self.pre_exponential
    }

    pub fn temperature_exponent(&self) -> f64 {
        self.temperature_exponent
    }

    pub fn activation_temperature(&self) -> f64 {
        self.activation_temperature
    }
}

impl Func1 for Arrhenius {
    fn type_name(&self) -> &'static str {
        "Arrhenius"
    }

    fn eval(&self, t: f64) -> f64 {
        self.pre_exponential
            * t.powf(self.temperature_exponent)
            * (-self.activation_temperature / t).exp()
    }

    fn write(&self, arg: &str) -> String {
        format!(
            "{} {}^{{{}}} \\exp\\left(-\\frac{{{}}}{{{}}}\\right)",
            self.pre_exponential, arg, self.temperature_exponent, self.activation_temperature, arg
        )
    }

    fn order(&self) -> u8 {
        ORDER_MULTIPLICATIVE
    }
}
