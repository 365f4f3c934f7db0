//! Single-parameter elementary functions.
//!
//! Each of these leaves holds one scalar: the constant value, the angular
//! frequency or rate `ω`, or the exponent `p`.

use crate::combinators::TimesConstant;
use crate::error::Result;
use crate::func1::{
    write_scaled_arg, Func1, Func1Ref, ORDER_ADDITIVE, ORDER_ATOM, ORDER_POWER,
};
use crate::functions::single_parameter;
use std::sync::Arc;

/// A constant function, f(x) = a.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Builds the function from a parameter vector of length one.
    pub fn from_params(params: &[f64]) -> Result<Self> {
        single_parameter("constant", params).map(Self::new)
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Func1 for Constant {
    fn type_name(&self) -> &'static str {
        "constant"
    }

    fn eval(&self, _x: f64) -> f64 {
        self.value
    }

    fn derivative(&self) -> Result<Func1Ref> {
        Ok(Arc::new(Constant::new(0.0)))
    }

    fn write(&self, _arg: &str) -> String {
        format!("{}", self.value)
    }

    fn order(&self) -> u8 {
        // A negative literal needs brackets wherever a sum would.
        if self.value < 0.0 {
            ORDER_ADDITIVE
        } else {
            ORDER_ATOM
        }
    }
}

/// A sine wave, f(x) = sin(ωx).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sin {
    omega: f64,
}

impl Sin {
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }

    pub fn from_params(params: &[f64]) -> Result<Self> {
        single_parameter("sin", params).map(Self::new)
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }
}

impl Func1 for Sin {
    fn type_name(&self) -> &'static str {
        "sin"
    }

    fn eval(&self, x: f64) -> f64 {
        (self.omega * x).sin()
    }

    fn derivative(&self) -> Result<Func1Ref> {
        let cos: Func1Ref = Arc::new(Cos::new(self.omega));
        Ok(Arc::new(TimesConstant::new(cos, self.omega)))
    }

    fn write(&self, arg: &str) -> String {
        format!("\\sin({})", write_scaled_arg(self.omega, arg))
    }
}

/// A cosine wave, f(x) = cos(ωx).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cos {
    omega: f64,
}

impl Cos {
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }

    pub fn from_params(params: &[f64]) -> Result<Self> {
        single_parameter("cos", params).map(Self::new)
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }
}

impl Func1 for Cos {
    fn type_name(&self) -> &'static str {
        "cos"
    }

    fn eval(&self, x: f64) -> f64 {
        (self.omega * x).cos()
    }

    fn derivative(&self) -> Result<Func1Ref> {
        let sin: Func1Ref = Arc::new(Sin::new(self.omega));
        Ok(Arc::new(TimesConstant::new(sin, -self.omega)))
    }

    fn write(&self, arg: &str) -> String {
        format!("\\cos({})", write_scaled_arg(self.omega, arg))
    }
}

/// An exponential, f(x) = exp(ωx).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exp {
    rate: f64,
}

impl Exp {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn from_params(params: &[f64]) -> Result<Self> {
        single_parameter("exp", params).map(Self::new)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Func1 for Exp {
    fn type_name(&self) -> &'static str {
        "exp"
    }

    fn eval(&self, x: f64) -> f64 {
        (self.rate * x).exp()
    }

    fn derivative(&self) -> Result<Func1Ref> {
        let exp: Func1Ref = Arc::new(*self);
        Ok(Arc::new(TimesConstant::new(exp, self.rate)))
    }

    fn write(&self, arg: &str) -> String {
        format!("\\exp({})", write_scaled_arg(self.rate, arg))
    }
}

/// A natural logarithm, f(x) = ln(ωx).
///
/// Only meaningful for ωx > 0; outside that domain the result is whatever
/// `f64::ln` returns (NaN or -inf).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Log {
    scale: f64,
}

impl Log {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn from_params(params: &[f64]) -> Result<Self> {
        single_parameter("log", params).map(Self::new)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Func1 for Log {
    fn type_name(&self) -> &'static str {
        "log"
    }

    fn eval(&self, x: f64) -> f64 {
        (self.scale * x).ln()
    }

    /// The derivative is built as ω·x⁻¹.
    fn derivative(&self) -> Result<Func1Ref> {
        let inv: Func1Ref = Arc::new(Pow::new(-1.0));
        Ok(Arc::new(TimesConstant::new(inv, self.scale)))
    }

    fn write(&self, arg: &str) -> String {
        format!("\\ln({})", write_scaled_arg(self.scale, arg))
    }
}

/// A power function, f(x) = x^p.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pow {
    exponent: f64,
}

impl Pow {
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    pub fn from_params(params: &[f64]) -> Result<Self> {
        single_parameter("pow", params).map(Self::new)
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl Func1 for Pow {
    fn type_name(&self) -> &'static str {
        "pow"
    }

    fn eval(&self, x: f64) -> f64 {
        x.powf(self.exponent)
    }

    fn derivative(&self) -> Result<Func1Ref> {
        if self.exponent == 0.0 {
            return Ok(Arc::new(Constant::new(0.0)));
        }
        if self.exponent == 1.0 {
            return Ok(Arc::new(Constant::new(1.0)));
        }
        let lowered: Func1Ref = Arc::new(Pow::new(self.exponent - 1.0));
        Ok(Arc::new(TimesConstant::new(lowered, self.exponent)))
    }

    fn write(&self, arg: &str) -> String {
        if self.exponent == 1.0 {
            arg.to_string()
        } else {
            format!("{}^{{{}}}", arg, self.exponent)
        }
    }

    fn order(&self) -> u8 {
        if self.exponent == 1.0 {
            ORDER_ATOM
        } else {
            ORDER_POWER
        }
    }
}
