//! Unary combinators that modify one function object with a scalar.

use crate::error::{Func1Error, Result};
use crate::func1::{write_grouped, Func1, Func1Ref, ORDER_ADDITIVE, ORDER_MULTIPLICATIVE};
use std::sync::Arc;

/// A function scaled by a constant, A * f(x).
#[derive(Debug, Clone)]
pub struct TimesConstant {
    f: Func1Ref,
    factor: f64,
}

impl TimesConstant {
    pub fn new(f: Func1Ref, factor: f64) -> Self {
        Self { f, factor }
    }

    pub fn operand(&self) -> &Func1Ref {
        &self.f
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Func1 for TimesConstant {
    fn type_name(&self) -> &'static str {
        "times-constant"
    }

    fn eval(&self, x: f64) -> f64 {
        self.factor * self.f.eval(x)
    }

    fn derivative(&self) -> Result<Func1Ref> {
        Ok(Arc::new(TimesConstant::new(self.f.derivative()?, self.factor)))
    }

    fn write(&self, arg: &str) -> String {
        let operand = write_grouped(self.f.as_ref(), arg, ORDER_MULTIPLICATIVE);
        if self.factor == -1.0 {
            format!("-{}", operand)
        } else {
            format!("{} {}", self.factor, operand)
        }
    }

    fn order(&self) -> u8 {
        // A leading minus sign binds like a subtraction.
        if self.factor < 0.0 {
            ORDER_ADDITIVE
        } else {
            ORDER_MULTIPLICATIVE
        }
    }
}

/// A function shifted by a constant, f(x) + A.
#[derive(Debug, Clone)]
pub struct PlusConstant {
    f: Func1Ref,
    offset: f64,
}

impl PlusConstant {
    pub fn new(f: Func1Ref, offset: f64) -> Self {
        Self { f, offset }
    }

    pub fn operand(&self) -> &Func1Ref {
        &self.f
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Func1 for PlusConstant {
    fn type_name(&self) -> &'static str {
        "plus-constant"
    }

    fn eval(&self, x: f64) -> f64 {
        self.f.eval(x) + self.offset
    }

    fn derivative(&self) -> Result<Func1Ref> {
        self.f.derivative()
    }

    fn write(&self, arg: &str) -> String {
        let operand = write_grouped(self.f.as_ref(), arg, ORDER_ADDITIVE);
        if self.offset < 0.0 {
            format!("{} - {}", operand, -self.offset)
        } else {
            format!("{} + {}", operand, self.offset)
        }
    }

    fn order(&self) -> u8 {
        ORDER_ADDITIVE
    }
}

/// A function repeated with period `A`: f(x mod A), with the remainder in [0, A).
///
/// The derivative is not provided.
#[derive(Debug, Clone)]
pub struct Periodic {
    f: Func1Ref,
    period: f64,
}

impl Periodic {
    /// Create a periodic extension of `f` over [0, period).
    ///
    /// # Errors
    ///
    /// * `Func1Error::InvalidInput` if `period` is not positive and finite
    pub fn new(f: Func1Ref, period: f64) -> Result<Self> {
        if !(period.is_finite() && period > 0.0) {
            return Err(Func1Error::InvalidInput(format!(
                "period must be positive and finite, got {}",
                period
            )));
        }
        Ok(Self { f, period })
    }

    pub fn operand(&self) -> &Func1Ref {
        &self.f
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Maps `x` into [0, period).
    fn wrap(&self, x: f64) -> f64 {
        let r = x.rem_euclid(self.period);
        // rem_euclid can round up to the period for tiny negative inputs
        if r >= self.period {
            0.0
        } else {
            r
        }
    }
}

impl Func1 for Periodic {
    fn type_name(&self) -> &'static str {
        "periodic"
    }

    fn eval(&self, x: f64) -> f64 {
        self.f.eval(self.wrap(x))
    }

    fn write(&self, arg: &str) -> String {
        self.f
            .write(&format!("\\left({} \\bmod {}\\right)", arg, self.period))
    }
}
