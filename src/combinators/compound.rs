//! Binary combinators over two function objects.
//!
//! Derivatives follow the usual calculus rules and are built from the
//! operands' own derivatives, so a combinator is differentiable exactly when
//! every operand it needs to differentiate is.

use crate::error::Result;
use crate::func1::{
    write_grouped, Func1, Func1Ref, ORDER_ADDITIVE, ORDER_ATOM, ORDER_MULTIPLICATIVE,
};
use std::sync::Arc;

/// Sum of two functions, f(x) + g(x).
#[derive(Debug, Clone)]
pub struct Sum {
    f: Func1Ref,
    g: Func1Ref,
}

impl Sum {
    pub fn new(f: Func1Ref, g: Func1Ref) -> Self {
        Self { f, g }
    }

    pub fn operands(&self) -> (&Func1Ref, &Func1Ref) {
        (&self.f, &self.g)
    }
}

impl Func1 for Sum {
    fn type_name(&self) -> &'static str {
        "sum"
    }

    fn eval(&self, x: f64) -> f64 {
        self.f.eval(x) + self.g.eval(x)
    }

    fn derivative(&self) -> Result<Func1Ref> {
        Ok(Arc::new(Sum::new(self.f.derivative()?, self.g.derivative()?)))
    }

    fn write(&self, arg: &str) -> String {
        format!(
            "{} + {}",
            write_grouped(self.f.as_ref(), arg, ORDER_ADDITIVE),
            write_grouped(self.g.as_ref(), arg, ORDER_ADDITIVE)
        )
    }

    fn order(&self) -> u8 {
        ORDER_ADDITIVE
    }
}

/// Difference of two functions, f(x) - g(x).
#[derive(Debug, Clone)]
pub struct Diff {
    f: Func1Ref,
    g: Func1Ref,
}

impl Diff {
    pub fn new(f: Func1Ref, g: Func1Ref) -> Self {
        Self { f, g }
    }

    pub fn operands(&self) -> (&Func1Ref, &Func1Ref) {
        (&self.f, &self.g)
    }
}

impl Func1 for Diff {
    fn type_name(&self) -> &'static str {
        "diff"
    }

    fn eval(&self, x: f64) -> f64 {
        self.f.eval(x) - self.g.eval(x)
    }

    fn derivative(&self) -> Result<Func1Ref> {
        Ok(Arc::new(Diff::new(self.f.derivative()?, self.g.derivative()?)))
    }

    fn write(&self, arg: &str) -> String {
        format!(
            "{} - {}",
            write_grouped(self.f.as_ref(), arg, ORDER_ADDITIVE),
            write_grouped(self.g.as_ref(), arg, ORDER_MULTIPLICATIVE)
        )
    }

    fn order(&self) -> u8 {
        ORDER_ADDITIVE
    }
}

/// Product of two functions, f(x) * g(x).
#[derive(Debug, Clone)]
pub struct Product {
    f: Func1Ref,
    g: Func1Ref,
}

impl Product {
    pub fn new(f: Func1Ref, g: Func1Ref) -> Self {
        Self { f, g }
    }

    pub fn operands(&self) -> (&Func1Ref, &Func1Ref) {
        (&self.f, &self.g)
    }
}

impl Func1 for Product {
    fn type_name(&self) -> &'static str {
        "product"
    }

    fn eval(&self, x: f64) -> f64 {
        self.f.eval(x) * self.g.eval(x)
    }

    /// (f g)' = f' g + f g'
    fn derivative(&self) -> Result<Func1Ref> {
        log::trace!("product rule for '{}' * '{}'", self.f.type_name(), self.g.type_name());
        let df_g: Func1Ref = Arc::new(Product::new(self.f.derivative()?, self.g.clone()));
        let f_dg: Func1Ref = Arc::new(Product::new(self.f.clone(), self.g.derivative()?));
        Ok(Arc::new(Sum::new(df_g, f_dg)))
    }

    fn write(&self, arg: &str) -> String {
        format!(
            "{} {}",
            write_grouped(self.f.as_ref(), arg, ORDER_MULTIPLICATIVE),
            write_grouped(self.g.as_ref(), arg, ORDER_MULTIPLICATIVE)
        )
    }

    fn order(&self) -> u8 {
        ORDER_MULTIPLICATIVE
    }
}

/// Ratio of two functions, f(x) / g(x).
///
/// No guard against g(x) = 0; the result is whatever IEEE division gives.
#[derive(Debug, Clone)]
pub struct Ratio {
    f: Func1Ref,
    g: Func1Ref,
}

impl Ratio {
    pub fn new(f: Func1Ref, g: Func1Ref) -> Self {
        Self { f, g }
    }

    pub fn operands(&self) -> (&Func1Ref, &Func1Ref) {
        (&self.f, &self.g)
    }
}

impl Func1 for Ratio {
    fn type_name(&self) -> &'static str {
        "ratio"
    }

    fn eval(&self, x: f64) -> f64 {
        self.f.eval(x) / self.g.eval(x)
    }

    /// (f / g)' = (f' g - f g') / (g g)
    fn derivative(&self) -> Result<Func1Ref> {
        log::trace!("quotient rule for '{}' / '{}'", self.f.type_name(), self.g.type_name());
        let df_g: Func1Ref = Arc::new(Product::new(self.f.derivative()?, self.g.clone()));
        let f_dg: Func1Ref = Arc::new(Product::new(self.f.clone(), self.g.derivative()?));
        let numerator: Func1Ref = Arc::new(Diff::new(df_g, f_dg));
        let denominator: Func1Ref = Arc::new(Product::new(self.g.clone(), self.g.clone()));
        Ok(Arc::new(Ratio::new(numerator, denominator)))
    }

    fn write(&self, arg: &str) -> String {
        format!("\\frac{{{}}}{{{}}}", self.f.write(arg), self.g.write(arg))
    }

    fn order(&self) -> u8 {
        ORDER_MULTIPLICATIVE
    }
}

/// Function composition, f(g(x)).
#[derive(Debug, Clone)]
pub struct Composite {
    f: Func1Ref,
    g: Func1Ref,
}

impl Composite {
    /// Create `outer(inner(x))`.
    pub fn new(outer: Func1Ref, inner: Func1Ref) -> Self {
        Self { f: outer, g: inner }
    }

    pub fn operands(&self) -> (&Func1Ref, &Func1Ref) {
        (&self.f, &self.g)
    }
}

impl Func1 for Composite {
    fn type_name(&self) -> &'static str {
        "composite"
    }

    fn eval(&self, x: f64) -> f64 {
        self.f.eval(self.g.eval(x))
    }

    /// f(g(x))' = g'(x) * f'(g(x))
    fn derivative(&self) -> Result<Func1Ref> {
        log::trace!("chain rule for '{}' of '{}'", self.f.type_name(), self.g.type_name());
        let df_of_g: Func1Ref = Arc::new(Composite::new(self.f.derivative()?, self.g.clone()));
        Ok(Arc::new(Product::new(self.g.derivative()?, df_of_g)))
    }

    fn write(&self, arg: &str) -> String {
        let inner = write_grouped(self.g.as_ref(), arg, ORDER_ATOM);
        self.f.write(&inner)
    }
}
