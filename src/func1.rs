//! The `Func1` trait and the shared function-object handle.
//!
//! Every scalar function in the library, leaf or combinator, implements
//! [`Func1`]. Function objects are immutable once built and are passed around
//! as [`Func1Ref`], an `Arc<dyn Func1>`, so the same sub-expression can be
//! shared by several parents and evaluated from several threads at once.

use crate::error::{Func1Error, Result};
use ndarray::Array1;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an immutable function object.
pub type Func1Ref = Arc<dyn Func1>;

/// Precedence of additive expressions (`sum`, `diff`, `plus-constant`).
pub(crate) const ORDER_ADDITIVE: u8 = 0;
/// Precedence of multiplicative expressions (`product`, `ratio`, `times-constant`).
pub(crate) const ORDER_MULTIPLICATIVE: u8 = 1;
/// Precedence of powers (`pow`), whose written form ends in a superscript.
pub(crate) const ORDER_POWER: u8 = 2;
/// Precedence of atoms: leaves and function applications.
pub(crate) const ORDER_ATOM: u8 = 3;

/// A scalar function of one variable with an analytic derivative.
///
/// Implementors provide evaluation and a type tag. Functions whose derivative
/// is defined override [`Func1::derivative`] to build a new expression tree;
/// the default returns [`Func1Error::UnsupportedOperation`].
pub trait Func1: fmt::Debug + Send + Sync {
    /// The catalog tag the function is constructed with, e.g. `"sin"`.
    fn type_name(&self) -> &'static str;

    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Builds the derivative as a new, independent function object.
    ///
    /// # Errors
    ///
    /// * `Func1Error::UnsupportedOperation` if the type has no derivative
    fn derivative(&self) -> Result<Func1Ref> {
        Err(Func1Error::unsupported_derivative(self.type_name()))
    }

    /// Renders the function as a LaTeX-style string using `arg` as the variable name.
    fn write(&self, arg: &str) -> String {
        format!("\\mathrm{{{}}}({})", self.type_name(), arg)
    }

    /// Operator precedence used when parenthesizing operands in [`Func1::write`].
    fn order(&self) -> u8 {
        ORDER_ATOM
    }

    /// Evaluates the function at every element of `x`.
    fn eval_array(&self, x: &Array1<f64>) -> Array1<f64> {
        x.mapv(|v| self.eval(v))
    }
}

impl fmt::Display for dyn Func1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.write("x"))
    }
}

/// Writes `func` and wraps it in brackets when it binds looser than `min_order`.
pub(crate) fn write_grouped(func: &dyn Func1, arg: &str, min_order: u8) -> String {
    let s = func.write(arg);
    if func.order() < min_order {
        format!("\\left({}\\right)", s)
    } else {
        s
    }
}

/// Formats a coefficient in front of a variable, omitting a unit factor.
pub(crate) fn write_scaled_arg(c: f64, arg: &str) -> String {
    if c == 1.0 {
        arg.to_string()
    } else if c == -1.0 {
        format!("-{}", arg)
    } else {
        format!("{}{}", c, arg)
    }
}

/// The generic placeholder function.
///
/// It evaluates to zero everywhere and has no derivative; it exists so that a
/// host can reserve a slot for a function supplied later.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Functor;

impl Functor {
    pub fn new() -> Self {
        Functor
    }
}

impl Func1 for Functor {
    fn type_name(&self) -> &'static str {
        "functor"
    }

    fn eval(&self, _x: f64) -> f64 {
        0.0
    }
}
