//! Tabulated functions: piecewise-linear and piecewise-constant interpolation
//! through a sorted set of knots.

use crate::error::{Func1Error, Result};
use crate::func1::{Func1, Func1Ref};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How values between knots are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabulationMode {
    /// Straight line between neighbouring knots.
    Linear,
    /// Hold the value of the greatest knot at or below the argument.
    Previous,
}

impl TabulationMode {
    fn type_name(self) -> &'static str {
        match self {
            TabulationMode::Linear => "tabulated-linear",
            TabulationMode::Previous => "tabulated-previous",
        }
    }
}

/// A function defined by knots `(x[i], y[i])` with non-decreasing `x`.
///
/// Outside the knot range the function is clamped to the first or last
/// ordinate. Repeated abscissas are allowed and produce a jump.
#[derive(Debug, Clone, PartialEq)]
pub struct Tabulated {
    x: Vec<f64>,
    y: Vec<f64>,
    mode: TabulationMode,
}

impl Tabulated {
    /// Create a tabulated function from abscissas and ordinates.
    ///
    /// # Errors
    ///
    /// * `Func1Error::InvalidParameterShape` if the lengths differ or fewer than two knots
    ///   are given
    /// * `Func1Error::InvalidInput` if an abscissa is not finite or the abscissas decrease
    pub fn new(x: Vec<f64>, y: Vec<f64>, mode: TabulationMode) -> Result<Self> {
        let type_name = mode.type_name();
        if x.len() != y.len() {
            return Err(Func1Error::InvalidParameterShape {
                type_name: type_name.to_string(),
                message: format!(
                    "invalid parameter count: {} abscissas but {} ordinates",
                    x.len(),
                    y.len()
                ),
            });
        }
        if x.len() < 2 {
            return Err(Func1Error::parameter_count(type_name, "at least 2 knots", x.len()));
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(Func1Error::InvalidInput(format!(
                "'{}' abscissas must be finite",
                type_name
            )));
        }
        if x.windows(2).any(|w| w[1] < w[0]) {
            return Err(Func1Error::InvalidInput(format!(
                "'{}' abscissas must be non-decreasing",
                type_name
            )));
        }
        Ok(Self { x, y, mode })
    }

    /// Builds the function from `[x0..xk, y0..yk]`: abscissas first, then ordinates.
    pub fn from_params(params: &[f64], mode: TabulationMode) -> Result<Self> {
        if params.len() < 4 || params.len() % 2 != 0 {
            return Err(Func1Error::parameter_count(
                mode.type_name(),
                "an even count of at least 4",
                params.len(),
            ));
        }
        let (x, y) = params.split_at(params.len() / 2);
        Self::new(x.to_vec(), y.to_vec(), mode)
    }

    pub fn abscissas(&self) -> &[f64] {
        &self.x
    }

    pub fn ordinates(&self) -> &[f64] {
        &self.y
    }

    pub fn mode(&self) -> TabulationMode {
        self.mode
    }

    /// Number of knots at or below `t`.
    fn knots_at_or_below(&self, t: f64) -> usize {
        self.x.partition_point(|&k| k <= t)
    }
}

impl Func1 for Tabulated {
    fn type_name(&self) -> &'static str {
        self.mode.type_name()
    }

    fn eval(&self, t: f64) -> f64 {
        let n = self.x.len();
        // NaN compares false against every knot
        if t.is_nan() {
            return t;
        }
        if t < self.x[0] {
            return self.y[0];
        }
        match self.mode {
            TabulationMode::Previous => self.y[self.knots_at_or_below(t) - 1],
            TabulationMode::Linear => {
                if t >= self.x[n - 1] {
                    return self.y[n - 1];
                }
                // x[i] <= t < x[i + 1], so the segment has positive width
                let i = self.knots_at_or_below(t) - 1;
                let slope = (self.y[i + 1] - self.y[i]) / (self.x[i + 1] - self.x[i]);
                self.y[i] + slope * (t - self.x[i])
            }
        }
    }

    /// The derivative is a step function.
    ///
    /// For linear tabulation each knot carries the slope of the segment that
    /// starts there, so the derivative at a knot is the slope to its right.
    /// Outside the knot range, and for step functions everywhere, it is zero.
    fn derivative(&self) -> Result<Func1Ref> {
        let n = self.x.len();
        let (x, y) = match self.mode {
            TabulationMode::Linear => {
                let mut x = Vec::with_capacity(n + 1);
                let mut y = Vec::with_capacity(n + 1);
                x.push(self.x[0]);
                y.push(0.0);
                for i in 0..n - 1 {
                    let dx = self.x[i + 1] - self.x[i];
                    x.push(self.x[i]);
                    // Zero-width segments are jumps and are never selected.
                    y.push(if dx > 0.0 {
                        (self.y[i + 1] - self.y[i]) / dx
                    } else {
                        0.0
                    });
                }
                x.push(self.x[n - 1]);
                y.push(0.0);
                (x, y)
            }
            TabulationMode::Previous => (vec![self.x[0], self.x[n - 1]], vec![0.0, 0.0]),
        };
        log::trace!("derivative of '{}' with {} knots", self.type_name(), n);
        Ok(Arc::new(Tabulated::new(x, y, TabulationMode::Previous)?))
    }
}
