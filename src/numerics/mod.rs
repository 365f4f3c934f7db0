//! Numerical utilities that work on sampled data rather than function objects.

#[cfg(feature = "fit")]
pub mod polyfit;
pub mod quadrature;

#[cfg(feature = "fit")]
pub use polyfit::{polyfit, polyfit_with_config, polyval, PolyfitConfig, PolyfitResult, SolveMethod};
pub use quadrature::{numerical_quadrature, simpson, trapezoidal, QuadratureRule};
