//! # func1-rs
//!
//! `func1-rs` provides scalar functions of one variable that can be composed
//! at runtime and differentiated analytically.
//!
//! The library provides:
//! - A catalog of leaf functions (trigonometric, exponential, polynomial,
//!   Fourier, Gaussian, Arrhenius, tabulated)
//! - Combinators for sums, differences, products, ratios, composition,
//!   scaling, shifting and periodic extension
//! - A string-keyed factory for building function trees from names
//! - Weighted polynomial least-squares fitting and trapezoidal/Simpson quadrature
//!
//! ## Basic Usage
//!
//! ```
//! use func1_rs::{new_func1_compound, new_func1_scalar, Func1};
//!
//! let f = new_func1_compound(
//!     "product",
//!     new_func1_scalar("sin", 2.0).unwrap(),
//!     new_func1_scalar("exp", -1.0).unwrap(),
//! )
//! .unwrap();
//!
//! let df = f.derivative().unwrap();
//! let x = 0.3_f64;
//! let expected = 2.0 * (2.0 * x).cos() * (-x).exp() - (2.0 * x).sin() * (-x).exp();
//! assert!((df.eval(x) - expected).abs() < 1e-14);
//! ```

pub mod error;
pub mod func1;

pub mod combinators;
pub mod factory;
pub mod functions;

pub mod numerics;
pub mod utils;

// Re-exports for convenience
pub use error::{Func1Error, Result};
pub use func1::{Func1, Func1Ref, Functor};

pub use factory::{
    func1_types, new_func1, new_func1_compound, new_func1_modified, new_func1_params,
    new_func1_scalar, new_func1_unary,
};

pub use numerics::{numerical_quadrature, QuadratureRule};

#[cfg(feature = "fit")]
pub use numerics::{polyfit, PolyfitConfig, PolyfitResult};

#[cfg(feature = "parallel")]
pub use utils::eval_parallel;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
