//! String-keyed construction of function objects.
//!
//! The factory offers one function per call shape: no arguments, a scalar, a
//! parameter vector, one operand, two operands, or an operand and a scalar.
//! Each looks the type name up in the catalog, checks that the catalog entry
//! accepts that shape, and only then builds the object. Names are
//! case-sensitive and no shape is ever coerced into another.
//!
//! ```
//! use func1_rs::factory::{new_func1_compound, new_func1_scalar};
//! use func1_rs::Func1;
//!
//! let s = new_func1_scalar("sin", 2.0).unwrap();
//! let c = new_func1_scalar("cos", 2.0).unwrap();
//! let f = new_func1_compound("sum", s, c).unwrap();
//! assert_eq!(f.type_name(), "sum");
//! assert!((f.eval(0.0) - 1.0).abs() < 1e-15);
//! ```

use crate::combinators::{
    Composite, Diff, Periodic, PlusConstant, Product, Ratio, Sum, TimesConstant,
};
use crate::error::{Func1Error, Result};
use crate::func1::{Func1, Func1Ref, Functor};
use crate::functions::{
    Arrhenius, Constant, Cos, Exp, Fourier, Gaussian, Log, Polynomial, Pow, Sin, Tabulated,
    TabulationMode,
};
use std::sync::Arc;

/// Default parameter for scalar leaves built without arguments.
const DEFAULT_SCALAR: f64 = 1.0;

/// The call shapes a catalog entry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `functor`: no arguments.
    Placeholder,
    /// One scalar, or a vector holding exactly one value.
    Scalar,
    /// A parameter vector of type-specific length.
    Vector,
    /// Two function operands.
    Compound,
    /// One function operand and a scalar.
    Modified,
}

const CATALOG: &[(&str, Shape)] = &[
    ("functor", Shape::Placeholder),
    ("constant", Shape::Scalar),
    ("sin", Shape::Scalar),
    ("cos", Shape::Scalar),
    ("exp", Shape::Scalar),
    ("log", Shape::Scalar),
    ("pow", Shape::Scalar),
    ("polynomial", Shape::Vector),
    ("Fourier", Shape::Vector),
    ("Gaussian", Shape::Vector),
    ("Arrhenius", Shape::Vector),
    ("tabulated-linear", Shape::Vector),
    ("tabulated-previous", Shape::Vector),
    ("sum", Shape::Compound),
    ("diff", Shape::Compound),
    ("product", Shape::Compound),
    ("ratio", Shape::Compound),
    ("composite", Shape::Compound),
    ("times-constant", Shape::Modified),
    ("plus-constant", Shape::Modified),
    ("periodic", Shape::Modified),
];

/// Names of every type the factory can build.
pub fn func1_types() -> Vec<&'static str> {
    CATALOG.iter().map(|(name, _)| *name).collect()
}

fn shape_of(type_name: &str) -> Result<Shape> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, shape)| *shape)
        .ok_or_else(|| Func1Error::UnknownType {
            category: "function type",
            name: type_name.to_string(),
        })
}

/// The error for a known type called with a shape it does not accept.
fn wrong_shape(type_name: &str, expected: Shape) -> Func1Error {
    match expected {
        Shape::Placeholder => {
            Func1Error::operand_configuration(type_name, "takes no parameters or operands")
        }
        Shape::Scalar => {
            Func1Error::operand_configuration(type_name, "requires a single scalar parameter")
        }
        Shape::Vector => {
            Func1Error::operand_configuration(type_name, "requires a parameter vector")
        }
        Shape::Compound => {
            Func1Error::operand_configuration(type_name, "requires two function operands")
        }
        Shape::Modified => Func1Error::operand_configuration(
            type_name,
            "requires one function operand and a scalar",
        ),
    }
}

fn built(f: Func1Ref) -> Result<Func1Ref> {
    log::debug!("constructed '{}'", f.type_name());
    Ok(f)
}

/// Build a type with its default parameters.
///
/// Scalar leaves get the parameter 1.0, and `functor` gives the placeholder.
///
/// # Errors
///
/// * `Func1Error::UnknownType` if `type_name` is not in the catalog
/// * `Func1Error::InvalidParameterShape` if the type needs parameters or operands
pub fn new_func1(type_name: &str) -> Result<Func1Ref> {
    match shape_of(type_name)? {
        Shape::Placeholder => built(Arc::new(Functor::new())),
        Shape::Scalar => new_func1_scalar(type_name, DEFAULT_SCALAR),
        shape => Err(wrong_shape(type_name, shape)),
    }
}

/// Build a single-parameter leaf.
///
/// # Errors
///
/// * `Func1Error::UnknownType` if `type_name` is not in the catalog
/// * `Func1Error::InvalidParameterShape` if the type does not take one scalar
pub fn new_func1_scalar(type_name: &str, c: f64) -> Result<Func1Ref> {
    match shape_of(type_name)? {
        Shape::Scalar => new_func1_params(type_name, &[c]),
        shape => Err(wrong_shape(type_name, shape)),
    }
}

/// Build a leaf from a parameter vector.
///
/// Single-parameter leaves accept a vector of length one. The expected
/// lengths of the other leaves are listed on their types.
///
/// # Errors
///
/// * `Func1Error::UnknownType` if `type_name` is not in the catalog
/// * `Func1Error::InvalidParameterShape` if the length is wrong or the type is a combinator
/// * `Func1Error::InvalidInput` if tabulated abscissas are not sorted
pub fn new_func1_params(type_name: &str, params: &[f64]) -> Result<Func1Ref> {
    let shape = shape_of(type_name)?;
    if !matches!(shape, Shape::Scalar | Shape::Vector) {
        return Err(wrong_shape(type_name, shape));
    }
    let f: Func1Ref = match type_name {
        "constant" => Arc::new(Constant::from_params(params)?),
        "sin" => Arc::new(Sin::from_params(params)?),
        "cos" => Arc::new(Cos::from_params(params)?),
        "exp" => Arc::new(Exp::from_params(params)?),
        "log" => Arc::new(Log::from_params(params)?),
        "pow" => Arc::new(Pow::from_params(params)?),
        "polynomial" => Arc::new(Polynomial::new(params.to_vec())?),
        "Fourier" => Arc::new(Fourier::from_params(params)?),
        "Gaussian" => Arc::new(Gaussian::from_params(params)?),
        "Arrhenius" => Arc::new(Arrhenius::from_params(params)?),
        "tabulated-linear" => Arc::new(Tabulated::from_params(params, TabulationMode::Linear)?),
        "tabulated-previous" => {
            Arc::new(Tabulated::from_params(params, TabulationMode::Previous)?)
        }
        _ => return Err(wrong_shape(type_name, shape)),
    };
    built(f)
}

/// Build from a single function operand.
///
/// No catalog entry takes exactly one operand, so this only distinguishes
/// unknown names from known names used with the wrong shape.
///
/// # Errors
///
/// * `Func1Error::UnknownType` if `type_name` is not in the catalog
/// * `Func1Error::InvalidParameterShape` otherwise
pub fn new_func1_unary(type_name: &str, _f: Func1Ref) -> Result<Func1Ref> {
    let shape = shape_of(type_name)?;
    Err(wrong_shape(type_name, shape))
}

/// Build a binary combinator: `sum`, `diff`, `product`, `ratio` or `composite`.
///
/// For `composite` the result is `f(g(x))`.
///
/// # Errors
///
/// * `Func1Error::UnknownType` if `type_name` is not in the catalog
/// * `Func1Error::InvalidParameterShape` if the type does not take two operands
pub fn new_func1_compound(type_name: &str, f: Func1Ref, g: Func1Ref) -> Result<Func1Ref> {
    let shape = shape_of(type_name)?;
    let h: Func1Ref = match type_name {
        "sum" => Arc::new(Sum::new(f, g)),
        "diff" => Arc::new(Diff::new(f, g)),
        "product" => Arc::new(Product::new(f, g)),
        "ratio" => Arc::new(Ratio::new(f, g)),
        "composite" => Arc::new(Composite::new(f, g)),
        _ => return Err(wrong_shape(type_name, shape)),
    };
    built(h)
}

/// Build a scalar-modified combinator: `times-constant`, `plus-constant` or `periodic`.
///
/// # Errors
///
/// * `Func1Error::UnknownType` if `type_name` is not in the catalog
/// * `Func1Error::InvalidParameterShape` if the type does not take an operand and a scalar
/// * `Func1Error::InvalidInput` for a non-positive period
pub fn new_func1_modified(type_name: &str, f: Func1Ref, c: f64) -> Result<Func1Ref> {
    let shape = shape_of(type_name)?;
    let h: Func1Ref = match type_name {
        "times-constant" => Arc::new(TimesConstant::new(f, c)),
        "plus-constant" => Arc::new(PlusConstant::new(f, c)),
        "periodic" => Arc::new(Periodic::new(f, c)?),
        _ => return Err(wrong_shape(type_name, shape)),
    };
    built(h)
}
