//! Tabulated functions and their boundary conventions.

use approx::assert_relative_eq;
use func1_rs::functions::{Tabulated, TabulationMode};
use func1_rs::{new_func1_compound, new_func1_params, new_func1_scalar, Func1, Func1Error};

// knots (0, 1), (1, 0), (2, 1)
const KNOTS: [f64; 6] = [0.0, 1.0, 2.0, 1.0, 0.0, 1.0];

#[test]
fn test_tabulated_linear() {
    let f = new_func1_params("tabulated-linear", &KNOTS).unwrap();
    assert_eq!(f.type_name(), "tabulated-linear");
    assert_eq!(f.eval(0.0), 1.0);
    assert_eq!(f.eval(0.5), 0.5);
    assert_eq!(f.eval(1.0), 0.0);
    assert_relative_eq!(f.eval(1.2), 0.2, epsilon = 1e-15);
    assert_eq!(f.eval(2.0), 1.0);

    let df = f.derivative().unwrap();
    assert_eq!(df.eval(0.5), -1.0);
    assert_eq!(df.eval(1.5), 1.0);
}

#[test]
fn test_tabulated_linear_clamps_outside_range() {
    let f = new_func1_params("tabulated-linear", &KNOTS).unwrap();
    assert_eq!(f.eval(-10.0), 1.0);
    assert_eq!(f.eval(10.0), 1.0);

    let df = f.derivative().unwrap();
    assert_eq!(df.eval(-10.0), 0.0);
    assert_eq!(df.eval(10.0), 0.0);
}

#[test]
fn test_tabulated_linear_derivative_at_knots() {
    let df = new_func1_params("tabulated-linear", &KNOTS)
        .unwrap()
        .derivative()
        .unwrap();
    // A knot takes the slope of the segment that starts there.
    assert_eq!(df.eval(1.0 - 1e-12), -1.0);
    assert_eq!(df.eval(1.0), 1.0);
    assert_eq!(df.eval(1.0 + 1e-12), 1.0);
}

#[test]
fn test_tabulated_previous() {
    let f = new_func1_params("tabulated-previous", &KNOTS).unwrap();
    assert_eq!(f.type_name(), "tabulated-previous");
    assert_eq!(f.eval(0.0), 1.0);
    assert_eq!(f.eval(0.5), 1.0);
    assert_eq!(f.eval(1.0 - 1e-12), 1.0);
    assert_eq!(f.eval(1.0), 0.0);
    assert_eq!(f.eval(1.0 + 1e-12), 0.0);
    assert_eq!(f.eval(1.2), 0.0);
    assert_eq!(f.eval(2.0 - 1e-12), 0.0);
    assert_eq!(f.eval(2.0 + 1e-12), 1.0);

    let df = f.derivative().unwrap();
    assert_eq!(df.eval(0.5), 0.0);
    assert_eq!(df.eval(1.5), 0.0);
}

#[test]
fn test_tabulated_parameter_shape() {
    // odd length
    assert!(matches!(
        new_func1_params("tabulated-linear", &[0.0, 1.0, 2.0]),
        Err(Func1Error::InvalidParameterShape { .. })
    ));
    // single knot
    assert!(matches!(
        new_func1_params("tabulated-previous", &[0.0, 1.0]),
        Err(Func1Error::InvalidParameterShape { .. })
    ));
    // unsorted abscissas
    assert!(matches!(
        new_func1_params("tabulated-linear", &[1.0, 0.0, 2.0, 3.0]),
        Err(Func1Error::InvalidInput(_))
    ));
}

#[test]
fn test_direct_construction() {
    let f = Tabulated::new(vec![0.0, 2.0], vec![0.0, 4.0], TabulationMode::Linear).unwrap();
    assert_eq!(f.mode(), TabulationMode::Linear);
    assert_eq!(f.abscissas(), &[0.0, 2.0]);
    assert_eq!(f.ordinates(), &[0.0, 4.0]);
    assert_eq!(f.eval(1.0), 2.0);
    assert!(Tabulated::new(vec![0.0, 1.0], vec![0.0], TabulationMode::Previous).is_err());
}

#[test]
fn test_nan_argument_returns_nan() {
    for name in ["tabulated-linear", "tabulated-previous"] {
        let f = new_func1_params(name, &KNOTS).unwrap();
        assert!(f.eval(f64::NAN).is_nan(), "{} did not pass NaN through", name);
    }

    // ln(x) is NaN for x < 0 and feeds the table
    let f = new_func1_compound(
        "composite",
        new_func1_params("tabulated-linear", &KNOTS).unwrap(),
        new_func1_scalar("log", 1.0).unwrap(),
    )
    .unwrap();
    assert!(f.eval(-1.0).is_nan());
    assert_relative_eq!(f.eval(1.0), 1.0);
}
