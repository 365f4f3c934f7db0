//! Trapezoidal and Simpson integration of tabulated data.

use approx::assert_relative_eq;
use func1_rs::numerics::{simpson, trapezoidal};
use func1_rs::{new_func1_scalar, numerical_quadrature, Func1Error, QuadratureRule};
use ndarray::{array, Array1};

#[test]
fn test_trapezoidal_four_points() {
    let x = array![0.0, 0.3, 1.0, 1.2];
    let f = array![1.0, 2.0, 5.0, 0.0];
    // numpy.trapz(f, x)
    assert_relative_eq!(trapezoidal(&f, &x).unwrap(), 3.4, epsilon = 1e-5);
    assert_relative_eq!(
        numerical_quadrature("trapezoidal", &f, &x).unwrap(),
        trapezoidal(&f, &x).unwrap(),
        epsilon = 1e-10
    );
}

#[test]
fn test_simpson_odd_point_count() {
    let x = array![0.0, 0.3, 1.0];
    let f = array![1.0, 2.0, 5.0];
    // scipy.integrate.simpson(f, x)
    assert_relative_eq!(simpson(&f, &x).unwrap(), 2.84127, epsilon = 1e-5);
    assert_relative_eq!(
        numerical_quadrature("simpson", &f, &x).unwrap(),
        simpson(&f, &x).unwrap(),
        epsilon = 1e-10
    );
}

#[test]
fn test_simpson_even_point_count() {
    let x = array![0.0, 0.3, 1.0, 1.2];
    let f = array![1.0, 2.0, 5.0, 0.0];
    // Simpson over the first two intervals, trapezoid over the last
    assert_relative_eq!(simpson(&f, &x).unwrap(), 3.34127, epsilon = 1e-5);
    assert_relative_eq!(simpson(&f, &x).unwrap(), 2.84127 + 0.5, epsilon = 1e-5);
}

#[test]
fn test_integrating_a_function_object() {
    let f = new_func1_scalar("sin", 1.0).unwrap();
    let x = Array1::linspace(0.0, std::f64::consts::PI, 201);
    let y = f.eval_array(&x);
    assert_relative_eq!(simpson(&y, &x).unwrap(), 2.0, epsilon = 1e-8);
    assert_relative_eq!(trapezoidal(&y, &x).unwrap(), 2.0, epsilon = 1e-4);
}

#[test]
fn test_unknown_rule() {
    let x = array![0.0, 1.0];
    let f = array![1.0, 1.0];
    match numerical_quadrature("romberg", &f, &x) {
        Err(Func1Error::UnknownType { category, name }) => {
            assert_eq!(category, "quadrature rule");
            assert_eq!(name, "romberg");
        }
        other => panic!("expected UnknownType, got {:?}", other),
    }
}

#[test]
fn test_rule_parsing_and_serde() {
    let rule: QuadratureRule = "simpson".parse().unwrap();
    assert_eq!(rule, QuadratureRule::Simpson);
    assert_eq!(serde_json::to_string(&rule).unwrap(), "\"simpson\"");
    let back: QuadratureRule = serde_json::from_str("\"trapezoidal\"").unwrap();
    assert_eq!(back, QuadratureRule::Trapezoidal);
    assert!("Simpson".parse::<QuadratureRule>().is_err());
}

#[test]
fn test_mismatched_lengths() {
    let x = array![0.0, 1.0, 2.0];
    let f = array![1.0, 1.0];
    assert!(matches!(
        simpson(&f, &x),
        Err(Func1Error::InvalidInput(_))
    ));
}
