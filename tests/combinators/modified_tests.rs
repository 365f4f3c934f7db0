//! Scalar-modified combinators built through the factory.

use approx::assert_relative_eq;
use func1_rs::{new_func1_modified, new_func1_scalar, Func1Error};

const OMEGA: f64 = 2.0;
const A: f64 = 1.234;

#[test]
fn test_times_constant() {
    let f =
        new_func1_modified("times-constant", new_func1_scalar("sin", OMEGA).unwrap(), A).unwrap();
    assert_eq!(f.type_name(), "times-constant");
    assert_eq!(f.eval(0.0), 0.0);
    assert_relative_eq!(f.eval(0.5), (OMEGA * 0.5).sin() * A);

    let df = f.derivative().unwrap();
    assert_relative_eq!(df.eval(0.5), A * OMEGA * (OMEGA * 0.5).cos(), epsilon = 1e-15);
}

#[test]
fn test_plus_constant() {
    let f =
        new_func1_modified("plus-constant", new_func1_scalar("sin", OMEGA).unwrap(), A).unwrap();
    assert_eq!(f.type_name(), "plus-constant");
    assert_eq!(f.eval(0.0), A);
    assert_eq!(f.eval(0.5), (OMEGA * 0.5).sin() + A);

    let df = f.derivative().unwrap();
    assert_relative_eq!(df.eval(0.5), OMEGA * (OMEGA * 0.5).cos(), epsilon = 1e-15);
}

#[test]
fn test_periodic() {
    let f = new_func1_modified("periodic", new_func1_scalar("sin", OMEGA).unwrap(), A).unwrap();
    assert_eq!(f.type_name(), "periodic");
    assert_eq!(f.eval(0.0), f.eval(A));
    assert_relative_eq!(f.eval(0.5), f.eval(0.5 + A), epsilon = 1e-14);
    assert_relative_eq!(f.eval(0.5), f.eval(0.5 - 3.0 * A), epsilon = 1e-14);
    assert!(matches!(
        f.derivative(),
        Err(Func1Error::UnsupportedOperation { .. })
    ));
}

#[test]
fn test_periodic_rejects_non_positive_period() {
    let s = new_func1_scalar("sin", OMEGA).unwrap();
    assert!(matches!(
        new_func1_modified("periodic", s.clone(), 0.0),
        Err(Func1Error::InvalidInput(_))
    ));
    assert!(new_func1_modified("periodic", s, -A).is_err());
}

#[test]
fn test_unknown_modifier() {
    let s = new_func1_scalar("sin", OMEGA).unwrap();
    assert!(matches!(
        new_func1_modified("scale", s, A),
        Err(Func1Error::UnknownType { .. })
    ));
}
