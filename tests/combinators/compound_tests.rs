//! Binary combinators built through the factory.

use approx::assert_relative_eq;
use func1_rs::{new_func1_compound, new_func1_scalar, Func1Error, Func1Ref};
use std::sync::Arc;

const OMEGA: f64 = 2.0;

fn sin_cos() -> (Func1Ref, Func1Ref) {
    (
        new_func1_scalar("sin", OMEGA).unwrap(),
        new_func1_scalar("cos", OMEGA).unwrap(),
    )
}

#[test]
fn test_sum() {
    let (s, c) = sin_cos();
    let f = new_func1_compound("sum", s, c).unwrap();
    assert_eq!(f.type_name(), "sum");
    assert_eq!(f.eval(0.0), 1.0);
    assert_eq!(f.eval(0.5), (OMEGA * 0.5).sin() + (OMEGA * 0.5).cos());

    let df = f.derivative().unwrap();
    assert_relative_eq!(
        df.eval(0.5),
        OMEGA * ((OMEGA * 0.5).cos() - (OMEGA * 0.5).sin()),
        epsilon = 1e-14
    );
}

#[test]
fn test_diff() {
    let (s, c) = sin_cos();
    let f = new_func1_compound("diff", s, c).unwrap();
    assert_eq!(f.type_name(), "diff");
    assert_eq!(f.eval(0.0), -1.0);
    assert_eq!(f.eval(0.5), (OMEGA * 0.5).sin() - (OMEGA * 0.5).cos());

    let df = f.derivative().unwrap();
    assert_relative_eq!(
        df.eval(0.5),
        OMEGA * ((OMEGA * 0.5).cos() + (OMEGA * 0.5).sin()),
        epsilon = 1e-14
    );
}

#[test]
fn test_product() {
    let (s, c) = sin_cos();
    let f = new_func1_compound("product", s, c).unwrap();
    assert_eq!(f.type_name(), "product");
    assert_eq!(f.eval(0.0), 0.0);
    assert_eq!(f.eval(0.5), (OMEGA * 0.5).sin() * (OMEGA * 0.5).cos());

    let df = f.derivative().unwrap();
    assert_relative_eq!(
        df.eval(0.5),
        OMEGA * ((OMEGA * 0.5).cos().powi(2) - (OMEGA * 0.5).sin().powi(2)),
        epsilon = 1e-14
    );
}

#[test]
fn test_ratio() {
    let (s, c) = sin_cos();
    let f = new_func1_compound("ratio", s, c).unwrap();
    assert_eq!(f.type_name(), "ratio");
    assert_eq!(f.eval(0.0), 0.0);
    assert_eq!(f.eval(0.5), (OMEGA * 0.5).sin() / (OMEGA * 0.5).cos());

    let df = f.derivative().unwrap();
    assert_relative_eq!(
        df.eval(0.5),
        OMEGA / (OMEGA * 0.5).cos().powi(2),
        max_relative = 1e-14
    );
}

#[test]
fn test_composite() {
    let (s, c) = sin_cos();
    let f = new_func1_compound("composite", s, c).unwrap();
    assert_eq!(f.type_name(), "composite");
    assert_eq!(f.eval(0.0), OMEGA.sin());
    assert_eq!(f.eval(0.5), (OMEGA * (OMEGA * 0.5).cos()).sin());

    let df = f.derivative().unwrap();
    assert_relative_eq!(
        df.eval(0.5),
        -OMEGA * OMEGA * (OMEGA * 0.5).sin() * (OMEGA * (OMEGA * 0.5).cos()).cos(),
        epsilon = 1e-14
    );
}

#[test]
fn test_unsupported_operand_derivative_propagates() {
    let (s, _) = sin_cos();
    let gauss = func1_rs::new_func1_params("Gaussian", &[1.0, 0.0, 1.0]).unwrap();
    let f = new_func1_compound("product", s, gauss).unwrap();
    assert!(f.eval(0.3).is_finite());
    match f.derivative() {
        Err(Func1Error::UnsupportedOperation { type_name, .. }) => {
            assert_eq!(type_name, "Gaussian")
        }
        other => panic!("expected UnsupportedOperation, got {:?}", other),
    }
}

#[test]
fn test_shared_operand() {
    let s = new_func1_scalar("sin", OMEGA).unwrap();
    let square = new_func1_compound("product", s.clone(), s.clone()).unwrap();
    assert_eq!(Arc::strong_count(&s), 3);
    assert_relative_eq!(square.eval(0.4), (OMEGA * 0.4).sin().powi(2));

    // the derivative keeps its own handles and outlives the original tree
    let dsquare = square.derivative().unwrap();
    drop(square);
    assert_eq!(Arc::strong_count(&s), 3);
    assert_relative_eq!(
        dsquare.eval(0.4),
        2.0 * OMEGA * (OMEGA * 0.4).sin() * (OMEGA * 0.4).cos(),
        epsilon = 1e-14
    );
}

#[test]
fn test_unknown_compound_type() {
    let (s, c) = sin_cos();
    assert!(matches!(
        new_func1_compound("foo", s, c),
        Err(Func1Error::UnknownType { .. })
    ));
}
