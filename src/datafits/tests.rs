use ndarray::{array, Array1, Array2};
use num_complex::Complex;

use crate::datafits::Quadratic;
use crate::error::ProxGradError;
use crate::gradient::{estimate_gradient, DiffMode};
use crate::helpers::test_helpers::*;
use crate::traits::{Gradient, Objective};

fn datafit() -> Quadratic<f64> {
    let X = Array2::from_shape_vec((2, 3), vec![3.4, -1.2, 2.3, 9.8, -2.7, -0.2]).unwrap();
    let y = Array1::from_shape_vec(2, vec![1.2, -0.9]).unwrap();
    Quadratic::new(X, y).unwrap()
}

#[test]
fn test_value() {
    let w = array![1., -1., 0.5];
    // Xw - y = [3.4 + 1.2 + 1.15 - 1.2, 9.8 + 2.7 - 0.1 + 0.9] = [4.55, 13.3]
    let expected = 0.5 * (4.55f64.powi(2) + 13.3f64.powi(2));
    approx::assert_abs_diff_eq!(datafit().value(w.view()), expected, epsilon = 1e-12);
}

#[test]
fn test_gradient() {
    let w = array![1., -1., 0.5];
    let r = array![4.55, 13.3];
    let expected = array![
        3.4 * r[0] + 9.8 * r[1],
        -1.2 * r[0] - 2.7 * r[1],
        2.3 * r[0] - 0.2 * r[1]
    ];
    assert_array_all_close(datafit().gradient(w.view()).view(), expected.view(), 1e-12);
}

#[test]
fn test_complex_value_extends_real_value() {
    let df = datafit();
    let w = array![0.7, 2.1, -1.3];
    let z = w.mapv(Complex::from);
    let value = df.value_complex(z.view()).unwrap();
    approx::assert_abs_diff_eq!(value.re, df.value(w.view()), epsilon = 1e-12);
    assert_eq!(value.im, 0.);
}

#[test]
fn test_estimated_gradient_matches_exact() {
    let (X, y) = generate_random_data(30, 8);
    let df = Quadratic::new(X, y).unwrap();
    let w = Array1::from_vec(fill_random_vector(8, 7, 1.));
    let exact = df.gradient(w.view());

    let complex_step = estimate_gradient(w.view(), &df, DiffMode::ComplexStep, 1e-20).unwrap();
    assert_array_all_close(complex_step.view(), exact.view(), 1e-10);

    // The datafit is quadratic: central differences only suffer from rounding
    let central = estimate_gradient(w.view(), &df, DiffMode::Central, 1e-4).unwrap();
    assert_array_all_close(central.view(), exact.view(), 1e-6);
}

#[test]
fn test_lipschitz() {
    let df = Quadratic::new(Array2::from_diag(&array![1., 3., 2.]), Array1::zeros(3)).unwrap();
    approx::assert_abs_diff_eq!(df.lipschitz(), 9., epsilon = 1e-8);
}

#[test]
fn test_least_squares_solves_normal_equations() {
    let (X, y) = generate_random_data(20, 4);
    let df = Quadratic::new(X, y).unwrap();
    let w_ls = df.least_squares().unwrap();
    // The gradient vanishes at the least-squares solution
    assert_array_all_close(df.gradient(w_ls.view()).view(), Array1::zeros(4).view(), 1e-9);
}

#[test]
fn test_least_squares_rank_deficient() {
    let X = Array2::from_shape_vec((3, 2), vec![1., 2., 2., 4., 3., 6.]).unwrap();
    let df = Quadratic::new(X, array![1., 2., 3.]).unwrap();
    match df.least_squares() {
        Err(ProxGradError::SingularSystem) => (),
        _ => panic!("Should return an error but didn't"),
    }
}

#[test]
fn test_shape_mismatch() {
    let X = Array2::<f64>::zeros((3, 2));
    let err = Quadratic::new(X, Array1::zeros(2)).unwrap_err();
    assert_eq!(
        err,
        ProxGradError::ShapeMismatch {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_declared_dimension() {
    let df = datafit();
    assert_eq!(Objective::dimension(&df), Some(3));
    assert_eq!(Gradient::dimension(&df), Some(3));
}

#[test]
#[should_panic]
fn test_complex_value_rejects_wrong_length() {
    let z = array![0.1, 0.2].mapv(Complex::from);
    datafit().value_complex(z.view());
}
