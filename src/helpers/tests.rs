use ndarray::{array, Array1, Array2};

use super::helpers::*;
use super::prox::*;
use super::test_helpers::assert_array_all_close;
use crate::error::ProxGradError;

#[test]
fn soft_thresholding_works() {
    assert_eq!(soft_thresholding(3.5, 1.5), 2.);
    assert_eq!(soft_thresholding(-3.5, 1.5), -2.);
    assert_eq!(soft_thresholding(0.7, 1.5), 0.);
}

#[test]
fn hard_thresholding_works() {
    assert_eq!(hard_thresholding(3.5, 1.5), 3.5);
    assert_eq!(hard_thresholding(-3.5, 1.5), -3.5);
    assert_eq!(hard_thresholding(-1.5, 1.5), 0.);
    assert_eq!(hard_thresholding(0.2, 1.5), 0.);
}

#[test]
fn solve_lin_sys_works() {
    let mat = array![[26., 8., 15.], [8., 14., 5.], [15., 5., 14.]];
    let b = array![1., 1., 1.];
    let res = solve_lin_sys(mat.view(), b.view()).unwrap();
    assert_array_all_close(mat.dot(&res).view(), b.view(), 1e-10);
}

#[test]
fn solve_lin_sys_needs_pivoting() {
    let mat = array![[0., 2., 1.], [1., 1., 0.], [3., 0., 1.]];
    let b = array![3., 2., 4.];
    let res = solve_lin_sys(mat.view(), b.view()).unwrap();
    assert_array_all_close(res.view(), array![1., 1., 1.].view(), 1e-12);
}

#[test]
fn solve_lin_sys_returns_error() {
    let mat = Array2::<f64>::zeros((3, 3));
    let b = array![1., 2., 3.];
    match solve_lin_sys(mat.view(), b.view()) {
        Err(ProxGradError::SingularSystem) => (),
        _ => panic!("Should return an error but didn't"),
    }
}

#[test]
fn power_iteration_works() {
    let mat = array![[4., 1., 0.], [1., 3., 0.], [0., 0., 1.]];
    // Largest eigenvalue of the leading 2x2 block: (7 + sqrt(5)) / 2
    let expected = (7. + 5f64.sqrt()) / 2.;
    let eig = power_iteration(mat.view(), 1000, 1e-14);
    approx::assert_abs_diff_eq!(eig, expected, epsilon = 1e-8);
}

#[test]
fn vandermonde_works() {
    let grid = array![-1., 0.5, 2.];
    let mat = vandermonde(grid.view(), 3);
    let expected = array![
        [1., -1., 1., -1.],
        [1., 0.5, 0.25, 0.125],
        [1., 2., 4., 8.]
    ];
    assert_eq!(mat, expected);
}

#[test]
fn count_nonzeros_works() {
    let w: Array1<f64> = array![0., 1.2, 0., -0.3, 0.];
    assert_eq!(count_nonzeros(w.view()), 2);
}
