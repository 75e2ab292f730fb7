extern crate proxgrad;

use ndarray::Array1;
use proxgrad::{
    datafits::Quadratic,
    gradient::{estimate_gradient, DiffMode, FiniteDifference, GradientParams},
    helpers::{
        helpers::count_nonzeros,
        test_helpers::{generate_polynomial_data, max_abs_diff},
    },
    penalties::L0,
    solver::ProxGradSolver,
    traits::Gradient,
};

fn main() {
    let (x, y, w_ref) = generate_polynomial_data(0.1, 42);
    let datafit = Quadratic::new(x, y).unwrap();
    let w0 = Array1::<f64>::zeros(datafit.n_features());

    // Finite differences against the exact gradient
    println!("#### Gradient estimation at the reference model...");
    let exact = datafit.gradient(w_ref.view());
    for mode in [
        DiffMode::Forward,
        DiffMode::Backward,
        DiffMode::Central,
        DiffMode::ComplexStep,
    ] {
        let estimated = estimate_gradient(w_ref.view(), &datafit, mode, 1e-6).unwrap();
        println!(
            "{:>12} :: max error {:e}",
            mode,
            max_abs_diff(estimated.view(), exact.view())
        );
    }

    // Sparse regression with hard-thresholding
    let solver = ProxGradSolver::params()
        .step_size(0.0075)
        .n_iterations(5000)
        .prox_param(0.075)
        .build()
        .unwrap();

    println!("#### Fitting with the exact gradient...");
    let iterates = solver.solve_from(w0.view(), &datafit, &L0).unwrap();
    let w_exact = iterates.column(iterates.ncols() - 1).to_owned();

    println!("#### Fitting with the complex-step gradient...");
    let params = GradientParams::new().mode(DiffMode::ComplexStep);
    let estimated_grad = FiniteDifference::new(datafit.clone(), params).unwrap();
    let iterates = solver.solve_from(w0.view(), &estimated_grad, &L0).unwrap();
    let w_estimated = iterates.column(iterates.ncols() - 1).to_owned();

    let w_ls = datafit.least_squares().unwrap();

    println!("reference     :: {}", w_ref);
    println!("least squares :: {} ({} non-zeros)", w_ls, count_nonzeros(w_ls.view()));
    println!("pgm exact     :: {} ({} non-zeros)", w_exact, count_nonzeros(w_exact.view()));
    println!("pgm estimated :: {} ({} non-zeros)", w_estimated, count_nonzeros(w_estimated.view()));
}
