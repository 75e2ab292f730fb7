use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{ProxGradError, Result};
use crate::gradient::check_dimension;
use crate::traits::{Gradient, ProxOperator};
use crate::Float;

pub use hyperparams::{ProxGradParams, ProxGradValidParams};


pub mod hyperparams;

/// Proximal gradient solver
///
/// Minimizes a composite objective `f(x) + g(x)` where `f` is smooth and `g`
/// has a computable proximal operator, with a constant step size and a fixed
/// iteration budget. There is no stopping criterion and no divergence check:
/// a step size that is too large fills the remaining iterates with
/// non-finite values, see [`first_non_finite_iterate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProxGradSolver<F> {
    params: ProxGradValidParams<F>,
}

impl<F: Float> ProxGradSolver<F> {
    pub fn new(params: ProxGradValidParams<F>) -> Self {
        ProxGradSolver { params }
    }

    /// Create default solver hyper parameters
    pub fn params() -> ProxGradParams<F> {
        ProxGradParams::new()
    }

    pub fn valid_params(&self) -> &ProxGradValidParams<F> {
        &self.params
    }

    /// Runs the proximal gradient iteration in place.
    ///
    /// `iterates` has shape `(n_features, n_iterations)`. Its first column is
    /// the initial guess and is left untouched; every following column `k` is
    /// overwritten with `prox(x_{k-1} - step_size * grad(x_{k-1}), prox_param)`.
    /// The last column holds the final estimate. The number of iterations is
    /// the width of the buffer.
    ///
    /// A buffer height that differs from the dimension declared by `grad`, or
    /// a gradient or prox result of the wrong length on the first step,
    /// returns [`ProxGradError::ShapeMismatch`] with the buffer untouched. A
    /// length mismatch on a later step leaves the columns computed so far
    /// written and the remaining ones as they were.
    pub fn solve<G, P>(&self, iterates: &mut Array2<F>, grad: &G, prox: &P) -> Result<()>
    where
        G: Gradient<F> + ?Sized,
        P: ProxOperator<F> + ?Sized,
    {
        let n_features = iterates.nrows();
        let n_iterations = iterates.ncols();
        if n_features == 0 {
            return Err(ProxGradError::EmptyPoint);
        }
        if n_iterations == 0 {
            return Err(ProxGradError::InvalidIterations(n_iterations));
        }
        check_dimension(grad.dimension(), n_features)?;

        let step_size = self.params.step_size();
        let prox_param = self.params.prox_param();
        let log_every = usize::max(n_iterations / 10, 1);

        for k in 1..n_iterations {
            let x_prev = iterates.column(k - 1);

            let grad_k = grad.gradient(x_prev);
            check_len(n_features, grad_k.len())?;

            let v = &x_prev - &(grad_k * step_size);
            let x_k = prox.prox(v.view(), prox_param);
            check_len(n_features, x_k.len())?;

            if self.params.verbose() && k % log_every == 0 {
                let update = (&x_k - &x_prev).mapv(|d| d * d).sum().sqrt();
                println!("iteration: {} :: update norm: {:#?}", k, update);
            }

            iterates.column_mut(k).assign(&x_k);
        }

        Ok(())
    }

    /// Allocates an iterate buffer of width `n_iterations`, seeds it with `x0`
    /// and runs [`ProxGradSolver::solve`].
    pub fn solve_from<G, P>(&self, x0: ArrayView1<F>, grad: &G, prox: &P) -> Result<Array2<F>>
    where
        G: Gradient<F> + ?Sized,
        P: ProxOperator<F> + ?Sized,
    {
        let mut iterates = Array2::<F>::zeros((x0.len(), self.params.n_iterations()));
        iterates.column_mut(0).assign(&x0);
        self.solve(&mut iterates, grad, prox)?;
        Ok(iterates)
    }
}

fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        Err(ProxGradError::ShapeMismatch { expected, found })
    } else {
        Ok(())
    }
}

/// Index of the first iterate holding a NaN or an infinite coordinate, if any.
pub fn first_non_finite_iterate<F: Float>(iterates: ArrayView2<F>) -> Option<usize> {
    iterates
        .axis_iter(Axis(1))
        .position(|x_k| x_k.iter().any(|xi| !xi.is_finite()))
}
