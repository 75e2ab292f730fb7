use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use num_complex::Complex;

use crate::error::{ProxGradError, Result};
use crate::helpers::helpers::{power_iteration, solve_lin_sys};
use crate::traits::{Gradient, Objective};
use crate::Float;

#[cfg(test)]
mod tests;

/// Quadratic datafit
///
/// The least-squares term of a sparse regression problem:
/// ```ignore
/// 1 / 2 * ||y - Xw||^2_2
/// ```
/// Its complex evaluation squares the residuals without conjugating them, so
/// it stays analytic and can be differentiated with the complex-step scheme.
///
/// Evaluating it at a point whose length is not `n_features` panics. The
/// datafit declares its dimension, so the estimator and the solver reject
/// such points with [`ProxGradError::ShapeMismatch`] beforehand.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadratic<F: Float> {
    X: Array2<F>,
    y: Array1<F>,
}

impl<F: Float> Quadratic<F> {
    /// Instantiates a quadratic datafit from a design matrix of shape
    /// `(n_samples, n_features)` and a target vector of length `n_samples`.
    pub fn new(X: Array2<F>, y: Array1<F>) -> Result<Self> {
        if X.nrows() != y.len() {
            return Err(ProxGradError::ShapeMismatch {
                expected: X.nrows(),
                found: y.len(),
            });
        }
        Ok(Quadratic { X, y })
    }

    pub fn design_matrix(&self) -> ArrayView2<'_, F> {
        self.X.view()
    }

    pub fn targets(&self) -> ArrayView1<'_, F> {
        self.y.view()
    }

    pub fn n_samples(&self) -> usize {
        self.X.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.X.ncols()
    }

    /// Residuals Xw - y
    fn residuals(&self, w: ArrayView1<F>) -> Array1<F> {
        self.X.dot(&w) - &self.y
    }

    /// Computes the Lipschitz constant of the gradient, the largest
    /// eigenvalue of X^T X. Gradient descent is stable for any step size
    /// below `2 / lipschitz`.
    pub fn lipschitz(&self) -> F {
        let XtX = self.X.t().dot(&self.X);
        power_iteration(XtX.view(), 1000, F::cast(1e-12))
    }

    /// Computes the unregularized least-squares solution by solving the
    /// normal equations X^T X w = X^T y.
    pub fn least_squares(&self) -> Result<Array1<F>> {
        let XtX = self.X.t().dot(&self.X);
        let Xty = self.X.t().dot(&self.y);
        solve_lin_sys(XtX.view(), Xty.view())
    }
}

impl<F: Float> Objective<F> for Quadratic<F> {
    fn value(&self, w: ArrayView1<F>) -> F {
        let r = self.residuals(w);
        F::cast(0.5) * r.dot(&r)
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.n_features())
    }

    fn is_complex_safe(&self) -> bool {
        true
    }

    fn value_complex(&self, z: ArrayView1<Complex<F>>) -> Option<Complex<F>> {
        assert_eq!(
            z.len(),
            self.n_features(),
            "complex point of length {} for {} features",
            z.len(),
            self.n_features()
        );
        let value = self
            .X
            .outer_iter()
            .zip(self.y.iter())
            .map(|(Xi, &yi)| {
                let r_i = Xi
                    .iter()
                    .zip(z.iter())
                    .map(|(&xij, &zj)| zj * xij)
                    .sum::<Complex<F>>()
                    - yi;
                r_i * r_i
            })
            .sum::<Complex<F>>();
        Some(value * F::cast(0.5))
    }
}

impl<F: Float> Gradient<F> for Quadratic<F> {
    /// Computes the exact gradient X^T (Xw - y)
    fn gradient(&self, w: ArrayView1<F>) -> Array1<F> {
        self.X.t().dot(&self.residuals(w))
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.n_features())
    }
}
