use ndarray::{Array1, ArrayView1};

use crate::helpers::prox::{hard_thresholding, soft_thresholding};
use crate::traits::ProxOperator;
use crate::Float;

#[cfg(test)]
mod tests;

/// The identity operator
///
/// Proximal operator of the null regularizer. With it the proximal gradient
/// method reduces to plain gradient descent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Identity;

impl<F: Float> ProxOperator<F> for Identity {
    fn prox(&self, v: ArrayView1<F>, _param: F) -> Array1<F> {
        v.to_owned()
    }
}

/// The L1 penalty
///
/// A convex penalty made popular by the LASSO model. Its proximal operator
/// is the soft-thresholding at `param`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct L1;

impl<F: Float> ProxOperator<F> for L1 {
    fn prox(&self, v: ArrayView1<F>, param: F) -> Array1<F> {
        v.mapv(|vj| soft_thresholding(vj, param))
    }

    /// Computes `param * ||w||_1`
    fn value(&self, w: ArrayView1<F>, param: F) -> F {
        param * w.iter().map(|&wj| wj.abs()).sum::<F>()
    }
}

/// The L0 penalty
///
/// Counts the non-zero coefficients. This non-convex penalty yields the
/// sparsest solutions; its proximal operator is the hard-thresholding at
/// `sqrt(2 * param)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct L0;

impl<F: Float> ProxOperator<F> for L0 {
    fn prox(&self, v: ArrayView1<F>, param: F) -> Array1<F> {
        let threshold = (F::cast(2.) * param).sqrt();
        v.mapv(|vj| hard_thresholding(vj, threshold))
    }

    /// Computes `param * ||w||_0`
    fn value(&self, w: ArrayView1<F>, param: F) -> F {
        param * F::cast(w.iter().filter(|&&wj| wj != F::zero()).count())
    }
}
