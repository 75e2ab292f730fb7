use ndarray::{Array1, ArrayView1};

use super::{check_eps, estimate_gradient, DiffMode, DEFAULT_EPS};
use crate::error::{ProxGradError, Result};
use crate::param_guard::ParamGuard;
use crate::traits::Objective;
use crate::Float;

/// A verified configuration ready for gradient estimation
#[derive(Debug, Clone, PartialEq)]
pub struct GradientValidParams<F> {
    mode: DiffMode,
    eps: F,
}

impl<F: Float> GradientValidParams<F> {
    pub fn mode(&self) -> DiffMode {
        self.mode
    }

    pub fn eps(&self) -> F {
        self.eps
    }

    /// Estimates the gradient of `objective` at `x` with this configuration.
    pub fn estimate<O>(&self, x: ArrayView1<F>, objective: &O) -> Result<Array1<F>>
    where
        O: Objective<F> + ?Sized,
    {
        estimate_gradient(x, objective, self.mode, self.eps)
    }
}

/// A gradient estimation configuration during construction
#[derive(Debug, Clone, PartialEq)]
pub struct GradientParams<F>(GradientValidParams<F>);

impl<F: Float> Default for GradientParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> GradientParams<F> {
    pub fn new() -> GradientParams<F> {
        Self(GradientValidParams {
            mode: DiffMode::default(),
            eps: F::cast(DEFAULT_EPS),
        })
    }

    /// Set the finite-difference scheme.
    /// Defaults to [`DiffMode::Central`] if not set.
    pub fn mode(mut self, mode: DiffMode) -> Self {
        self.0.mode = mode;
        self
    }

    /// Set the perturbation magnitude. Complex-step tolerates much larger
    /// values than the real schemes since it has no subtractive cancellation.
    /// Defaults to `1e-6` if not set.
    pub fn eps(mut self, eps: F) -> Self {
        self.0.eps = eps;
        self
    }
}

impl<F: Float> ParamGuard for GradientParams<F> {
    type Checked = GradientValidParams<F>;
    type Error = ProxGradError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        check_eps(self.0.eps)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
