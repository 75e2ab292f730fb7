use super::ProxGradSolver;
use crate::error::{ProxGradError, Result};
use crate::param_guard::ParamGuard;
use crate::Float;

/// A verified hyperparameter set ready for a proximal gradient solve
#[derive(Debug, Clone, PartialEq)]
pub struct ProxGradValidParams<F> {
    step_size: F,
    n_iterations: usize,
    prox_param: F,
    verbose: bool,
}

impl<F: Float> ProxGradValidParams<F> {
    pub fn step_size(&self) -> F {
        self.step_size
    }

    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    pub fn prox_param(&self) -> F {
        self.prox_param
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Configures the fixed-budget iteration
/// ```ignore
/// x_k = prox(x_{k-1} - step_size * grad(x_{k-1}), prox_param)
/// ```
/// The proximal parameter is handed to the operator as is, it is not scaled
/// by the step size.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxGradParams<F>(ProxGradValidParams<F>);

impl<F: Float> Default for ProxGradParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> ProxGradParams<F> {
    pub fn new() -> ProxGradParams<F> {
        Self(ProxGradValidParams {
            step_size: F::cast(1e-3),
            n_iterations: 1000,
            prox_param: F::zero(),
            verbose: false,
        })
    }

    /// Set the constant step size. Gradient steps are stable when it is
    /// smaller than `2 / L`, `L` being the Lipschitz constant of the gradient.
    /// Defaults to `1e-3` if not set.
    pub fn step_size(mut self, step_size: F) -> Self {
        self.0.step_size = step_size;
        self
    }

    /// Set the number of iterates stored, the initial guess included.
    ///
    /// Defaults to `1000` if not set.
    pub fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.0.n_iterations = n_iterations;
        self
    }

    /// Set the parameter passed to the proximal operator.
    ///
    /// Defaults to `0` if not set.
    pub fn prox_param(mut self, prox_param: F) -> Self {
        self.0.prox_param = prox_param;
        self
    }

    /// Sets the verbosity level of the solver.
    ///
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }

    /// Validates the parameters and builds the solver
    pub fn build(self) -> Result<ProxGradSolver<F>> {
        Ok(ProxGradSolver::new(self.check()?))
    }
}

impl<F: Float> ParamGuard for ProxGradParams<F> {
    type Checked = ProxGradValidParams<F>;
    type Error = ProxGradError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if !self.0.step_size.is_finite() || self.0.step_size <= F::zero() {
            Err(ProxGradError::InvalidStepSize(
                self.0.step_size.to_f64().unwrap_or(f64::NAN),
            ))
        } else if self.0.n_iterations == 0 {
            Err(ProxGradError::InvalidIterations(self.0.n_iterations))
        } else if !self.0.prox_param.is_finite() || self.0.prox_param < F::zero() {
            Err(ProxGradError::InvalidProxParam(
                self.0.prox_param.to_f64().unwrap_or(f64::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
