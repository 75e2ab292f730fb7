use ndarray::{Array1, ArrayView1};
use num_complex::Complex;

use std::fmt;
use std::str::FromStr;

use crate::error::{ProxGradError, Result};
use crate::param_guard::ParamGuard;
use crate::traits::{Gradient, Objective};
use crate::Float;

pub use hyperparams::{GradientParams, GradientValidParams};


pub mod hyperparams;

/// Finite-difference scheme used to approximate a partial derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    /// (f(x + eps e_i) - f(x)) / eps
    Forward,
    /// (f(x) - f(x - eps e_i)) / eps
    Backward,
    /// (f(x + eps e_i) - f(x - eps e_i)) / (2 eps)
    #[default]
    Central,
    /// Im(f(x + i eps e_i)) / eps
    ComplexStep,
}

impl DiffMode {
    /// Whether the scheme reuses the reference value f(x)
    fn needs_reference(self) -> bool {
        matches!(self, DiffMode::Forward | DiffMode::Backward)
    }
}

impl fmt::Display for DiffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiffMode::Forward => "forward",
            DiffMode::Backward => "backward",
            DiffMode::Central => "central",
            DiffMode::ComplexStep => "complex-step",
        };
        f.pad(name)
    }
}

impl FromStr for DiffMode {
    type Err = ProxGradError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(DiffMode::Forward),
            "backward" => Ok(DiffMode::Backward),
            "central" => Ok(DiffMode::Central),
            "complex-step" | "complex_step" | "complex" => Ok(DiffMode::ComplexStep),
            _ => Err(ProxGradError::UnknownDiffMode(s.to_string())),
        }
    }
}

/// Default perturbation used by every scheme.
pub const DEFAULT_EPS: f64 = 1e-6;

/// This function approximates the gradient of `objective` at `x` with the
/// finite-difference scheme `mode` and the perturbation `eps`.
///
/// The point and the perturbation are validated before the objective is ever
/// evaluated. Each coordinate is perturbed on its own copy of `x`, so the
/// result does not depend on the order in which coordinates are processed.
pub fn estimate_gradient<F, O>(
    x: ArrayView1<F>,
    objective: &O,
    mode: DiffMode,
    eps: F,
) -> Result<Array1<F>>
where
    F: Float,
    O: Objective<F> + ?Sized,
{
    check_point(x)?;
    check_dimension(objective.dimension(), x.len())?;
    check_eps(eps)?;
    check_mode::<F, O>(objective, mode)?;
    finite_differences(x, objective, mode, eps)
}

pub(crate) fn check_point<F: Float>(x: ArrayView1<F>) -> Result<()> {
    if x.is_empty() {
        return Err(ProxGradError::EmptyPoint);
    }
    match x.iter().position(|xi| !xi.is_finite()) {
        Some(index) => Err(ProxGradError::InvalidPoint {
            index,
            value: x[index].to_f64().unwrap_or(f64::NAN),
        }),
        None => Ok(()),
    }
}

pub(crate) fn check_dimension(expected: Option<usize>, found: usize) -> Result<()> {
    match expected {
        Some(expected) if expected != found => {
            Err(ProxGradError::ShapeMismatch { expected, found })
        }
        _ => Ok(()),
    }
}

pub(crate) fn check_eps<F: Float>(eps: F) -> Result<()> {
    if !eps.is_finite() || eps <= F::zero() {
        Err(ProxGradError::InvalidEpsilon(eps.to_f64().unwrap_or(f64::NAN)))
    } else {
        Ok(())
    }
}

/// Unchecked core shared by [`estimate_gradient`] and [`FiniteDifference`].
fn finite_differences<F, O>(
    x: ArrayView1<F>,
    objective: &O,
    mode: DiffMode,
    eps: F,
) -> Result<Array1<F>>
where
    F: Float,
    O: Objective<F> + ?Sized,
{
    check_dimension(objective.dimension(), x.len())?;

    let f_x = if mode.needs_reference() {
        objective.value(x)
    } else {
        F::zero()
    };

    let shifted = |i: usize, delta: F| {
        let mut x_i = x.to_owned();
        x_i[i] += delta;
        objective.value(x_i.view())
    };

    let mut grad = Array1::<F>::zeros(x.len());
    for i in 0..x.len() {
        grad[i] = match mode {
            DiffMode::Forward => (shifted(i, eps) - f_x) / eps,
            DiffMode::Backward => (f_x - shifted(i, -eps)) / eps,
            DiffMode::Central => (shifted(i, eps) - shifted(i, -eps)) / (F::cast(2.) * eps),
            DiffMode::ComplexStep => {
                let mut z_i = x.mapv(Complex::from);
                z_i[i].im = eps;
                let f_i = objective
                    .value_complex(z_i.view())
                    .ok_or(ProxGradError::NotComplexSafe)?;
                f_i.im / eps
            }
        };
    }
    Ok(grad)
}

pub(crate) fn check_mode<F, O>(objective: &O, mode: DiffMode) -> Result<()>
where
    F: Float,
    O: Objective<F> + ?Sized,
{
    if mode == DiffMode::ComplexStep && !objective.is_complex_safe() {
        Err(ProxGradError::NotComplexSafe)
    } else {
        Ok(())
    }
}

/// Finite-difference gradient
///
/// Exposes [`estimate_gradient`] through the [`Gradient`] trait so that the
/// proximal gradient solver can run on an estimated gradient. The parameters
/// are checked once when the adapter is built. Iterates are not re-validated
/// on every call: a non-finite iterate yields a non-finite gradient, exactly
/// like an exact gradient would.
pub struct FiniteDifference<F: Float, O> {
    objective: O,
    params: GradientValidParams<F>,
}

impl<F: Float, O: Objective<F>> FiniteDifference<F, O> {
    pub fn new(objective: O, params: GradientParams<F>) -> Result<Self> {
        let params = params.check()?;
        check_mode::<F, O>(&objective, params.mode())?;
        Ok(FiniteDifference { objective, params })
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    pub fn params(&self) -> &GradientValidParams<F> {
        &self.params
    }
}

impl<F: Float, O: Objective<F>> Gradient<F> for FiniteDifference<F, O> {
    fn gradient(&self, x: ArrayView1<F>) -> Array1<F> {
        // Only a point of the wrong length or a declared but missing complex
        // evaluation can fail here.
        finite_differences(x, &self.objective, self.params.mode(), self.params.eps())
            .unwrap_or_else(|_| Array1::from_elem(x.len(), F::nan()))
    }

    fn dimension(&self) -> Option<usize> {
        self.objective.dimension()
    }
}
