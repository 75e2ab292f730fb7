use ndarray::{Array1, ArrayView1};
use num_complex::Complex;

use crate::Float;

/// Objective trait
///
/// A scalar function of a real vector. The complex evaluation is optional: it
/// is only required by the complex-step scheme and must then be analytic, i.e.
/// built without absolute values, min/max, conjugation or norms. The crate
/// cannot verify this, a non-analytic complex evaluation silently yields a
/// wrong gradient.
pub trait Objective<F: Float> {
    fn value(&self, x: ArrayView1<F>) -> F;

    /// Length of the points the objective accepts, `None` if unknown.
    fn dimension(&self) -> Option<usize> {
        None
    }

    /// Whether [`Objective::value_complex`] is available
    fn is_complex_safe(&self) -> bool {
        false
    }

    /// Evaluates the objective at a complex point, `None` if the objective
    /// only supports real inputs.
    fn value_complex(&self, _z: ArrayView1<Complex<F>>) -> Option<Complex<F>> {
        None
    }
}

impl<F, T> Objective<F> for T
where
    F: Float,
    T: Fn(ArrayView1<F>) -> F,
{
    fn value(&self, x: ArrayView1<F>) -> F {
        self(x)
    }
}

/// An objective written once in complex arithmetic.
///
/// The real evaluation is the real part of the complex function at a point
/// with zero imaginary part.
pub struct ComplexSafe<G>(G);

impl<G> ComplexSafe<G> {
    pub fn new<F>(g: G) -> Self
    where
        F: Float,
        G: Fn(ArrayView1<Complex<F>>) -> Complex<F>,
    {
        ComplexSafe(g)
    }
}

impl<F, G> Objective<F> for ComplexSafe<G>
where
    F: Float,
    G: Fn(ArrayView1<Complex<F>>) -> Complex<F>,
{
    fn value(&self, x: ArrayView1<F>) -> F {
        let z = x.mapv(Complex::from);
        (self.0)(z.view()).re
    }

    fn is_complex_safe(&self) -> bool {
        true
    }

    fn value_complex(&self, z: ArrayView1<Complex<F>>) -> Option<Complex<F>> {
        Some((self.0)(z))
    }
}

/// Gradient trait
///
/// The gradient of the smooth part of a composite objective, exact or
/// estimated. It is what the proximal gradient solver steps along.
pub trait Gradient<F: Float> {
    fn gradient(&self, x: ArrayView1<F>) -> Array1<F>;

    /// Length of the points the gradient accepts, `None` if unknown.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

impl<F, T> Gradient<F> for T
where
    F: Float,
    T: Fn(ArrayView1<F>) -> Array1<F>,
{
    fn gradient(&self, x: ArrayView1<F>) -> Array1<F> {
        self(x)
    }
}

/// Proximal operator trait
///
/// The proximal operator of the non-smooth regularizer, evaluated at the
/// gradient step point with a scalar parameter whose meaning is defined by
/// the operator itself.
pub trait ProxOperator<F: Float> {
    fn prox(&self, v: ArrayView1<F>, param: F) -> Array1<F>;

    /// Value of the regularizer at `w`. Zero unless overridden.
    fn value(&self, _w: ArrayView1<F>, _param: F) -> F {
        F::zero()
    }
}

impl<F, T> ProxOperator<F> for T
where
    F: Float,
    T: Fn(ArrayView1<F>, F) -> Array1<F>,
{
    fn prox(&self, v: ArrayView1<F>, param: F) -> Array1<F> {
        self(v, param)
    }
}
