#[cfg(test)]
mod tests;

/// This module implements the scalar proximal operators of the penalties.
pub mod prox {
    use crate::Float;

    /// The soft-thresholding operator is the proximal operator used by
    /// [`L1`](crate::penalties::L1).
    pub fn soft_thresholding<F: Float>(x: F, threshold: F) -> F {
        if x > threshold {
            x - threshold
        } else if x < -threshold {
            x + threshold
        } else {
            F::zero()
        }
    }

    /// The hard-thresholding operator is the proximal operator used by
    /// [`L0`](crate::penalties::L0). Values whose magnitude does not exceed
    /// the threshold are set to zero, the others are kept untouched.
    pub fn hard_thresholding<F: Float>(x: F, threshold: F) -> F {
        if x.abs() > threshold {
            x
        } else {
            F::zero()
        }
    }
}

/// This module contains the linear algebra helpers needed by the datafits and
/// the regression scenarios.
pub mod helpers {
    use crate::error::{ProxGradError, Result};
    use crate::Float;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

    /// This function solves a square linear system using Gaussian elimination
    /// with partial pivoting. It is used to compute least-squares solutions
    /// from the normal equations. We made the choice not to use a LAPACK
    /// binding since the systems at hand are tiny.
    pub fn solve_lin_sys<F: 'static + Float>(
        A: ArrayView2<F>,
        b: ArrayView1<F>,
    ) -> Result<Array1<F>> {
        let size = b.len();
        if A.nrows() != size || A.ncols() != size {
            return Err(ProxGradError::ShapeMismatch {
                expected: size,
                found: A.nrows(),
            });
        }

        // Augmented matrix [A | b]
        let mut system = Array2::<F>::zeros((size, size + 1));
        for i in 0..size {
            for j in 0..size {
                system[[i, j]] = A[[i, j]];
            }
            system[[i, size]] = b[i];
        }

        // Forward elimination
        for i in 0..size {
            let pivot = (i..size)
                .max_by(|&r, &s| {
                    system[[r, i]]
                        .abs()
                        .partial_cmp(&system[[s, i]].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(i);
            if system[[pivot, i]] == F::zero() || !system[[pivot, i]].is_finite() {
                return Err(ProxGradError::SingularSystem);
            }
            if pivot != i {
                for k in 0..size + 1 {
                    system.swap([i, k], [pivot, k]);
                }
            }
            for j in i + 1..size {
                let factor = system[[j, i]] / system[[i, i]];
                for k in i..size + 1 {
                    let delta = factor * system[[i, k]];
                    system[[j, k]] -= delta;
                }
            }
        }

        // Back substitution
        let mut x = Array1::<F>::zeros(size);
        for i in (0..size).rev() {
            let mut acc = system[[i, size]];
            for k in i + 1..size {
                acc -= system[[i, k]] * x[k];
            }
            x[i] = acc / system[[i, i]];
        }

        Ok(x)
    }

    /// This function estimates the largest eigenvalue of a symmetric positive
    /// semi-definite matrix by power iteration.
    pub fn power_iteration<F: 'static + Float>(A: ArrayView2<F>, max_iter: usize, tol: F) -> F {
        let size = A.nrows();
        if size == 0 {
            return F::zero();
        }
        let mut v = Array1::from_elem(size, F::one() / F::cast(size).sqrt());
        let mut eig = F::zero();
        for _ in 0..max_iter {
            let Av = A.dot(&v);
            let norm = Av.dot(&Av).sqrt();
            if norm == F::zero() {
                return F::zero();
            }
            v = Av / norm;
            let new_eig = v.dot(&A.dot(&v));
            if (new_eig - eig).abs() <= tol * new_eig.abs() {
                return new_eig;
            }
            eig = new_eig;
        }
        eig
    }

    /// Builds the Vandermonde matrix whose column `j` holds the grid points
    /// raised to the power `j`, for `j` in `0..=degree`.
    pub fn vandermonde<F: Float>(grid: ArrayView1<F>, degree: usize) -> Array2<F> {
        Array2::from_shape_fn((grid.len(), degree + 1), |(i, j)| grid[i].powi(j as i32))
    }

    /// Number of non-zero coefficients
    pub fn count_nonzeros<F: Float>(w: ArrayView1<F>) -> usize {
        w.iter().filter(|&&wj| wj != F::zero()).count()
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use super::helpers::vandermonde;
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, Array2, ArrayView1, ShapeBuilder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    /// Largest absolute entry-wise difference between two vectors
    pub fn max_abs_diff<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>) -> F {
        assert_eq!(x.len(), y.len());
        x.iter()
            .zip(y.iter())
            .fold(F::zero(), |acc, (&xi, &yi)| acc.max((xi - yi).abs()))
    }

    pub fn fill_random_vector(capacity: usize, seed: u64, std: f64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., std).unwrap();

        let mut data: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data.capacity() {
            data.push(normal.sample(&mut r));
        }
        data
    }

    pub fn generate_random_data(n_samples: usize, n_features: usize) -> (Array2<f64>, Array1<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42, 1.);
        let data_w = fill_random_vector(n_features, 43, 1.);
        let data_e = fill_random_vector(n_samples, 44, 0.1);
        let X = Array2::from_shape_vec((n_samples, n_features).f(), data_x).unwrap();
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let noise = Array1::from_shape_vec(n_samples, data_e).unwrap();
        let y = X.dot(&true_w) + noise;

        (X, y)
    }

    /// Sparse polynomial regression data: 25 points evenly spread on [-1, 1],
    /// a degree 5 Vandermonde design matrix and a reference model with two
    /// active monomials, observed with Gaussian noise of standard deviation
    /// `noise_std`.
    pub fn generate_polynomial_data(noise_std: f64, seed: u64) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
        let grid = Array1::linspace(-1., 1., 25);
        let X = vandermonde(grid.view(), 5);
        let w_ref = Array1::from_vec(vec![5., 0., 0., 10., 0., 0.]);
        let noise = Array1::from_vec(fill_random_vector(grid.len(), seed, noise_std));
        let y = X.dot(&w_ref) + noise;
        (X, y, w_ref)
    }
}
