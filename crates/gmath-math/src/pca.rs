//! Principal component analysis helpers.
//!
//! Covariance matrices of point clouds and the symmetric eigen
//! decomposition that turns them into principal axes.
//!
//! # Example
//!
//! ```rust
//! use gmath_math::pca::{compute_covariance_matrix, sort_eigen, symmetric_eigen};
//! use gmath_math::Vec2;
//!
//! // Points spread along the diagonal
//! let points = [
//!     Vec2::new(-2.0, -2.1),
//!     Vec2::new(-1.0, -0.9),
//!     Vec2::new(0.0, 0.1),
//!     Vec2::new(1.0, 0.9),
//!     Vec2::new(2.0, 2.0),
//! ];
//! let cov = compute_covariance_matrix(&points)?;
//! let mut eigen = symmetric_eigen(&cov)?;
//! sort_eigen(&mut eigen);
//!
//! // The principal axis is close to (1, 1) / sqrt(2)
//! let axis = eigen.vector(0);
//! assert!((axis.x.abs() - axis.y.abs()).abs() < 0.05);
//! # Ok::<(), gmath_core::Error>(())
//! ```

use gmath_core::{Error, Result};
use tracing::{debug, trace, warn};

use crate::matrix::SquareMatrix;
use crate::vector::Vector;

/// Jacobi sweeps before [`symmetric_eigen`] gives up.
pub const MAX_SWEEPS: usize = 50;

/// Off-diagonal norm, relative to the matrix norm, treated as zero.
const TOLERANCE: f32 = 1e-6;

/// Population covariance of `points` about their mean.
///
/// Returns [`Error::EmptyInput`] for an empty slice.
pub fn compute_covariance_matrix<V: Vector>(points: &[V]) -> Result<V::Matrix> {
    compute_covariance_matrix_iter(points.iter().copied())
}

/// Population covariance of `points` about a given `center`.
///
/// `Σ (p - center)(p - center)ᵀ / n`
pub fn compute_covariance_matrix_about<V: Vector>(points: &[V], center: V) -> Result<V::Matrix> {
    compute_covariance_matrix_iter_about(points.iter().copied(), center)
}

/// Iterator form of [`compute_covariance_matrix`].
///
/// The iterator is walked twice: once for the mean and once for the sum of
/// outer products.
pub fn compute_covariance_matrix_iter<V, I>(points: I) -> Result<V::Matrix>
where
    V: Vector,
    I: IntoIterator<Item = V>,
    I::IntoIter: Clone,
{
    let iter = points.into_iter();

    let mut sum = V::from_fn(|_| 0.0);
    let mut count = 0usize;
    for p in iter.clone() {
        sum = sum + p;
        count += 1;
    }
    if count == 0 {
        return Err(Error::empty_input("covariance"));
    }

    let center = sum / count as f32;
    trace!(samples = count, ?center, "covariance mean");
    compute_covariance_matrix_iter_about(iter, center)
}

/// Iterator form of [`compute_covariance_matrix_about`].
pub fn compute_covariance_matrix_iter_about<V, I>(points: I, center: V) -> Result<V::Matrix>
where
    V: Vector,
    I: IntoIterator<Item = V>,
{
    let mut acc = <V::Matrix as SquareMatrix>::ZERO;
    let mut count = 0usize;
    for p in points {
        let d = p - center;
        acc = acc + <V::Matrix as SquareMatrix>::outer_product(d, d);
        count += 1;
    }
    if count == 0 {
        return Err(Error::empty_input("covariance"));
    }

    debug!(samples = count, dim = V::DIM, "covariance computed");
    Ok(acc / count as f32)
}

/// Eigenvalues and eigenvectors of a symmetric matrix.
///
/// `vectors` holds the eigenvectors as columns: column `i` belongs to
/// `values[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eigen<M: SquareMatrix> {
    /// Eigenvalues.
    pub values: M::Vector,
    /// Unit eigenvectors, one per column.
    pub vectors: M,
}

impl<M: SquareMatrix> Eigen<M> {
    /// Eigenvector `i` (column `i` of [`vectors`](Self::vectors)).
    #[inline]
    pub fn vector(&self, i: usize) -> M::Vector {
        self.vectors.col(i)
    }

    /// Rebuilds `V * diag(values) * Vᵀ`.
    pub fn reconstruct(&self) -> M {
        let n = <M::Vector as Vector>::DIM;
        M::from_fn(|r, c| {
            (0..n)
                .map(|k| self.vectors.get(r, k) * self.values[k] * self.vectors.get(c, k))
                .sum()
        })
    }
}

/// Eigen decomposition of a symmetric matrix by cyclic Jacobi rotations.
///
/// Only symmetric input gives meaningful results; covariance matrices always
/// qualify. Eigenvalues come back in no particular order, use [`sort_eigen`]
/// to order them.
///
/// Returns [`Error::NoConvergence`] after [`MAX_SWEEPS`] sweeps, which in
/// practice only happens for non-finite input.
///
/// ```rust
/// use gmath_math::pca::symmetric_eigen;
/// use gmath_math::Mat2;
///
/// let m = Mat2::from_rows([[2.0, 1.0], [1.0, 2.0]]);
/// let eigen = symmetric_eigen(&m)?;
/// let (a, b) = (eigen.values.x, eigen.values.y);
/// assert!((a.max(b) - 3.0).abs() < 1e-5);
/// assert!((a.min(b) - 1.0).abs() < 1e-5);
/// # Ok::<(), gmath_core::Error>(())
/// ```
pub fn symmetric_eigen<M: SquareMatrix>(m: &M) -> Result<Eigen<M>> {
    let n = <M::Vector as Vector>::DIM;
    let mut a = *m;
    let mut v = M::IDENTITY;

    let norm: f32 = (0..n)
        .flat_map(|r| (0..n).map(move |c| (r, c)))
        .map(|(r, c)| m.get(r, c) * m.get(r, c))
        .sum::<f32>()
        .sqrt();
    let threshold = TOLERANCE * norm;

    for sweep in 0..MAX_SWEEPS {
        let off = off_diagonal_norm(&a);
        trace!(sweep, off, "jacobi sweep");
        if off <= threshold {
            debug!(sweeps = sweep, dim = n, "eigen decomposition converged");
            return Ok(Eigen {
                values: <M::Vector as Vector>::from_fn(|i| a.get(i, i)),
                vectors: v,
            });
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a.get(p, q);
                if apq == 0.0 {
                    continue;
                }
                let theta = (a.get(q, q) - a.get(p, p)) / (2.0 * apq);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;
                rotate(&mut a, &mut v, p, q, c, s);
            }
        }
    }

    warn!(sweeps = MAX_SWEEPS, dim = n, "eigen decomposition did not converge");
    Err(Error::no_convergence(MAX_SWEEPS))
}

fn off_diagonal_norm<M: SquareMatrix>(a: &M) -> f32 {
    let n = <M::Vector as Vector>::DIM;
    let mut sum = 0.0;
    for r in 0..n {
        for c in 0..n {
            if r != c {
                sum += a.get(r, c) * a.get(r, c);
            }
        }
    }
    sum.sqrt()
}

/// `a = Jᵀ a J`, `v = v J` for the Givens rotation in the `(p, q)` plane.
fn rotate<M: SquareMatrix>(a: &mut M, v: &mut M, p: usize, q: usize, c: f32, s: f32) {
    let n = <M::Vector as Vector>::DIM;
    for k in 0..n {
        let (akp, akq) = (a.get(k, p), a.get(k, q));
        a.set(k, p, c * akp - s * akq);
        a.set(k, q, s * akp + c * akq);
    }
    for k in 0..n {
        let (apk, aqk) = (a.get(p, k), a.get(q, k));
        a.set(p, k, c * apk - s * aqk);
        a.set(q, k, s * apk + c * aqk);
    }
    // Exact zero, not rounding residue
    a.set(p, q, 0.0);
    a.set(q, p, 0.0);

    for k in 0..n {
        let (vkp, vkq) = (v.get(k, p), v.get(k, q));
        v.set(k, p, c * vkp - s * vkq);
        v.set(k, q, s * vkp + c * vkq);
    }
}

/// Orders eigenvalues (and their eigenvector columns) by descending value.
pub fn sort_eigen<M: SquareMatrix>(eigen: &mut Eigen<M>) {
    let n = <M::Vector as Vector>::DIM;
    for i in 0..n {
        let mut best = i;
        for j in (i + 1)..n {
            if eigen.values[j] > eigen.values[best] {
                best = j;
            }
        }
        if best != i {
            let (vi, vb) = (eigen.values[i], eigen.values[best]);
            eigen.values[i] = vb;
            eigen.values[best] = vi;

            let (ci, cb) = (eigen.vectors.col(i), eigen.vectors.col(best));
            for r in 0..n {
                eigen.vectors.set(r, i, cb[r]);
                eigen.vectors.set(r, best, ci[r]);
            }
        }
    }
}
