//! Least squares solver.
//!
//! The power-law fit reduces to a straight line in log-log space:
//!
//! ```text
//! minimize Σ (ly_i - (c + b · lx_i))^2
//! ```
//!
//! which we express as a design-matrix problem `X β ≈ y` with rows `[1, lx_i]`.
//!
//! Implementation choices:
//! - SVD handles tall systems (more rows than columns). Nalgebra's `QR::solve`
//!   is intended for square systems and panics for non-square matrices.
//! - The parameter dimension is 2, so the SVD cost is negligible.
//! - The rank cutoff is relative to the largest singular value.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Singular values below `max(rows, cols) · ε · σ_max` are treated as zero,
/// so the cutoff scales with the matrix instead of being a fixed magnitude.
/// Returns `None` if the solution is not finite.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);
    let tol = rank_tolerance(svd.singular_values.max(), x.nrows(), x.ncols());

    let beta = svd.solve(y, tol).ok()?;
    beta.iter().all(|v| v.is_finite()).then_some(beta)
}

fn rank_tolerance(sigma_max: f64, rows: usize, cols: usize) -> f64 {
    sigma_max * rows.max(cols) as f64 * f64::EPSILON
}

/// Build the `[1, x_i]` design matrix for a straight-line fit.
pub fn line_design(x: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(x.len(), 2, |i, j| if j == 0 { 1.0 } else { x[i] })
}
