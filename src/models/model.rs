//! Evaluation of a fitted power law.
//!
//! The fitter produces `(a, b)`; reports and charts only ever need two
//! primitive operations on top of that:
//! - predict `y(x)` for a single x
//! - sample the fit line over the plotted x range

use crate::domain::FitResult;

/// Fraction of the smallest x at which the drawn fit line starts.
pub const CURVE_LOW_FACTOR: f64 = 0.8;
/// Multiple of the largest x at which the drawn fit line ends.
pub const CURVE_HIGH_FACTOR: f64 = 1.2;

/// Predict `y(x) = a · x^b`.
pub fn predict(fit: &FitResult, x: f64) -> f64 {
    fit.a * x.powf(fit.b)
}

/// X range of the drawn fit line for the given observations.
///
/// Returns `None` when there are no finite positive values.
pub fn curve_span(xs: &[f64]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &x in xs {
        if x.is_finite() && x > 0.0 {
            lo = lo.min(x);
            hi = hi.max(x);
        }
    }
    if lo.is_finite() && hi.is_finite() {
        Some((lo * CURVE_LOW_FACTOR, hi * CURVE_HIGH_FACTOR))
    } else {
        None
    }
}

/// Sample the fit line at `n` linearly spaced x values in `[x_min, x_max]`.
pub fn sample_curve(fit: &FitResult, x_min: f64, x_max: f64, n: usize) -> Vec<(f64, f64)> {
    let n = n.max(2);
    (0..n)
        .map(|i| {
            let u = i as f64 / (n as f64 - 1.0);
            let x = x_min + u * (x_max - x_min);
            (x, predict(fit, x))
        })
        .collect()
}
