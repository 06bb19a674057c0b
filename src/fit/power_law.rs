//! Power-law fitting in log-log space.
//!
//! Given samples `(x_i, y_i)` with `x, y > 0` we fit
//!
//! ```text
//! log10(y) = log10(a) + b · log10(x)
//! ```
//!
//! by ordinary least squares, then report `a = 10^intercept`, `b = slope`, and
//! R² of that straight line measured in log space.

use nalgebra::DVector;

use crate::domain::FitResult;
use crate::error::AppError;
use crate::math::{is_constant, line_design, log10_positive, r_squared, solve_least_squares};

/// Minimum number of samples for a two-parameter fit.
pub const MIN_SAMPLES: usize = 2;

/// Fit `y = a · x^b`.
///
/// Fails if the slices differ in length, hold fewer than [`MIN_SAMPLES`]
/// samples, contain a non-positive or non-finite value, or if every `x` is the
/// same.
pub fn power_fit(x: &[f64], y: &[f64]) -> Result<FitResult, AppError> {
    if x.len() != y.len() {
        return Err(AppError::fit(format!(
            "x and y must have the same length (got {} and {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < MIN_SAMPLES {
        return Err(AppError::fit(format!(
            "Need at least {MIN_SAMPLES} samples for a power-law fit (got {}).",
            x.len()
        )));
    }

    let lx = log10_positive(x, "x")?;
    let ly = log10_positive(y, "y")?;

    if is_constant(&lx) {
        return Err(AppError::fit(
            "All x values are identical; the power-law exponent is undefined.",
        ));
    }

    let design = line_design(&lx);
    let target = DVector::from_column_slice(&ly);
    let beta = solve_least_squares(&design, &target)
        .ok_or_else(|| AppError::fit("Log-log regression is too ill-conditioned to solve."))?;

    let log_a = beta[0];
    let b = beta[1];
    let fitted: Vec<f64> = lx.iter().map(|&l| log_a + b * l).collect();
    let r2 = r_squared(&ly, &fitted);

    let fit = FitResult {
        a: 10f64.powf(log_a),
        b,
        r2,
    };
    if !(fit.a.is_finite() && fit.b.is_finite() && fit.r2.is_finite()) {
        return Err(AppError::fit(format!("Non-finite fit parameters: {fit:?}")));
    }
    Ok(fit)
}

/// Fit from `(x, y)` pairs.
pub fn power_fit_pairs(samples: &[(f64, f64)]) -> Result<FitResult, AppError> {
    let (x, y): (Vec<f64>, Vec<f64>) = samples.iter().copied().unzip();
    power_fit(&x, &y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn recovers_documented_example() {
        let fit = power_fit(&[1.0, 10.0, 100.0], &[2.0, 20.0, 200.0]).unwrap();
        assert!(close(fit.a, 2.0, 1e-10), "a={}", fit.a);
        assert!(close(fit.b, 1.0, 1e-10), "b={}", fit.b);
        assert!(close(fit.r2, 1.0, 1e-10), "r2={}", fit.r2);
    }

    #[test]
    fn recovers_exact_power_laws() {
        for &(a0, b0) in &[(0.5, 0.75), (3.2, -1.5), (1e-3, 2.0), (42.0, 0.0)] {
            let x: Vec<f64> = (1..=12).map(|i| 0.3 * i as f64 * i as f64).collect();
            let y: Vec<f64> = x.iter().map(|&xi| a0 * xi.powf(b0)).collect();

            let fit = power_fit(&x, &y).unwrap();
            assert!(close(fit.a, a0, 1e-9), "a={} want {a0}", fit.a);
            assert!((fit.b - b0).abs() < 1e-9, "b={} want {b0}", fit.b);
            assert!((fit.r2 - 1.0).abs() < 1e-9, "r2={}", fit.r2);
        }
    }

    #[test]
    fn two_samples_define_the_line() {
        let fit = power_fit(&[2.0, 8.0], &[3.0, 12.0]).unwrap();
        assert!(close(fit.b, 1.0, 1e-12));
        assert!(close(fit.a, 1.5, 1e-12));
        assert!(close(fit.r2, 1.0, 1e-12));
    }

    #[test]
    fn r2_stays_in_unit_interval_for_noisy_data() {
        let x = [1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0];
        let y = [2.1, 3.7, 6.5, 9.0, 17.5, 24.0, 45.0];
        let fit = power_fit(&x, &y).unwrap();
        assert!(fit.r2 > 0.9 && fit.r2 <= 1.0 + 1e-12, "r2={}", fit.r2);

        // Unrelated values still give a valid (small) R².
        let y = [5.0, 1.0, 9.0, 2.0, 7.0, 3.0, 4.0];
        let fit = power_fit(&x, &y).unwrap();
        assert!((0.0..=1.0).contains(&fit.r2), "r2={}", fit.r2);
    }

    #[test]
    fn permutation_does_not_change_the_fit() {
        let x = vec![18.0, 26.0, 100.0, 90.0, 44.0, 7.5];
        let y = vec![230.0, 173.0, 9.0, 53.0, 61.0, 400.0];
        let base = power_fit(&x, &y).unwrap();

        let mut pairs: Vec<(f64, f64)> = x.into_iter().zip(y).collect();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            pairs.shuffle(&mut rng);
            let fit = power_fit_pairs(&pairs).unwrap();
            assert!(close(fit.a, base.a, 1e-9));
            assert!((fit.b - base.b).abs() < 1e-9);
            assert!((fit.r2 - base.r2).abs() < 1e-9);
        }
    }

    #[test]
    fn constant_y_gives_flat_perfect_fit() {
        let fit = power_fit(&[1.0, 2.0, 4.0], &[5.0, 5.0, 5.0]).unwrap();
        assert!(fit.b.abs() < 1e-12);
        assert!(close(fit.a, 5.0, 1e-12));
        assert_eq!(fit.r2, 1.0);
    }

    #[test]
    fn small_y_spread_keeps_the_r2_formula() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 1.00000003, 0.99999998, 1.00000001];
        let fit = power_fit(&x, &y).unwrap();

        let lx: Vec<f64> = x.iter().map(|v: &f64| v.log10()).collect();
        let ly: Vec<f64> = y.iter().map(|v: &f64| v.log10()).collect();
        let m = ly.iter().sum::<f64>() / ly.len() as f64;
        let ss_tot: f64 = ly.iter().map(|v| (v - m) * (v - m)).sum();
        let ss_res: f64 = lx
            .iter()
            .zip(&ly)
            .map(|(l, v)| {
                let r = v - (fit.a.log10() + fit.b * l);
                r * r
            })
            .sum();

        // Barely any of the spread follows x.
        assert!(fit.r2 < 0.05, "r2={}", fit.r2);
        assert!((fit.r2 - (1.0 - ss_res / ss_tot)).abs() < 1e-3, "r2={}", fit.r2);
    }

    #[test]
    fn nearly_identical_but_distinct_x_still_fit() {
        let x = [1.0, 1.0 + 1e-12, 1.0 + 2e-12];
        let y: Vec<f64> = x.iter().map(|&v: &f64| 2.0 * v.powf(1.5)).collect();

        let fit = power_fit(&x, &y).unwrap();
        assert!((fit.b - 1.5).abs() < 0.05, "b={}", fit.b);
        assert!(close(fit.a, 2.0, 1e-9), "a={}", fit.a);
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(power_fit(&[1.0, 0.0, 3.0], &[1.0, 2.0, 3.0]).is_err());
        assert!(power_fit(&[1.0, 2.0, 3.0], &[1.0, -2.0, 3.0]).is_err());
    }

    #[test]
    fn rejects_zero_variance_x() {
        let err = power_fit(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_FIT);
        assert!(err.message().contains("identical"), "{err}");
    }

    #[test]
    fn rejects_length_mismatch_and_too_few_samples() {
        assert!(power_fit(&[1.0, 2.0], &[1.0]).is_err());
        assert!(power_fit(&[1.0], &[1.0]).is_err());
        assert!(power_fit(&[], &[]).is_err());
    }
}
