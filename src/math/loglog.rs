//! Log-space helpers shared by the power-law fitter and the plot scales.

use crate::error::AppError;

/// Take `log10` of every value, rejecting anything a power law cannot represent.
///
/// `axis` names the input sequence in error messages (`"x"` / `"y"`).
pub fn log10_positive(values: &[f64], axis: &str) -> Result<Vec<f64>, AppError> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if v.is_finite() && v > 0.0 {
                Ok(v.log10())
            } else {
                Err(AppError::fit(format!(
                    "{axis}[{i}] = {v} is not a positive finite number; a power-law fit needs {axis} > 0"
                )))
            }
        })
        .collect()
}

/// Arithmetic mean. Returns NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from `center`.
pub fn sum_sq_dev(values: &[f64], center: f64) -> f64 {
    values.iter().map(|v| (v - center) * (v - center)).sum()
}

/// Coefficient of determination `1 - SS_res / SS_tot`.
///
/// `SS_tot` is measured against the mean of `observed`. Only when every
/// observation is the same value is it zero; an intercept-carrying least
/// squares line then reproduces the data exactly, so the fit is reported as
/// perfect (1.0) instead of 0/0. Any nonzero spread, however small, goes
/// through the formula.
pub fn r_squared(observed: &[f64], fitted: &[f64]) -> f64 {
    let ss_res: f64 = observed
        .iter()
        .zip(fitted.iter())
        .map(|(o, f)| (o - f) * (o - f))
        .sum();
    let ss_tot = sum_sq_dev(observed, mean(observed));

    if ss_tot == 0.0 || is_constant(observed) {
        return 1.0;
    }
    1.0 - ss_res / ss_tot
}

/// All values equal. The mean of equal values can be off by an ulp, so a
/// sum of squared deviations alone may be a tiny positive number here.
pub fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
