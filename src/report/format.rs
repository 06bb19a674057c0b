//! Formatted terminal output: fit annotations, run summaries and JSON reports.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - both chart back-ends print exactly the same annotation text

use crate::domain::{FitReport, FitResult, RelationshipFit, SynthConfig, SynthReport};
use crate::error::AppError;

/// Significant digits of the scale `a` in annotations.
const SCALE_SIG_DIGITS: usize = 3;

/// Format like C's `%.{sig}g`: `sig` significant digits, trailing zeros
/// removed, scientific notation when the exponent is `< -4` or `>= sig`.
pub fn fmt_sig(v: f64, sig: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let sig = sig.max(1);

    // Rounding to `sig` digits can bump the exponent (999.6 -> 1.00e3), so the
    // exponent is read back from the rounded scientific form.
    let sci = format!("{:.*e}", sig - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= sig as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (sig as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{v:.decimals$}"))
    }
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

/// `y = 2 × x^1.000`
pub fn format_fit_equation(fit: &FitResult) -> String {
    format!("y = {} × x^{:.3}", fmt_sig(fit.a, SCALE_SIG_DIGITS), fit.b)
}

/// `R² (log-space) = 0.987`
pub fn format_r2(fit: &FitResult) -> String {
    format!("R² (log-space) = {:.3}", fit.r2)
}

/// Per-relationship text report for a dataset run.
pub fn format_run_summary(fits: &[RelationshipFit], n_flyers: usize) -> String {
    let mut out = String::new();

    out.push_str("=== allo - Power-Law Fit Analysis ===\n");
    out.push_str(&format!("Dataset: n={n_flyers} flyers\n"));

    for rf in fits {
        out.push('\n');
        out.push_str(&format_relationship(rf));
    }

    out
}

fn format_relationship(rf: &RelationshipFit) -> String {
    let rel = &rf.relationship;
    let mut out = String::new();
    out.push_str(&format!("{}\n", rel.title));
    out.push_str(&format!(
        "  x: {} | y: {} | n={}\n",
        rel.x.label(),
        rel.y.label(),
        rf.points.len()
    ));
    out.push_str(&format!("  {}\n", format_fit_equation(&rf.fit)));
    out.push_str(&format!("  {}\n", format_r2(&rf.fit)));
    out
}

/// Summary of a synthetic self-check: true vs recovered parameters.
pub fn format_synth_summary(config: &SynthConfig, fit: &FitResult) -> String {
    let mut out = String::new();

    out.push_str("=== allo - Synthetic Power-Law Check ===\n");
    out.push_str(&format!(
        "Sample: n={} | x=[{}, {}] | noise={} decades | seed={}\n",
        config.n,
        fmt_sig(config.x_min, 3),
        fmt_sig(config.x_max, 3),
        fmt_sig(config.noise, 3),
        config.seed,
    ));
    out.push_str(&format!(
        "True:      a={:<12} b={:.4}\n",
        fmt_sig(config.a, 6),
        config.b
    ));
    out.push_str(&format!(
        "Recovered: a={:<12} b={:.4} r2={:.4}\n",
        fmt_sig(fit.a, 6),
        fit.b,
        fit.r2
    ));
    out.push_str(&format!(
        "Error:     a={:+.3}% b={:+.4}\n",
        (fit.a / config.a - 1.0) * 100.0,
        fit.b - config.b
    ));

    out
}

/// Pretty JSON array of [`FitReport`]s.
pub fn format_json(fits: &[RelationshipFit]) -> Result<String, AppError> {
    let reports: Vec<FitReport> = fits.iter().map(FitReport::from).collect();
    serde_json::to_string_pretty(&reports)
        .map_err(|e| AppError::render(format!("Failed to serialize fit report: {e}")))
}

/// Pretty JSON of a synthetic self-check.
pub fn format_synth_json(config: &SynthConfig, fit: &FitResult) -> Result<String, AppError> {
    let report = SynthReport {
        n: config.n,
        seed: config.seed,
        noise: config.noise,
        true_a: config.a,
        true_b: config.b,
        fit: *fit,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| AppError::render(format!("Failed to serialize synthetic report: {e}")))
}
