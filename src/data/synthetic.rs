//! Synthetic power-law samples for checking the fitter end to end.
//!
//! x is drawn log-uniformly so every decade of the range is equally covered,
//! and y carries multiplicative log-normal noise:
//!
//! `y = a · x^b · 10^(noise · z)`, `z ~ N(0, 1)`

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{LabeledPoint, SynthConfig};
use crate::error::AppError;
use crate::fit::power_law::MIN_SAMPLES;

/// Draw a deterministic (per seed) sample of `config.n` points.
pub fn generate_power_law(config: &SynthConfig) -> Result<Vec<LabeledPoint>, AppError> {
    validate(config)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::fit(format!("Noise distribution error: {e}")))?;

    let lx_min = config.x_min.log10();
    let lx_max = config.x_max.log10();

    let points = (0..config.n)
        .map(|i| {
            let x = 10f64.powf(rng.gen_range(lx_min..=lx_max));
            let z: f64 = normal.sample(&mut rng);
            let y = config.a * x.powf(config.b) * 10f64.powf(config.noise * z);
            LabeledPoint {
                label: format!("S{:03}", i + 1),
                x,
                y,
            }
        })
        .collect();

    Ok(points)
}

fn validate(config: &SynthConfig) -> Result<(), AppError> {
    if config.n < MIN_SAMPLES {
        return Err(AppError::config(format!(
            "Synthetic sample needs at least {MIN_SAMPLES} points (got {}).",
            config.n
        )));
    }
    if !(config.a.is_finite() && config.a > 0.0) {
        return Err(AppError::config("Scale a must be a positive finite number."));
    }
    if !config.b.is_finite() {
        return Err(AppError::config("Exponent b must be finite."));
    }
    if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_min > 0.0 && config.x_max > config.x_min)
    {
        return Err(AppError::config("Invalid x range: need 0 < x-min < x-max."));
    }
    if !(config.noise.is_finite() && config.noise >= 0.0) {
        return Err(AppError::config("Noise must be a non-negative finite number."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::power_law::power_fit;

    fn config() -> SynthConfig {
        SynthConfig {
            a: 3.0,
            b: -0.4,
            n: 40,
            x_min: 0.1,
            x_max: 1000.0,
            noise: 0.0,
            seed: 42,
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let cfg = SynthConfig { noise: 0.1, ..config() };
        let a = generate_power_law(&cfg).unwrap();
        let b = generate_power_law(&cfg).unwrap();
        assert_eq!(a, b);

        let c = generate_power_law(&SynthConfig { seed: 43, ..cfg }).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn samples_stay_in_range() {
        let pts = generate_power_law(&config()).unwrap();
        assert_eq!(pts.len(), 40);
        for p in &pts {
            assert!(p.x >= 0.1 * (1.0 - 1e-12) && p.x <= 1000.0 * (1.0 + 1e-12), "x={}", p.x);
            assert!(p.y > 0.0);
        }
        assert_eq!(pts[0].label, "S001");
    }

    #[test]
    fn noiseless_sample_is_recovered_exactly() {
        let pts = generate_power_law(&config()).unwrap();
        let x: Vec<f64> = pts.iter().map(|p| p.x).collect();
        let y: Vec<f64> = pts.iter().map(|p| p.y).collect();
        let fit = power_fit(&x, &y).unwrap();
        assert!((fit.a - 3.0).abs() < 1e-9, "a={}", fit.a);
        assert!((fit.b + 0.4).abs() < 1e-9, "b={}", fit.b);
        assert!((fit.r2 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn noisy_sample_is_recovered_approximately() {
        let cfg = SynthConfig { noise: 0.05, n: 400, ..config() };
        let pts = generate_power_law(&cfg).unwrap();
        let x: Vec<f64> = pts.iter().map(|p| p.x).collect();
        let y: Vec<f64> = pts.iter().map(|p| p.y).collect();
        let fit = power_fit(&x, &y).unwrap();
        assert!((fit.b + 0.4).abs() < 0.02, "b={}", fit.b);
        assert!((fit.a / 3.0 - 1.0).abs() < 0.05, "a={}", fit.a);
        assert!(fit.r2 > 0.8 && fit.r2 < 1.0, "r2={}", fit.r2);
    }

    #[test]
    fn rejects_bad_configs() {
        assert!(generate_power_law(&SynthConfig { n: 1, ..config() }).is_err());
        assert!(generate_power_law(&SynthConfig { a: 0.0, ..config() }).is_err());
        assert!(generate_power_law(&SynthConfig { x_min: 0.0, ..config() }).is_err());
        assert!(generate_power_law(&SynthConfig { x_max: 0.05, ..config() }).is_err());
        assert!(generate_power_law(&SynthConfig { noise: -1.0, ..config() }).is_err());
        assert!(generate_power_law(&SynthConfig { b: f64::NAN, ..config() }).is_err());
    }
}
