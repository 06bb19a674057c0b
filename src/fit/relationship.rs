//! Fitting a [`Relationship`] on the flight dataset.

use tracing::{debug, info};

use crate::domain::{Flyer, LabeledPoint, Relationship, RelationshipFit};
use crate::error::AppError;
use crate::fit::power_law::power_fit;
use crate::models::{curve_span, sample_curve};

/// Fit one relationship and sample its curve for plotting.
pub fn fit_relationship(
    relationship: Relationship,
    flyers: &[Flyer],
    curve_points: usize,
) -> Result<RelationshipFit, AppError> {
    let points: Vec<LabeledPoint> = flyers
        .iter()
        .map(|f| LabeledPoint {
            label: f.name.clone(),
            x: relationship.x.value(f),
            y: relationship.y.value(f),
        })
        .collect();

    fit_points(relationship, points, curve_points)
}

/// Fit already-extracted points.
pub fn fit_points(
    relationship: Relationship,
    points: Vec<LabeledPoint>,
    curve_points: usize,
) -> Result<RelationshipFit, AppError> {
    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();

    let fit = power_fit(&x, &y).map_err(|e| e.context(relationship.title))?;
    info!(
        relationship = relationship.title,
        n = points.len(),
        a = fit.a,
        b = fit.b,
        r2 = fit.r2,
        "fitted power law"
    );

    let (x_lo, x_hi) = curve_span(&x)
        .ok_or_else(|| AppError::fit(format!("{}: no plottable x values", relationship.title)))?;
    let curve = sample_curve(&fit, x_lo, x_hi, curve_points);
    debug!(
        relationship = relationship.title,
        x_lo, x_hi,
        samples = curve.len(),
        "sampled fit line"
    );

    Ok(RelationshipFit {
        relationship,
        points,
        fit,
        curve,
    })
}
