//! Shared analysis pipeline: dataset -> fits.
//!
//! Front-ends (text report, JSON, charts) only deal with presentation of the
//! `RunOutput` computed here.

use tracing::debug;

use crate::data::load_flyers;
use crate::domain::{AnalysisConfig, Flyer, Relationship, RelationshipFit};
use crate::error::AppError;
use crate::fit::fit_relationship;

/// All computed outputs of a single `allo fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub flyers: Vec<Flyer>,
    pub fits: Vec<RelationshipFit>,
}

/// Load the embedded dataset and fit the configured relationships.
pub fn run_analysis(config: &AnalysisConfig) -> Result<RunOutput, AppError> {
    let flyers = load_flyers()?;
    debug!(n = flyers.len(), "loaded embedded flyer dataset");

    let fits = fit_all(&flyers, config)?;
    Ok(RunOutput { flyers, fits })
}

/// Fit the configured relationships on the given flyers, in order.
pub fn fit_all(flyers: &[Flyer], config: &AnalysisConfig) -> Result<Vec<RelationshipFit>, AppError> {
    config
        .relationships
        .iter()
        .map(|&id| fit_relationship(Relationship::standard(id), flyers, config.curve_points))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RelationshipId;

    #[test]
    fn embedded_dataset_fits_all_four_relationships() {
        let run = run_analysis(&AnalysisConfig::default()).unwrap();
        assert_eq!(run.flyers.len(), 4);
        assert_eq!(run.fits.len(), 4);

        let ids: Vec<RelationshipId> = run.fits.iter().map(|f| f.relationship.id).collect();
        assert_eq!(ids, RelationshipId::ALL.to_vec());

        for f in &run.fits {
            assert!(f.fit.a.is_finite() && f.fit.a > 0.0, "{}: a={}", f.relationship.title, f.fit.a);
            assert!(f.fit.b.is_finite());
            assert!(
                (0.0..=1.0 + 1e-12).contains(&f.fit.r2),
                "{}: r2={}",
                f.relationship.title,
                f.fit.r2
            );
            assert_eq!(f.points.len(), 4);
            assert_eq!(f.curve.len(), 200);
        }

        // Wingbeat falls with wingspan; power grows with mass.
        assert!(run.fits[0].fit.b < 0.0);
        assert!(run.fits[2].fit.b > 0.0);
    }

    #[test]
    fn respects_selection_and_order() {
        let config = AnalysisConfig {
            relationships: vec![RelationshipId::D, RelationshipId::B],
            curve_points: 10,
            ..AnalysisConfig::default()
        };
        let run = run_analysis(&config).unwrap();
        assert_eq!(run.fits.len(), 2);
        assert_eq!(run.fits[0].relationship.title, "D: Power vs. Wingspan");
        assert_eq!(run.fits[1].relationship.title, "B: Wing Weight vs. MTOW");
        assert_eq!(run.fits[1].curve.len(), 10);
    }
}
