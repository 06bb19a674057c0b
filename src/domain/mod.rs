//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - dataset rows and their numeric columns (`Flyer`, `Metric`)
//! - the relationships being fitted (`Relationship`, `RelationshipId`)
//! - fit outputs (`FitResult`, `RelationshipFit`, `FitReport`)
//! - run configuration (`AnalysisConfig`, `SynthConfig`, `ChartMode`)

pub mod types;

pub use types::*;
