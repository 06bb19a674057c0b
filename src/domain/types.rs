//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - printed as JSON reports
//! - handed to either chart back-end without conversion

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One row of the embedded flight dataset.
///
/// Field names on the wire keep the column names of the source table
/// (`MTOW_g`, `Wingspan_mm`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    pub name: String,
    pub species: String,
    /// Maximum takeoff weight (g).
    #[serde(rename = "MTOW_g")]
    pub mtow_g: f64,
    #[serde(rename = "Wingweight_g")]
    pub wing_weight_g: f64,
    #[serde(rename = "Wingspan_mm")]
    pub wingspan_mm: f64,
    #[serde(rename = "Wingbeat_Hz")]
    pub wingbeat_hz: f64,
    #[serde(rename = "Power_W")]
    pub power_w: f64,
}

/// A numeric column of [`Flyer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Mtow,
    WingWeight,
    Wingspan,
    Wingbeat,
    Power,
}

impl Metric {
    /// Axis label, including the unit.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Mtow => "Maximum Takeoff Weight (g)",
            Metric::WingWeight => "Wing Weight (g)",
            Metric::Wingspan => "Wingspan (mm)",
            Metric::Wingbeat => "Wingbeat (Hz)",
            Metric::Power => "Power (W)",
        }
    }

    pub fn value(self, flyer: &Flyer) -> f64 {
        match self {
            Metric::Mtow => flyer.mtow_g,
            Metric::WingWeight => flyer.wing_weight_g,
            Metric::Wingspan => flyer.wingspan_mm,
            Metric::Wingbeat => flyer.wingbeat_hz,
            Metric::Power => flyer.power_w,
        }
    }
}

/// Identifier of one of the four standard allometric relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum RelationshipId {
    A,
    B,
    C,
    D,
}

impl RelationshipId {
    pub const ALL: [RelationshipId; 4] = [
        RelationshipId::A,
        RelationshipId::B,
        RelationshipId::C,
        RelationshipId::D,
    ];
}

/// A y-vs-x pairing of two metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub id: RelationshipId,
    pub title: &'static str,
    pub x: Metric,
    pub y: Metric,
}

impl Relationship {
    pub fn standard(id: RelationshipId) -> Self {
        match id {
            RelationshipId::A => Relationship {
                id,
                title: "A: Wingbeat vs. Wingspan",
                x: Metric::Wingspan,
                y: Metric::Wingbeat,
            },
            RelationshipId::B => Relationship {
                id,
                title: "B: Wing Weight vs. MTOW",
                x: Metric::Mtow,
                y: Metric::WingWeight,
            },
            RelationshipId::C => Relationship {
                id,
                title: "C: Power vs. MTOW",
                x: Metric::Mtow,
                y: Metric::Power,
            },
            RelationshipId::D => Relationship {
                id,
                title: "D: Power vs. Wingspan",
                x: Metric::Wingspan,
                y: Metric::Power,
            },
        }
    }
}

/// Power-law fit `y = a · x^b`, with R² measured in log10 space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Scale.
    pub a: f64,
    /// Exponent.
    pub b: f64,
    /// Goodness of fit of the log-log regression line.
    pub r2: f64,
}

/// An observation with the label used for chart annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Everything needed to report and draw a single relationship.
#[derive(Debug, Clone)]
pub struct RelationshipFit {
    pub relationship: Relationship,
    pub points: Vec<LabeledPoint>,
    pub fit: FitResult,
    /// Fit line sampled over the padded x range.
    pub curve: Vec<(f64, f64)>,
}

/// Where charts are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Terminal chart when stdout is a TTY, ASCII otherwise.
    Auto,
    /// Plotters chart drawn into an inline terminal viewport.
    Terminal,
    /// Deterministic character plot.
    Ascii,
    /// Text report only.
    None,
}

/// A full analysis run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub relationships: Vec<RelationshipId>,
    pub chart: ChartMode,
    pub plot_width: usize,
    pub plot_height: usize,
    pub chart_height: u16,
    pub json: bool,
    pub curve_points: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            relationships: RelationshipId::ALL.to_vec(),
            chart: ChartMode::Auto,
            plot_width: 72,
            plot_height: 20,
            chart_height: 40,
            json: false,
            curve_points: 200,
        }
    }
}

/// Parameters of a synthetic power-law sample.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// True scale `a₀`.
    pub a: f64,
    /// True exponent `b₀`.
    pub b: f64,
    pub n: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Standard deviation of the multiplicative noise, in decades (log10 units).
    pub noise: f64,
    pub seed: u64,
}

/// JSON-facing summary of one fitted relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub id: RelationshipId,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub n: usize,
    pub a: f64,
    pub b: f64,
    pub r2: f64,
}

impl From<&RelationshipFit> for FitReport {
    fn from(value: &RelationshipFit) -> Self {
        Self {
            id: value.relationship.id,
            title: value.relationship.title.to_string(),
            x_label: value.relationship.x.label().to_string(),
            y_label: value.relationship.y.label().to_string(),
            n: value.points.len(),
            a: value.fit.a,
            b: value.fit.b,
            r2: value.fit.r2,
        }
    }
}

/// JSON-facing summary of a synthetic self-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthReport {
    pub n: usize,
    pub seed: u64,
    pub noise: f64,
    pub true_a: f64,
    pub true_b: f64,
    pub fit: FitResult,
}
