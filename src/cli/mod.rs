//! Command-line parsing for the flight allometry analysis.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting and rendering code: the pipeline only ever sees `AnalysisConfig` /
//! `SynthConfig`.

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::{ChartMode, RelationshipId};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "allo", version, about = "Power-law fits of insect and bird flight metrics")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the allometric relationships of the embedded dataset and chart them.
    Fit(FitArgs),
    /// Fit a synthetic power-law sample and compare against the true parameters.
    Synth(SynthArgs),
}

/// Plot sizing shared by both subcommands.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    /// ASCII plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// ASCII plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Print a JSON report instead of text and charts.
    #[arg(long)]
    pub json: bool,
}

/// Options for `allo fit`.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// Relationship(s) to fit (repeatable). Defaults to A, B, C and D.
    #[arg(short = 'r', long = "relationship", value_enum, ignore_case = true)]
    pub relationships: Vec<RelationshipId>,

    /// Chart back-end.
    #[arg(long, value_enum, default_value_t = ChartMode::Auto)]
    pub chart: ChartMode,

    /// Height of the terminal chart area (rows).
    #[arg(long, default_value_t = 40)]
    pub chart_height: u16,

    /// Number of samples along each fit line.
    #[arg(long, default_value_t = 200)]
    pub curve_points: usize,

    #[command(flatten)]
    pub plot: PlotArgs,
}

/// Options for `allo synth`.
#[derive(Debug, Args, Clone)]
pub struct SynthArgs {
    /// True scale a₀.
    #[arg(long, default_value_t = 1.0)]
    pub a: f64,

    /// True exponent b₀.
    #[arg(long, default_value_t = 0.75, allow_negative_numbers = true)]
    pub b: f64,

    /// Number of samples.
    #[arg(short = 'n', long, default_value_t = 30)]
    pub n: usize,

    /// Smallest x.
    #[arg(long, default_value_t = 0.1)]
    pub x_min: f64,

    /// Largest x.
    #[arg(long, default_value_t = 1000.0)]
    pub x_max: f64,

    /// Standard deviation of multiplicative noise, in decades.
    #[arg(long, default_value_t = 0.05)]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[command(flatten)]
    pub plot: PlotArgs,
}
