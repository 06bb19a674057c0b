//! `flight-allometry` library crate.
//!
//! The binary (`allo`) is a thin wrapper around this library so that:
//!
//! - the power-law fitting is testable without spawning processes
//! - the text report, JSON output and both chart back-ends share one pipeline

pub mod app;
pub mod chart;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
