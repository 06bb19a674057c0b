//! Deterministic character plots.

pub mod ascii;

pub use ascii::*;
