//! Power-law model evaluation.
//!
//! Kept as small, pure functions so reporting and both chart back-ends share
//! one definition of the fit line.

pub mod model;

pub use model::*;
