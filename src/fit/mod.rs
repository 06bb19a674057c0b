//! Curve fitting.
//!
//! Responsibilities:
//!
//! - fit `y = a · x^b` by least squares in log-log space (`power_law`)
//! - apply that fit to a named relationship of the dataset (`relationship`)

pub mod power_law;
pub mod relationship;

pub use power_law::*;
pub use relationship::*;
