//! Mathematical utilities: log-space helpers and least squares.

pub mod loglog;
pub mod ols;

pub use loglog::*;
pub use ols::*;
