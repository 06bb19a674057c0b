//! Reporting utilities: fit annotations, text summaries and JSON output.

pub mod format;

pub use format::*;
