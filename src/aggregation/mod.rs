//! Repeated runs per starting hand and their reports.
//!
//! - [`Aggregator`] — Independent seeded runs, in parallel per hand
//! - [`Summary`] — Run estimates with mean and sample deviation
//! - [`Report`] — Per-hand text, CSV, and JSON output
pub mod aggregator;
pub use aggregator::*;

pub mod report;
pub use report::*;

pub mod summary;
pub use summary::*;
