//! Monte Carlo sampling of heads-up showdowns.
//!
//! - [`Trial`] — One random deal of an opponent hole and a full board
//! - [`Estimate`] — Win, tie, and loss counts reduced to an equity
//! - [`Sampler`] — Seeded, sharded runs of many trials
//! - [`Target`] — Showdown equity, or the rate of making a straight or flush
pub mod estimate;
pub use estimate::*;

pub mod sampler;
pub use sampler::*;

pub mod target;
pub use target::*;

pub mod trial;
pub use trial::*;
