//! Hand strength.
//!
//! - [`Evaluator`] — Ranks exactly five cards into a [`Value`]
//! - [`best`] — The strongest [`Value`] among the 21 five-card subsets of seven cards
//! - [`Category`] — Hand class, high card through straight flush
//! - [`Subsets`] — k-of-n index combinations
pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod selector;
pub use selector::*;

pub mod subsets;
pub use subsets::*;

pub mod value;
pub use value::*;
