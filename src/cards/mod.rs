//! Card primitives for dealing and evaluation.
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` pair encoded in one byte
//! - [`Hand`] — An unordered set of distinct cards as a 64-bit bitmask
//! - [`Hole`] — A player's two private cards
//! - [`Board`] — The five community cards
//! - [`Deck`] — A shuffled collection for dealing
//! - [`Starting`] — Shorthand starting-hand classes like `AKs`
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod starting;
pub use starting::*;

pub mod suit;
pub use suit::*;
