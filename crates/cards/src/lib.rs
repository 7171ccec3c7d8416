//! Euchre deck primitives, trick power rankings, and card-play abstraction.
//!
//! ## Core Types
//!
//! - [`Card`]: A single card as a `(Rank, Suit)` pair encoded in one byte
//! - [`Hand`]: An unordered set of cards as a 24-bit bitmask
//! - [`Deck`]: A shuffled collection for dealing
//!
//! ## Trick Resolution
//!
//! - [`Ranking`]: Power order of all 24 cards under a trump and led suit
//!
//! ## Abstraction
//!
//! - [`group`]: Collapse interchangeable card plays into representative actions
mod abstraction;
mod card;
mod deck;
mod hand;
mod rank;
mod ranking;
mod suit;

pub use abstraction::*;
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use rank::*;
pub use ranking::*;
pub use suit::*;
