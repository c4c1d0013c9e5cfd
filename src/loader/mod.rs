//! Deck loading
//!
//! Turns the raw deck text of the `start` command into a validated deck.

pub mod deck;

pub use deck::{parse_deck, Deck, CARD_SEPARATOR, DECK_SIZE};
