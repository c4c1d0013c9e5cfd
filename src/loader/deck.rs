//! Deck text loader
//!
//! Parses the comma-separated 64-card list the `start` command carries and
//! validates it into a legal deck. Shape errors (wrong length, unknown
//! token) and multiplicity errors are reported separately, matching the
//! front-end's distinction between malformed input and a well-formed but
//! illegal deck.

use crate::core::{CardKind, ALL_CARDS};
use crate::error::InputError;
use rustc_hash::FxHashMap;

/// Number of cards in a legal deck.
pub const DECK_SIZE: usize = 64;

/// Separator between cards in deck text.
pub const CARD_SEPARATOR: char = ',';

/// A validated, ordered deck; position 0 is the top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<CardKind>);

impl Deck {
    pub fn cards(&self) -> &[CardKind] {
        &self.0
    }

    pub fn into_cards(self) -> Vec<CardKind> {
        self.0
    }
}

/// Parse deck text into a validated [`Deck`].
///
/// The text must be exactly [`DECK_SIZE`] card tokens separated by
/// [`CARD_SEPARATOR`]; each kind must appear exactly as often as its deck
/// multiplicity demands.
pub fn parse_deck(text: &str) -> Result<Deck, InputError> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for token in text.split(CARD_SEPARATOR) {
        let card = CardKind::parse(token).ok_or(InputError::InvalidArguments)?;
        cards.push(card);
    }
    if cards.len() != DECK_SIZE {
        return Err(InputError::InvalidArguments);
    }

    let mut counts: FxHashMap<CardKind, usize> = FxHashMap::default();
    for &card in &cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    for kind in ALL_CARDS {
        if counts.get(&kind).copied().unwrap_or(0) != kind.deck_count() {
            return Err(InputError::InvalidCardDeck);
        }
    }

    Ok(Deck(cards))
}
