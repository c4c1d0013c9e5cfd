//! Playing card catalogue
//!
//! The seven card kinds and their fixed attributes. Kinds with no dice size
//! never start a fight; the deck multiplicity is what makes a 64-card deck
//! legal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCategory {
    /// Resource cards accumulate in the player's hand and pay for items.
    Resources,
    /// Animal cards force a combat roll before play continues.
    Animals,
    /// The catastrophe burns the fireplace and sweeps the hand.
    Catastrophe,
}

/// A playing card kind
///
/// Cards carry no per-instance state; a deck is just an ordered sequence of
/// kinds. All attributes are fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Wood,
    Metal,
    Plastic,
    Spider,
    Snake,
    Tiger,
    Thunderstorm,
}

/// All card kinds, in catalogue order.
pub const ALL_CARDS: [CardKind; 7] = [
    CardKind::Wood,
    CardKind::Metal,
    CardKind::Plastic,
    CardKind::Spider,
    CardKind::Snake,
    CardKind::Tiger,
    CardKind::Thunderstorm,
];

impl CardKind {
    pub fn category(&self) -> CardCategory {
        match self {
            CardKind::Wood | CardKind::Metal | CardKind::Plastic => CardCategory::Resources,
            CardKind::Spider | CardKind::Snake | CardKind::Tiger => CardCategory::Animals,
            CardKind::Thunderstorm => CardCategory::Catastrophe,
        }
    }

    /// Dice size required to fight this card (animals only)
    pub fn dice_size(&self) -> Option<u32> {
        match self {
            CardKind::Spider => Some(4),
            CardKind::Snake => Some(6),
            CardKind::Tiger => Some(8),
            _ => None,
        }
    }

    /// Minimum effective roll; a fight is survived on a strictly greater value
    pub fn min_roll(&self) -> Option<u32> {
        match self {
            CardKind::Spider => Some(2),
            CardKind::Snake => Some(3),
            CardKind::Tiger => Some(4),
            _ => None,
        }
    }

    /// Exact multiplicity of this kind in a legal 64-card deck
    pub fn deck_count(&self) -> usize {
        match self.category() {
            CardCategory::Resources => 16,
            CardCategory::Animals => 5,
            CardCategory::Catastrophe => 1,
        }
    }

    pub fn is_resource(&self) -> bool {
        self.category() == CardCategory::Resources
    }

    /// User-facing token, lower-case
    pub fn token(&self) -> &'static str {
        match self {
            CardKind::Wood => "wood",
            CardKind::Metal => "metal",
            CardKind::Plastic => "plastic",
            CardKind::Spider => "spider",
            CardKind::Snake => "snake",
            CardKind::Tiger => "tiger",
            CardKind::Thunderstorm => "thunderstorm",
        }
    }

    /// Parse a user-facing token into a card kind
    pub fn parse(token: &str) -> Option<CardKind> {
        ALL_CARDS.iter().copied().find(|c| c.token() == token)
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
