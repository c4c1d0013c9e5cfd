//! Game phases and the transition relation
//!
//! The whole rule set of "what may happen next" lives in one tagged variant
//! and one transition function over (phase, event) pairs. The payload of
//! [`Phase::Encounter`] fixes the dice size and minimum roll of the pending
//! fight; the payload of [`Phase::Endeavor`] fixes the dice size of the
//! pending rescue roll.

use crate::core::{CardCategory, CardKind, ItemCategory, ItemKind};
use crate::error::LogicError;
use serde::{Deserialize, Serialize};

/// A rescue roll wins on this value or higher.
pub const RESCUE_MIN_ROLL: u32 = 4;

/// Phases of the game
///
/// `Won` and `Lost` are terminal; only `reset` and `start` leave them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// No game has ever been started in this session.
    #[default]
    None,
    /// The player may draw cards and build items.
    Scavenge,
    /// An animal was drawn; a combat roll with its dice is pending.
    Encounter { card: CardKind },
    /// A dice-rescue item was built; a d6 rescue roll is pending.
    Endeavor { item: ItemKind },
    /// The player escaped the island.
    Won,
    /// No progress is possible anymore.
    Lost,
}

/// Events that drive the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A card was drawn from the pile.
    Drew(CardKind),
    /// An item was built.
    Built(ItemKind),
    /// The dice came up with this value (encounter: raw, before any bonus).
    Rolled(u32),
}

impl Phase {
    /// Whether a game is running (started and not yet decided)
    pub fn is_active(&self) -> bool {
        !matches!(self, Phase::None | Phase::Won | Phase::Lost)
    }

    /// Whether a roll is the only legal move
    pub fn awaits_roll(&self) -> bool {
        matches!(self, Phase::Encounter { .. } | Phase::Endeavor { .. })
    }
}

/// Compute the successor phase for an event.
///
/// Callers gate events on the current phase first (drawing outside scavenge,
/// rolling outside encounter/endeavor and so on are reported with their own
/// errors); a pair that still has no successor is a broken rule table.
pub fn transition(phase: Phase, event: Event) -> Result<Phase, LogicError> {
    match (phase, event) {
        (Phase::Scavenge, Event::Drew(card)) => Ok(match card.category() {
            CardCategory::Animals => Phase::Encounter { card },
            CardCategory::Resources | CardCategory::Catastrophe => Phase::Scavenge,
        }),
        (Phase::Scavenge, Event::Built(item)) => {
            Ok(match (item.category(), item.dice_size()) {
                // A rescue without a dice roll wins outright.
                (ItemCategory::Rescues, None) => Phase::Won,
                (ItemCategory::Rescues, Some(_)) => Phase::Endeavor { item },
                _ => Phase::Scavenge,
            })
        }
        // Win or lose, a fight always returns to scavenging.
        (Phase::Encounter { .. }, Event::Rolled(_)) => Ok(Phase::Scavenge),
        (Phase::Endeavor { .. }, Event::Rolled(value)) => Ok(if value >= RESCUE_MIN_ROLL {
            Phase::Won
        } else {
            Phase::Scavenge
        }),
        _ => Err(LogicError::NoValidNextStage),
    }
}
