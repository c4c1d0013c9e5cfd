//! Main game state structure

use crate::core::{CardKind, ItemKind};
use crate::error::LogicError;
use crate::game::{GameLogger, Phase};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// How many of the most recently drawn resources the shack saves from a
/// catastrophe.
pub const SHACK_CAPACITY: usize = 5;

/// Complete game state
///
/// This is the central structure that holds all game information. The draw
/// pile is `None` before the first `start` and after the game is decided;
/// between those points it is a copy of the original deck being consumed
/// from the front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Deck as handed to `start`; never mutated, replaced by the next `start`
    pub(crate) original_deck: Vec<CardKind>,

    /// Cards still to be drawn; the front is the top
    pub(crate) draw_pile: Option<VecDeque<CardKind>>,

    /// Resource cards in draw order (front is the oldest)
    pub(crate) hand: VecDeque<CardKind>,

    /// Items in build order; each kind at most once
    pub(crate) inventory: Vec<ItemKind>,

    /// Current phase of the game
    pub(crate) phase: Phase,

    /// Centralized logger for game events
    pub logger: GameLogger,
}

impl GameState {
    /// Create a fresh engine with no game started
    pub fn new() -> Self {
        GameState {
            original_deck: Vec::new(),
            draw_pile: None,
            hand: VecDeque::new(),
            inventory: Vec::new(),
            phase: Phase::None,
            logger: GameLogger::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Resource cards in draw order (oldest first)
    pub fn hand(&self) -> &VecDeque<CardKind> {
        &self.hand
    }

    /// Items in build order (oldest first)
    pub fn inventory(&self) -> &[ItemKind] {
        &self.inventory
    }

    /// Number of cards left to draw, if a pile exists
    pub fn cards_left(&self) -> Option<usize> {
        self.draw_pile.as_ref().map(VecDeque::len)
    }

    /// Largest combat bonus over all owned items (0 if none)
    pub fn max_bonus(&self) -> u32 {
        self.inventory.iter().map(ItemKind::bonus).max().unwrap_or(0)
    }

    // --- gate checks -----------------------------------------------------

    pub(crate) fn check_active_game(&self) -> Result<(), LogicError> {
        if self.phase.is_active() {
            Ok(())
        } else {
            Err(LogicError::NoActiveGame)
        }
    }

    pub(crate) fn check_game_started(&self) -> Result<(), LogicError> {
        if self.phase == Phase::None {
            Err(LogicError::GameNotStarted)
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_scavenge(&self) -> Result<(), LogicError> {
        if self.phase == Phase::Scavenge {
            Ok(())
        } else {
            Err(LogicError::ScavengeStateRequired)
        }
    }

    // --- build feasibility -----------------------------------------------

    /// Ownership half of the buildable predicate: not already built, and the
    /// fireplace is present if the item wants one
    pub(crate) fn is_buildable(&self, item: ItemKind) -> bool {
        !self.inventory.contains(&item)
            && (self.inventory.contains(&ItemKind::Fireplace) || !item.requires_fireplace())
    }

    /// Full buildable predicate: ownership rules plus the hand containing the
    /// item's required multiset
    pub(crate) fn can_build(&self, item: ItemKind) -> bool {
        if !self.is_buildable(item) {
            return false;
        }
        let mut required: SmallVec<[CardKind; 8]> = item.required_cards();
        for card in &self.hand {
            if let Some(pos) = required.iter().position(|r| r == card) {
                required.remove(pos);
            }
        }
        required.is_empty()
    }

    // --- mutation helpers ------------------------------------------------

    /// Remove the item's required cards from the hand.
    ///
    /// Walks the required list in its listed order and removes the most
    /// recent matching card each time. The survivor order is observable
    /// through `list-resources`.
    pub(crate) fn consume(&mut self, item: ItemKind) {
        for required in item.required_cards() {
            if let Some(idx) = self.hand.iter().rposition(|&c| c == required) {
                self.hand.remove(idx);
            }
        }
    }

    /// Catastrophe trim: the shack saves the most recent [`SHACK_CAPACITY`]
    /// cards, everything else is discarded from the front.
    pub(crate) fn trim_hand(&mut self) {
        if self.inventory.contains(&ItemKind::Shack) {
            while self.hand.len() > SHACK_CAPACITY {
                self.hand.pop_front();
            }
        } else {
            self.hand.clear();
        }
    }

    /// Drop the draw pile once the game is decided.
    pub(crate) fn clear_draw_pile(&mut self) {
        self.draw_pile = None;
    }

    /// Rebuild the running state from the original deck.
    pub(crate) fn reset_from_original(&mut self) {
        self.draw_pile = Some(self.original_deck.iter().copied().collect());
        self.hand.clear();
        self.inventory.clear();
        self.phase = Phase::Scavenge;
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardKind::{Metal, Plastic, Wood};

    fn state_with_hand(cards: &[CardKind]) -> GameState {
        let mut state = GameState::new();
        state.phase = Phase::Scavenge;
        state.hand = cards.iter().copied().collect();
        state
    }

    #[test]
    fn test_can_build_needs_multiset() {
        let state = state_with_hand(&[Wood, Metal, Wood]);
        assert!(!state.can_build(ItemKind::Club), "two wood are not three");
        let state = state_with_hand(&[Wood, Metal, Wood, Plastic, Wood]);
        assert!(state.can_build(ItemKind::Club));
    }

    #[test]
    fn test_can_build_rejects_owned_item() {
        let mut state = state_with_hand(&[Metal, Metal, Metal]);
        state.inventory.push(ItemKind::Axe);
        assert!(!state.can_build(ItemKind::Axe));
    }

    #[test]
    fn test_can_build_fireplace_rule() {
        let mut state = state_with_hand(&[
            Metal, Metal, Metal, Metal, Metal, Metal, Plastic,
        ]);
        assert!(!state.can_build(ItemKind::Steamboat));
        state.inventory.push(ItemKind::Fireplace);
        assert!(state.can_build(ItemKind::Steamboat));
    }

    #[test]
    fn test_consume_takes_most_recent_match() {
        // shack cost: wood, wood, metal, plastic, plastic
        let mut state = state_with_hand(&[Wood, Metal, Wood, Plastic, Wood, Metal, Plastic]);
        state.consume(ItemKind::Shack);
        // Rightmost wood first (pos 4, then pos 2), rightmost metal (pos 5),
        // rightmost plastic (pos 6, then pos 3). The oldest cards survive.
        assert_eq!(state.hand, VecDeque::from([Wood, Metal]));
    }

    #[test]
    fn test_trim_without_shack_clears() {
        let mut state = state_with_hand(&[Wood, Metal, Plastic]);
        state.trim_hand();
        assert!(state.hand.is_empty());
    }

    #[test]
    fn test_trim_with_shack_keeps_five_most_recent() {
        let mut state = state_with_hand(&[Wood, Metal, Plastic, Wood, Metal, Plastic, Wood]);
        state.inventory.push(ItemKind::Shack);
        state.trim_hand();
        assert_eq!(
            state.hand,
            VecDeque::from([Plastic, Wood, Metal, Plastic, Wood])
        );
    }

    #[test]
    fn test_trim_with_shack_and_short_hand_keeps_all() {
        let mut state = state_with_hand(&[Wood, Metal]);
        state.inventory.push(ItemKind::Shack);
        state.trim_hand();
        assert_eq!(state.hand.len(), 2);
    }

    #[test]
    fn test_max_bonus() {
        let mut state = GameState::new();
        assert_eq!(state.max_bonus(), 0);
        state.inventory.push(ItemKind::Club);
        assert_eq!(state.max_bonus(), 1);
        state.inventory.push(ItemKind::Axe);
        assert_eq!(state.max_bonus(), 2);
    }
}
