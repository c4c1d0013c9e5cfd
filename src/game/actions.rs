//! Game actions and mechanics
//!
//! The public operations of the engine. Every operation validates against
//! the current phase and state first and only then mutates; a failed call
//! leaves the state untouched.

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When verbose-logging feature is disabled, this becomes a no-op at compile time,
/// eliminating the format! allocations on the action hot path.
macro_rules! log_if_verbose {
    ($self:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $self.logger.normal(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$self; // Suppress unused variable warning
        }
    };
}

use crate::core::{CardCategory, CardKind, ItemKind, ALL_ITEMS};
use crate::error::LogicError;
use crate::game::phase::{transition, Event, Phase};
use crate::game::GameState;
use crate::loader::Deck;
use std::collections::VecDeque;

/// Smallest value any dice can come up with.
const MIN_DICE_VALUE: u32 = 1;

/// Result of a successful `build`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The item was built; the game continues.
    Ok,
    /// The item was a rescue without a dice roll; the game is won.
    Win,
}

/// Result of a successful `roll`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    /// The fight against the animal was survived.
    Survived,
    /// The rescue roll succeeded; the game is won.
    Win,
    /// The fight or the rescue roll was lost; the game continues.
    Lose,
}

impl GameState {
    /// Start a new game on the given deck.
    ///
    /// The deck replaces the original deck for all subsequent resets.
    /// Fails while a game is running.
    pub fn start(&mut self, deck: Deck) -> Result<(), LogicError> {
        if self.phase.is_active() {
            return Err(LogicError::ActiveGame);
        }
        self.original_deck = deck.into_cards();
        self.reset_from_original();
        log_if_verbose!(self, "started a new game with {} cards", self.original_deck.len());
        Ok(())
    }

    /// Draw the top card of the pile.
    ///
    /// Resources go to the hand; the thunderstorm burns the fireplace and
    /// sweeps the hand; animals open an encounter.
    pub fn draw(&mut self) -> Result<CardKind, LogicError> {
        self.check_active_game()?;
        self.check_scavenge()?;
        let card = self
            .draw_pile
            .as_mut()
            .and_then(VecDeque::pop_front)
            .ok_or(LogicError::NoMoreCards)?;
        match card.category() {
            CardCategory::Resources => self.hand.push_back(card),
            CardCategory::Catastrophe => {
                self.inventory.retain(|&item| item != ItemKind::Fireplace);
                self.trim_hand();
            }
            CardCategory::Animals => {}
        }
        self.phase = transition(self.phase, Event::Drew(card))?;
        self.check_cannot_progress();
        log_if_verbose!(self, "drew {card}");
        Ok(card)
    }

    /// Build an item from the cards in the hand.
    pub fn build(&mut self, item: ItemKind) -> Result<BuildOutcome, LogicError> {
        self.check_active_game()?;
        self.check_scavenge()?;
        if self.inventory.contains(&item) {
            return Err(LogicError::ItemExists);
        }
        if !self.can_build(item) {
            return Err(LogicError::NotEnoughResources);
        }
        self.inventory.push(item);
        self.consume(item);
        self.phase = transition(self.phase, Event::Built(item))?;
        log_if_verbose!(self, "built {item}");
        match self.phase {
            Phase::Won => {
                self.clear_draw_pile();
                self.logger.minimal("win");
                Ok(BuildOutcome::Win)
            }
            Phase::Endeavor { .. } => Ok(BuildOutcome::Ok),
            _ => {
                self.check_cannot_progress();
                Ok(BuildOutcome::Ok)
            }
        }
    }

    /// Roll a dice of the given size.
    ///
    /// In an encounter the size must match the animal's dice and the item
    /// bonus counts; in an endeavor the size must match the built rescue's
    /// dice and the raw value decides.
    pub fn roll(&mut self, size: u32, value: u32) -> Result<RollOutcome, LogicError> {
        self.check_active_game()?;
        if value > size || value < MIN_DICE_VALUE {
            return Err(LogicError::InvalidDiceNumber);
        }
        match self.phase {
            Phase::Encounter { card } => {
                let (dice, min_roll) = match (card.dice_size(), card.min_roll()) {
                    (Some(dice), Some(min_roll)) => (dice, min_roll),
                    _ => return Err(LogicError::NoValidNextStage),
                };
                if size != dice {
                    return Err(LogicError::WrongDice);
                }
                let effective = value + self.max_bonus();
                self.phase = transition(self.phase, Event::Rolled(value))?;
                if effective > min_roll {
                    log_if_verbose!(self, "survived the {card} with {effective}");
                    Ok(RollOutcome::Survived)
                } else {
                    log_if_verbose!(self, "lost the fight against the {card}");
                    self.trim_hand();
                    self.check_cannot_progress();
                    Ok(RollOutcome::Lose)
                }
            }
            Phase::Endeavor { item } => {
                match item.dice_size() {
                    Some(dice) if size != dice => return Err(LogicError::WrongDice),
                    Some(_) => {}
                    None => return Err(LogicError::NoValidNextStage),
                }
                self.phase = transition(self.phase, Event::Rolled(value))?;
                if self.phase == Phase::Won {
                    self.clear_draw_pile();
                    self.logger.minimal("win");
                    Ok(RollOutcome::Win)
                } else {
                    log_if_verbose!(self, "the {item} failed with a {value}");
                    self.check_cannot_progress();
                    Ok(RollOutcome::Lose)
                }
            }
            _ => Err(LogicError::WrongStage),
        }
    }

    /// Items the buildable predicate currently holds for, sorted by token
    pub fn buildable_items(&self) -> Result<Vec<ItemKind>, LogicError> {
        self.check_scavenge()?;
        let mut items: Vec<ItemKind> = ALL_ITEMS
            .iter()
            .copied()
            .filter(|&item| self.can_build(item))
            .collect();
        items.sort_by_key(|item| item.token());
        Ok(items)
    }

    /// Drawn resources in draw order (oldest first)
    pub fn resources(&self) -> Result<impl Iterator<Item = CardKind> + '_, LogicError> {
        self.check_game_started()?;
        Ok(self.hand.iter().copied())
    }

    /// Built items in reverse build order (most recent first)
    pub fn buildings(&self) -> Result<impl Iterator<Item = ItemKind> + '_, LogicError> {
        self.check_game_started()?;
        Ok(self.inventory.iter().rev().copied())
    }

    /// Throw the current run away and replay the original deck.
    pub fn reset(&mut self) -> Result<(), LogicError> {
        self.check_game_started()?;
        self.reset_from_original();
        log_if_verbose!(self, "game reset");
        Ok(())
    }

    /// Whether the game has been lost
    pub fn is_lost(&self) -> bool {
        self.phase == Phase::Lost
    }

    /// Flip to Lost when no progress is possible: nothing left to draw, no
    /// roll pending, and no item buildable. Decided games are left alone.
    fn check_cannot_progress(&mut self) {
        if self.phase != Phase::Scavenge {
            return;
        }
        let pile_empty = self.draw_pile.as_ref().is_some_and(VecDeque::is_empty);
        if pile_empty && !ALL_ITEMS.iter().any(|&item| self.can_build(item)) {
            self.clear_draw_pile();
            self.phase = Phase::Lost;
            self.logger.minimal("lost");
        }
    }
}
