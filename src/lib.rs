//! Castaway - a deterministic survival card game engine
//!
//! The rule engine of a single-player "stranded on a desert island" card
//! game behind a line-oriented command interface. The engine validates
//! every attempted action against the current phase, tracks the drawn
//! resources and built items, and decides when the game is won or lost.
//! Dice values come from the user; the engine contains no randomness.

pub mod core;
pub mod game;
pub mod loader;
pub mod ui;
pub mod error;

pub use error::{GameError, InputError, LogicError, Result};
