//! Game state and the transition engine

pub mod actions;
pub mod logger;
pub mod phase;
pub mod state;

pub use actions::{BuildOutcome, RollOutcome};
pub use logger::{GameLogger, LogEntry, OutputMode, VerbosityLevel};
pub use phase::{transition, Event, Phase, RESCUE_MIN_ROLL};
pub use state::{GameState, SHACK_CAPACITY};
