//! The interactive session
//!
//! Reads one command per line, executes it against the engine, and prints
//! the reply lines. Replies for a command are collected before anything is
//! written, so a failing command prints exactly one error line and nothing
//! else. The session also owns the `lost` notification: whenever a
//! successful command flips the game to lost, one extra `lost` line follows
//! the reply.

use crate::error::GameError;
use crate::game::GameState;
use crate::ui::command::{parse_command, Command};
use std::io::{self, BufRead, Write};

/// Reply for successful execution.
pub const OK_MESSAGE: &str = "OK";
/// Reply for an empty listing.
pub const EMPTY_MESSAGE: &str = "EMPTY";
/// Reply for a survived animal encounter.
pub const SURVIVED_MESSAGE: &str = "survived";
/// Reply for a winning build or rescue roll.
pub const WIN_MESSAGE: &str = "win";
/// Reply for a losing fight or rescue roll.
pub const LOSE_MESSAGE: &str = "lose";
/// Extra line printed when the game becomes lost.
pub const LOST_MESSAGE: &str = "lost";
/// Marker in front of every error text.
pub const ERROR_PREFIX: &str = "Error, ";

/// One interactive session over a single game engine
#[derive(Debug)]
pub struct Session {
    game: GameState,
    /// Lost flag as last shown to the user; drives the `lost` line.
    lost_reported: bool,
    running: bool,
}

impl Session {
    pub fn new() -> Self {
        Session::with_game(GameState::new())
    }

    /// Run the session on a caller-configured engine (verbosity, capture)
    pub fn with_game(game: GameState) -> Self {
        Session {
            game,
            lost_reported: false,
            running: true,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Whether `quit` has been executed
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Process all lines until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            self.handle_line(&line, &mut out)?;
            if !self.running {
                break;
            }
        }
        Ok(())
    }

    /// Execute one input line and write its reply lines.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        match self.process(line) {
            Ok(replies) => {
                for reply in replies {
                    writeln!(out, "{reply}")?;
                }
            }
            Err(err) => writeln!(out, "{ERROR_PREFIX}{err}")?,
        }
        Ok(())
    }

    /// Parse and execute; on success the full reply, including a possible
    /// trailing `lost` line.
    fn process(&mut self, line: &str) -> Result<Vec<String>, GameError> {
        let command = parse_command(line)?;
        let mut replies = self.execute(command)?;
        if self.lost_reported != self.game.is_lost() {
            self.lost_reported = self.game.is_lost();
            if self.lost_reported {
                replies.push(LOST_MESSAGE.to_string());
            }
        }
        Ok(replies)
    }

    fn execute(&mut self, command: Command) -> Result<Vec<String>, GameError> {
        use crate::game::{BuildOutcome, RollOutcome};
        Ok(match command {
            Command::Start(deck) => {
                self.game.start(deck)?;
                vec![OK_MESSAGE.to_string()]
            }
            Command::Draw => {
                let card = self.game.draw()?;
                vec![card.to_string()]
            }
            Command::ListResources => {
                let lines: Vec<String> =
                    self.game.resources()?.map(|card| card.to_string()).collect();
                Self::or_empty(lines)
            }
            Command::ListBuildings => {
                let lines: Vec<String> =
                    self.game.buildings()?.map(|item| item.to_string()).collect();
                Self::or_empty(lines)
            }
            Command::Build(item) => match self.game.build(item)? {
                BuildOutcome::Ok => vec![OK_MESSAGE.to_string()],
                BuildOutcome::Win => vec![WIN_MESSAGE.to_string()],
            },
            Command::BuildRequest => {
                let lines: Vec<String> = self
                    .game
                    .buildable_items()?
                    .into_iter()
                    .map(|item| item.to_string())
                    .collect();
                Self::or_empty(lines)
            }
            Command::Roll { size, value } => {
                let reply = match self.game.roll(size, value)? {
                    RollOutcome::Survived => SURVIVED_MESSAGE,
                    RollOutcome::Win => WIN_MESSAGE,
                    RollOutcome::Lose => LOSE_MESSAGE,
                };
                vec![reply.to_string()]
            }
            Command::Reset => {
                self.game.reset()?;
                vec![OK_MESSAGE.to_string()]
            }
            Command::Quit => {
                self.running = false;
                Vec::new()
            }
        })
    }

    fn or_empty(lines: Vec<String>) -> Vec<String> {
        if lines.is_empty() {
            vec![EMPTY_MESSAGE.to_string()]
        } else {
            lines
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
