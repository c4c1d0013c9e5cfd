//! Command parsing
//!
//! Turns one input line into a typed [`Command`]. Dispatch picks the longest
//! command name the line starts with, so `build?` wins over `build` and the
//! dice size rides directly on the `rollD` name. Argument shapes follow the
//! published command surface; numbers are natural numbers (optional `+`,
//! no zero) that must fit a 32-bit integer.

use crate::core::ItemKind;
use crate::error::InputError;
use crate::loader::{parse_deck, Deck};

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `start <card>,<card>,...` - begin a game on the given deck
    Start(Deck),
    /// `draw` - draw the top card
    Draw,
    /// `list-resources` - print the hand in draw order
    ListResources,
    /// `list-buildings` - print the inventory, most recent first
    ListBuildings,
    /// `build <item>` - build the named item
    Build(ItemKind),
    /// `build?` - print the currently buildable items
    BuildRequest,
    /// `rollD<size> <value>` - report a dice roll
    Roll { size: u32, value: u32 },
    /// `reset` - replay the original deck from the top
    Reset,
    /// `quit` - end the session
    Quit,
}

/// Command names in descending order; dispatch takes the first prefix match.
const NAMES_DESC: [&str; 9] = [
    "start",
    "rollD",
    "reset",
    "quit",
    "list-resources",
    "list-buildings",
    "draw",
    "build?",
    "build",
];

/// Parse one input line into a command.
pub fn parse_command(input: &str) -> Result<Command, InputError> {
    let name = NAMES_DESC
        .iter()
        .find(|name| input.starts_with(**name))
        .ok_or(InputError::UnknownCommand)?;
    let rest = &input[name.len()..];
    match *name {
        "start" => {
            let deck_text = rest.strip_prefix(' ').ok_or(InputError::InvalidArguments)?;
            Ok(Command::Start(parse_deck(deck_text)?))
        }
        "rollD" => {
            let (dice, diced) = rest.split_once(' ').ok_or(InputError::InvalidArguments)?;
            if !is_natural_number(dice) || !is_natural_number(diced) {
                return Err(InputError::InvalidArguments);
            }
            let size: i32 = dice.parse().map_err(|_| InputError::InvalidDiceInteger)?;
            let value: i32 = diced.parse().map_err(|_| InputError::InvalidDicedInteger)?;
            Ok(Command::Roll {
                size: size as u32,
                value: value as u32,
            })
        }
        "build" => {
            let token = rest.strip_prefix(' ').ok_or(InputError::InvalidArguments)?;
            let item = ItemKind::parse(token).ok_or(InputError::InvalidArguments)?;
            Ok(Command::Build(item))
        }
        name => {
            // The remaining commands take no arguments at all.
            if !rest.is_empty() {
                return Err(InputError::NoArgumentsExpected);
            }
            Ok(match name {
                "draw" => Command::Draw,
                "list-resources" => Command::ListResources,
                "list-buildings" => Command::ListBuildings,
                "build?" => Command::BuildRequest,
                "reset" => Command::Reset,
                _ => Command::Quit,
            })
        }
    }
}

/// The published number shape: optional `+`, digits, value above zero.
fn is_natural_number(token: &str) -> bool {
    let digits = token.strip_prefix('+').unwrap_or(token);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().any(|b| b != b'0')
}
