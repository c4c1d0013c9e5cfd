//! Error types for the card game engine
//!
//! Two kinds of failure cross the engine boundary: input that never made it
//! past the lexical layer ([`InputError`]) and commands that are well-formed
//! but violate the rules in the current state ([`LogicError`]). The front-end
//! prints both the same way; the split keeps the command parser free of game
//! state and the engine free of text handling.

use thiserror::Error;

/// Lexical / syntactic errors raised while turning an input line into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command")]
    UnknownCommand,

    #[error("no arguments expected")]
    NoArgumentsExpected,

    #[error("invalid arguments")]
    InvalidArguments,

    #[error("dice must be a 32-bit integer")]
    InvalidDiceInteger,

    #[error("diced number must be a 32-bit integer")]
    InvalidDicedInteger,

    #[error("invalid card deck. The amount of certain cards is incorrect")]
    InvalidCardDeck,
}

/// Rule violations raised by the engine against the current game state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error("there is no active game at the moment")]
    NoActiveGame,

    #[error("there is already an active game")]
    ActiveGame,

    #[error("the game has not started yet")]
    GameNotStarted,

    #[error("no more cards left")]
    NoMoreCards,

    #[error("each item may only exist a maximum of once in a game")]
    ItemExists,

    #[error("you do not have enough resources to build this item")]
    NotEnoughResources,

    #[error("the stage of the game has to be scavenge")]
    ScavengeStateRequired,

    #[error("invalid dice number for this dice size")]
    InvalidDiceNumber,

    #[error("wrong dice")]
    WrongDice,

    #[error("wrong stage of the game")]
    WrongStage,

    #[error("no valid next state can be reached")]
    NoValidNextStage,
}

/// Any error the session loop reports to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Logic(#[from] LogicError),
}

pub type Result<T> = std::result::Result<T, GameError>;
