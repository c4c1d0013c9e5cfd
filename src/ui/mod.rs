//! Line-oriented user interface: command parsing and the session loop

pub mod command;
pub mod session;

pub use command::{parse_command, Command};
pub use session::Session;
