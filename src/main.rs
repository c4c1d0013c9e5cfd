//! Castaway - Main Binary
//!
//! Line-oriented front-end for the survival card game engine: reads one
//! command per line, prints the engine's reply lines on stdout.

use anyhow::{Context, Result};
use castaway_rs::game::{GameState, VerbosityLevel};
use castaway_rs::ui::Session;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Verbosity level for diagnostic output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "castaway")]
#[command(about = "Castaway - survival card game engine", long_about = None)]
struct Cli {
    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Verbosity for diagnostics on stderr (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, default_value = "silent", short = 'v')]
    verbosity: VerbosityArg,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut game = GameState::new();
    game.logger.set_verbosity(cli.verbosity.into());
    let mut session = Session::with_game(game);

    let stdout = io::stdout();
    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            session.run(BufReader::new(file), stdout.lock())?;
        }
        None => {
            session.run(io::stdin().lock(), stdout.lock())?;
        }
    }
    Ok(())
}
