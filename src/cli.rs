//! Command-line interface

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter directives (overrides RUST_LOG), e.g. `tictactoe=debug`
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Front end to run; opens the window when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the desktop window
    Gui,

    /// Read `move <0-8>` / `reset` commands from stdin and print each result
    Repl,
}

impl Cli {
    /// Selected front end, defaulting to the window
    pub fn front_end(&self) -> Command {
        self.command.unwrap_or(Command::Gui)
    }
}
