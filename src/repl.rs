//! Headless command loop
//!
//! Drives a [`GameState`] from text commands, one per line:
//!
//! ```text
//! move <0-8>   mark a cell for the player to move
//! reset        start a new game
//! board        print the board
//! status       print the game status
//! help         list commands
//! quit | exit  leave
//! ```
//!
//! Each `move` prints the resulting [`MoveResult`](crate::MoveResult); a
//! finished game also prints its announcement. Errors are printed as
//! `error: ...` and the loop keeps going.

use std::io::{self, BufRead, Write};

use derive_more::{Display, Error};
use tracing::{debug, instrument, warn};

use crate::game::{GameState, GameStatus};

const HELP: &str = "\
commands:
  move <0-8>   mark a cell for the player to move
  reset        start a new game
  board        print the board
  status       print the game status
  help         list commands
  quit | exit  leave";

/// A parsed REPL line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(usize),
    Reset,
    Board,
    Status,
    Help,
    Quit,
}

/// Malformed command line
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    #[display("unknown command `{command}` (try `help`)")]
    UnknownCommand { command: String },
    #[display("`move` needs a cell index 0-8")]
    MissingIndex,
    #[display("`{value}` is not a cell index")]
    InvalidIndex { value: String },
    #[display("unexpected argument `{argument}`")]
    UnexpectedArgument { argument: String },
}

impl Command {
    /// Parse one line. Blank lines give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "move" => {
                let value = words.next().ok_or(ParseError::MissingIndex)?;
                let index = value.parse::<usize>().map_err(|_| ParseError::InvalidIndex {
                    value: value.to_string(),
                })?;
                Command::Move(index)
            }
            "reset" => Command::Reset,
            "board" => Command::Board,
            "status" => Command::Status,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => {
                return Err(ParseError::UnknownCommand {
                    command: keyword.to_string(),
                })
            }
        };

        match words.next() {
            Some(argument) => Err(ParseError::UnexpectedArgument {
                argument: argument.to_string(),
            }),
            None => Ok(Some(command)),
        }
    }
}

/// Run the loop until `quit` or end of input
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut state = GameState::new();

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!(%err, "rejected command line");
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        debug!(?command, "command");
        if command == Command::Quit {
            break;
        }
        execute(&mut state, command, &mut output)?;
    }

    output.flush()
}

fn execute<W: Write>(state: &mut GameState, command: Command, output: &mut W) -> io::Result<()> {
    match command {
        Command::Move(index) => match state.apply_move(index) {
            Ok(result) => {
                writeln!(output, "{result}")?;
                if let Some(message) = state.status().message().filter(|_| result.is_terminal()) {
                    writeln!(output, "{message}")?;
                }
            }
            Err(err) => {
                warn!(%err, "move rejected");
                writeln!(output, "error: {err}")?;
            }
        },
        Command::Reset => {
            state.reset();
            writeln!(output, "Reset")?;
        }
        Command::Board => writeln!(output, "{}", state.board())?,
        Command::Status => match state.status() {
            GameStatus::InProgress => {
                writeln!(output, "in progress, {} to move", state.current_player())?
            }
            finished => writeln!(output, "{finished}")?,
        },
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}
