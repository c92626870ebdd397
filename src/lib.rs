//! Two-player tic-tac-toe
//!
//! A small rule engine for the classic 3x3 game, a desktop window built on
//! egui/eframe, and a headless REPL over the same engine.
//!
//! # Architecture
//!
//! - [`board`]: cells, players and the 9-cell board (row-major, index = row*3+col)
//! - [`rules`]: win and tie detection over the 8 lines
//! - [`game`]: [`GameState`], the state machine front ends drive
//! - [`repl`]: line-oriented `move <0-8>` / `reset` front end
//! - [`ui`]: the desktop window
//! - [`cli`]: command-line arguments for the `tictactoe` binary
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, GameStatus, MoveResult, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 5] {
//!     game.apply_move(index).unwrap();
//! }
//!
//! // X completes the top row
//! assert_eq!(game.apply_move(2).unwrap(), MoveResult::Win(Player::X));
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Decided games ignore further moves until reset
//! assert_eq!(game.apply_move(8).unwrap(), MoveResult::Ignored);
//! game.reset();
//! assert_eq!(game, GameState::new());
//! ```

pub mod board;
pub mod cli;
pub mod game;
pub mod repl;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, BOARD_SIZE, TOTAL_CELLS};
pub use game::{GameError, GameState, GameStatus, MoveResult};
