//! Game rules for tic-tac-toe
//!
//! Pure functions over a [`Board`](crate::Board):
//! - Win detection over the 8 lines (3 rows, 3 columns, 2 diagonals)
//! - Full-board detection for ties

pub mod draw;
pub mod win;

// Re-exports for convenient access
pub use draw::{is_draw, is_full};
pub use win::{check_winner, find_winning_line, LINES};
