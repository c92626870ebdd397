//! Win condition checking
//!
//! A line wins when all three of its cells hold the same mark. Lines are
//! scanned rows first, then columns, then diagonals, so the reported line is
//! deterministic.

use tracing::instrument;

use crate::board::{Board, Cell, Player};

/// All winning lines as cell indices, in scan order
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the first complete line on the board
#[instrument(skip(board), level = "trace")]
pub fn find_winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    LINES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Player owning a complete line, if any
#[instrument(skip(board), level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).and_then(|[a, _, _]| board.cells()[a].player())
}
