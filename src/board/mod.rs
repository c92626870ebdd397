//! Board representation for tic-tac-toe

pub mod board;


// Re-exports
pub use board::Board;

use derive_more::Display;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// The two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Player occupying this cell, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Symbol drawn on a cell button; empty cells draw nothing
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::X => "X",
            Cell::O => "O",
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Row-major index of (row, col)
#[inline]
pub fn to_index(row: usize, col: usize) -> usize {
    debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
    row * BOARD_SIZE + col
}

/// (row, col) of a row-major index
#[inline]
pub fn from_index(index: usize) -> (usize, usize) {
    debug_assert!(is_valid_index(index));
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

#[inline]
pub fn is_valid_index(index: usize) -> bool {
    index < TOTAL_CELLS
}
