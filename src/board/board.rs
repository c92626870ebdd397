//! Board storage

use std::fmt;

use super::{Cell, Player, BOARD_SIZE, TOTAL_CELLS};

/// 3x3 board, cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at index, `None` past the end of the board
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check if the cell at index is empty (out-of-range is never empty)
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Mark an empty cell for `player`.
    ///
    /// Callers check the index and emptiness first; cells never change once
    /// marked.
    #[inline]
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        debug_assert!(self.is_empty(index), "cell {index} already marked");
        self.cells[index] = Cell::from(player);
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Indices of the cells nobody has played yet
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Number of marked cells
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<&str> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    marked => marked.symbol(),
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
