//! Board rendering for the tic-tac-toe GUI

use egui::{Button, Color32, CornerRadius, RichText, Vec2};

use crate::board::{to_index, Board, Cell, BOARD_SIZE};

use super::theme::*;

/// Board view draws the 3x3 grid of cell buttons and reports clicks.
///
/// Button `(row, col)` always stands for cell `row * 3 + col`; the view
/// never looks at widget identity to find out which cell was hit.
pub struct BoardView {
    cell_size: f32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the index of the clicked cell, if any.
    ///
    /// Marked cells are disabled. With `accept_input` false every cell is.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<[usize; 3]>,
        accept_input: bool,
    ) -> Option<usize> {
        let mut clicked = None;

        ui.spacing_mut().item_spacing = Vec2::splat(CELL_SPACING);

        for row in 0..BOARD_SIZE {
            ui.horizontal(|ui| {
                for col in 0..BOARD_SIZE {
                    let index = to_index(row, col);
                    let cell = board.get(index).unwrap_or_default();

                    let button = Button::new(
                        RichText::new(cell.symbol())
                            .size(SYMBOL_FONT_SIZE)
                            .strong()
                            .color(symbol_color(cell)),
                    )
                    .min_size(Vec2::splat(self.cell_size))
                    .corner_radius(CornerRadius::same(CELL_ROUNDING))
                    .fill(cell_fill(index, winning_line));

                    let enabled = accept_input && cell.is_empty();
                    if ui.add_enabled(enabled, button).clicked() {
                        clicked = Some(index);
                    }
                }
            });
        }

        clicked
    }

    /// Width and height of the grid in points
    pub fn grid_extent(&self) -> f32 {
        BOARD_SIZE as f32 * self.cell_size + (BOARD_SIZE as f32 - 1.0) * CELL_SPACING
    }
}

/// Text color for a cell's mark
fn symbol_color(cell: Cell) -> Color32 {
    match cell {
        Cell::X => X_COLOR,
        Cell::O => O_COLOR,
        Cell::Empty => TEXT_PRIMARY,
    }
}

/// Background of a cell, highlighted when it is part of the winning line
fn cell_fill(index: usize, winning_line: Option<[usize; 3]>) -> Color32 {
    match winning_line {
        Some(line) if line.contains(&index) => WIN_HIGHLIGHT,
        _ => CELL_BG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winning_cells_highlighted() {
        let line = Some([2, 4, 6]);
        assert_eq!(cell_fill(4, line), WIN_HIGHLIGHT);
        assert_eq!(cell_fill(0, line), CELL_BG);
        assert_eq!(cell_fill(4, None), CELL_BG);
    }

    #[test]
    fn test_symbol_colors() {
        assert_eq!(symbol_color(Cell::X), X_COLOR);
        assert_eq!(symbol_color(Cell::O), O_COLOR);
    }

    #[test]
    fn test_grid_fits_window() {
        let view = BoardView::default();
        assert!(view.grid_extent() < WINDOW_SIZE[0]);
    }
}
