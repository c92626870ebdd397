//! Tie detection

use tracing::instrument;

use super::win::check_winner;
use crate::board::Board;

/// Check if every cell is marked
#[instrument(skip(board), level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board with no complete line
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    fn fill(board: &mut Board, x: &[usize], o: &[usize]) {
        for &i in x {
            board.place(i, Player::X);
        }
        for &i in o {
            board.place(i, Player::O);
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(4, Player::X);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        fill(&mut board, &[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, &[0, 1, 2, 5, 6], &[3, 4, 7, 8]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
