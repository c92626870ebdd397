//! Game state machine
//!
//! [`GameState`] owns the board, the player to move and the game status.
//! Front ends feed it cell indices through [`GameState::apply_move`] and
//! react to the returned [`MoveResult`]:
//!
//! - `Ignored`: nothing changed (cell taken, or game already decided)
//! - `Continued(next)`: mark the cell, `next` is to move
//! - `Win(player)` / `Tie`: mark the cell and announce the end of the game
//!
//! Once the game is won or tied every further move is ignored until
//! [`GameState::reset`].

use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

use crate::board::{is_valid_index, Board, Player};
use crate::rules::{find_winning_line, is_full};

/// Errors from the game engine
///
/// Occupied cells and moves after the game has ended are not errors; they
/// come back as [`MoveResult::Ignored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The index does not name one of the 9 cells
    #[display("cell index {index} is out of range (expected 0-8)")]
    IndexOutOfRange { index: usize },
}

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    #[display("in progress")]
    InProgress,
    #[display("won by {_0}")]
    Won(Player),
    #[display("tied")]
    Tied,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// End-of-game announcement, `None` while the game is running
    pub fn message(self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(format!("{player} wins!")),
            GameStatus::Tied => Some("It's a tie!".to_string()),
        }
    }
}

/// Outcome of a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveResult {
    /// Cell already taken or game already decided; state unchanged
    #[display("Ignored")]
    Ignored,
    /// Move placed, game goes on with the contained player to move
    #[display("Continued({_0})")]
    Continued(Player),
    /// Move placed and completed a line
    #[display("Win({_0})")]
    Win(Player),
    /// Move placed and filled the board without a line
    #[display("Tie")]
    Tie,
}

impl MoveResult {
    /// Win or Tie
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveResult::Win(_) | MoveResult::Tie)
    }

    /// Whether the move put a mark on the board
    #[inline]
    pub fn marks_cell(self) -> bool {
        !matches!(self, MoveResult::Ignored)
    }
}

/// Main game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<[usize; 3]>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Start over from the initial position
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    /// Attempt to mark the cell at `index` for the player to move
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveResult, GameError> {
        if !is_valid_index(index) {
            return Err(GameError::IndexOutOfRange { index });
        }

        if self.status.is_over() {
            debug!(status = %self.status, "move after game over ignored");
            return Ok(MoveResult::Ignored);
        }

        if !self.board.is_empty(index) {
            debug!("cell already taken");
            return Ok(MoveResult::Ignored);
        }

        Ok(self.execute_move(index))
    }

    /// Place the mark and evaluate the position. Index is valid and empty.
    fn execute_move(&mut self, index: usize) -> MoveResult {
        let player = self.current_player;
        self.board.place(index, player);

        if let Some(line) = find_winning_line(&self.board) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            info!(%player, ?line, "game won");
            return MoveResult::Win(player);
        }

        if is_full(&self.board) {
            self.status = GameStatus::Tied;
            info!("game tied");
            return MoveResult::Tie;
        }

        self.current_player = player.opponent();
        debug!(next = %self.current_player, "move placed");
        MoveResult::Continued(self.current_player)
    }

    /// Check if the cell at `index` holds a mark
    pub fn is_cell_occupied(&self, index: usize) -> Result<bool, GameError> {
        self.board
            .get(index)
            .map(|cell| !cell.is_empty())
            .ok_or(GameError::IndexOutOfRange { index })
    }

    /// Player to move; after a terminal move, the player who made it
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Cells of the completed line when the game was won
    #[inline]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }
}
