//! Main application for the tic-tac-toe GUI

use egui::{CentralPanel, Context, Id, Modal, RichText};
use tracing::{debug, error, info};

use super::board_view::BoardView;
use super::theme::*;
use crate::game::{GameState, GameStatus};

/// Clicks collected while drawing one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct FrameInput {
    start: bool,
    reset: bool,
    cell: Option<usize>,
}

/// Main tic-tac-toe application
///
/// The board panel does not exist until "Start Game" is pressed; after that
/// the same game is reused and reset in place.
#[derive(Default)]
pub struct TicTacToeApp {
    game: Option<GameState>,
    board_view: BoardView,
    /// End-of-game announcement waiting to be acknowledged
    dialog: Option<String>,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn dialog(&self) -> Option<&str> {
        self.dialog.as_deref()
    }

    /// Show the board. Pressing start again keeps the current board.
    pub fn start_game(&mut self) {
        if self.game.is_some() {
            debug!("board already shown");
            return;
        }
        info!("starting game");
        self.game = Some(GameState::new());
    }

    /// Forward a cell click to the engine and queue the end-of-game dialog
    pub fn handle_cell_click(&mut self, index: usize) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.apply_move(index) {
            Ok(result) => {
                debug!(index, %result, "cell clicked");
                if result.is_terminal() {
                    self.dialog = game.status().message();
                }
            }
            Err(err) => error!(%err, "board view produced an invalid cell index"),
        }
    }

    /// Clear the board, re-enable every cell and drop any pending dialog
    pub fn reset(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.reset();
        }
        self.dialog = None;
    }

    /// Render the start button and, once started, the board panel
    fn render_board(&mut self, ctx: &Context) -> FrameInput {
        let accept_input = self.dialog.is_none();

        CentralPanel::default()
            .show(ctx, |ui| {
                let mut input = FrameInput::default();

                input.start = ui
                    .button(RichText::new("Start Game").size(16.0))
                    .clicked();

                let Some(game) = self.game.as_ref() else {
                    return input;
                };

                ui.add_space(8.0);
                ui.label(
                    RichText::new(status_text(game))
                        .size(14.0)
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(8.0);

                input.cell =
                    self.board_view
                        .show(ui, game.board(), game.winning_line(), accept_input);

                ui.add_space(8.0);
                input.reset = ui
                    .add_sized(
                        [self.board_view.grid_extent(), 28.0],
                        egui::Button::new(RichText::new("Reset").color(TEXT_PRIMARY)),
                    )
                    .clicked();

                input
            })
            .inner
    }

    /// Render the game over dialog while one is pending
    fn render_dialog(&mut self, ctx: &Context) {
        let Some(message) = self.dialog.as_deref() else {
            return;
        };

        let modal = Modal::new(Id::new("game_over")).show(ctx, |ui| {
            ui.set_min_width(200.0);
            ui.heading("Game Over");
            ui.add_space(8.0);
            ui.label(RichText::new(message).size(18.0).strong());
            ui.add_space(12.0);
            ui.button("OK").clicked()
        });

        if modal.inner || modal.should_close() {
            self.dialog = None;
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // R - Reset
        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.reset();
        }
    }

    fn apply(&mut self, input: FrameInput) {
        if input.start {
            self.start_game();
        }
        if let Some(index) = input.cell {
            self.handle_cell_click(index);
        }
        if input.reset {
            self.reset();
        }
    }
}

/// One-line status above the board
fn status_text(game: &GameState) -> String {
    match game.status() {
        GameStatus::InProgress => format!("{} to move", game.current_player()),
        finished => finished.message().unwrap_or_default(),
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let input = self.render_board(ctx);
        self.render_dialog(ctx);
        self.apply(input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    fn started() -> TicTacToeApp {
        let mut app = TicTacToeApp::default();
        app.start_game();
        app
    }

    #[test]
    fn test_no_board_before_start() {
        let mut app = TicTacToeApp::default();
        assert!(app.game().is_none());
        app.handle_cell_click(4);
        assert!(app.game().is_none());
    }

    #[test]
    fn test_second_start_keeps_board() {
        let mut app = started();
        app.handle_cell_click(4);
        app.start_game();
        assert_eq!(app.game().map(|g| g.board().stone_count()), Some(1));
    }

    #[test]
    fn test_win_opens_dialog() {
        let mut app = started();
        for index in [0, 4, 1, 5, 2] {
            app.handle_cell_click(index);
        }
        assert_eq!(app.dialog(), Some("X wins!"));
        assert_eq!(
            app.game().map(|g| g.status()),
            Some(GameStatus::Won(Player::X))
        );
    }

    #[test]
    fn test_tie_opens_dialog() {
        let mut app = started();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            app.handle_cell_click(index);
        }
        assert_eq!(app.dialog(), Some("It's a tie!"));
    }

    #[test]
    fn test_invalid_index_is_ignored() {
        let mut app = started();
        app.handle_cell_click(42);
        assert_eq!(app.game(), Some(&GameState::new()));
        assert_eq!(app.dialog(), None);
    }

    #[test]
    fn test_reset_clears_board_and_dialog() {
        let mut app = started();
        for index in [0, 4, 1, 5, 2] {
            app.handle_cell_click(index);
        }
        app.reset();
        assert_eq!(app.game(), Some(&GameState::new()));
        assert_eq!(app.dialog(), None);
    }

    #[test]
    fn test_frame_input_order() {
        let mut app = TicTacToeApp::default();
        app.apply(FrameInput {
            start: true,
            reset: false,
            cell: Some(4),
        });
        assert_eq!(app.game().map(|g| g.current_player()), Some(Player::O));
    }

    #[test]
    fn test_status_text() {
        let mut game = GameState::new();
        assert_eq!(status_text(&game), "X to move");
        for index in [0, 4, 1, 5, 2] {
            game.apply_move(index).unwrap();
        }
        assert_eq!(status_text(&game), "X wins!");
    }
}
