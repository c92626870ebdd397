//! GUI module for tic-tac-toe
//!
//! Native window built with egui/eframe. The window only draws the board and
//! forwards clicks; all game rules live in [`crate::game`].

mod app;
mod board_view;
pub mod theme;

pub use app::TicTacToeApp;
pub use board_view::BoardView;
