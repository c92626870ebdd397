//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Window
pub const WINDOW_TITLE: &str = "Tic-Tac-Toe";
pub const WINDOW_SIZE: [f32; 2] = [400.0, 400.0];

// Cell buttons
pub const CELL_SIZE: f32 = 80.0;
pub const CELL_SPACING: f32 = 4.0;
pub const SYMBOL_FONT_SIZE: f32 = 24.0;
pub const CELL_ROUNDING: u8 = 4;

// Mark colors
pub const X_COLOR: Color32 = Color32::from_rgb(220, 70, 70);
pub const O_COLOR: Color32 = Color32::from_rgb(70, 130, 220);

// Cell fills
pub const CELL_BG: Color32 = Color32::from_rgb(55, 57, 62);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(45, 120, 60);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
