//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors - teal palette
pub const BOARD_BG: Color32 = Color32::from_rgb(28, 170, 156);
pub const GRID_LINE: Color32 = Color32::from_rgb(23, 145, 135);

// Mark colors
pub const CROSS_COLOR: Color32 = Color32::from_rgb(66, 66, 66);
pub const NOUGHT_COLOR: Color32 = Color32::from_rgb(239, 231, 200);

// Markers
pub const WIN_LINE: Color32 = Color32::from_rgb(255, 0, 0);
pub const HELP_MARKER: Color32 = Color32::from_rgb(255, 0, 255);

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(20, 120, 110);
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(200, 225, 220);

// Functions for colors that can't be const
pub fn hover_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(66, 66, 66, 90)
}

// Sizes
pub const GRID_LINE_WIDTH: f32 = 8.0;
pub const WIN_LINE_WIDTH: f32 = 12.0;
pub const MARK_STROKE_WIDTH: f32 = 8.0;
pub const PANEL_HEIGHT: f32 = 90.0;
