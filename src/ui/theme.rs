//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(240, 200, 150);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(0, 0, 0);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const WHITE_STONE_OUTLINE: Color32 = Color32::from_rgb(0, 0, 0);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Functions for colors that can't be const
pub fn hover_preview(turn: crate::Player) -> Color32 {
    match turn {
        crate::Player::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
        crate::Player::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
    }
}

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const STONE_RADIUS_RATIO: f32 = 0.375;
pub const STAR_POINT_RADIUS: f32 = 3.5;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
