//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(0xE3, 0x92, 0x65);
pub const GRID_LINE: Color32 = Color32::from_rgb(20, 15, 10);
pub const STAR_POINT: Color32 = Color32::from_rgb(20, 15, 10);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(45, 45, 45);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(90, 90, 95);
pub const WHITE_STONE: Color32 = Color32::from_rgb(219, 219, 219);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(170, 170, 175);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(200, 30, 30);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const HEAT: Color32 = Color32::from_rgb(30, 30, 200);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TURN_BLACK: Color32 = Color32::from_rgb(70, 70, 75);
pub const TURN_WHITE: Color32 = Color32::from_rgb(220, 220, 225);
pub const BUTTON_BG: Color32 = Color32::from_rgb(70, 70, 70);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARN: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_INFO: Color32 = Color32::from_rgb(120, 140, 230);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Star point lines (0-indexed) for a board side: 3-9-15 on 19x19
pub fn star_lines(size: usize) -> [usize; 3] {
    let edge = if size >= 13 { 3 } else { 2 };
    [edge, size / 2, size - 1 - edge]
}
