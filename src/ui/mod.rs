//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod stats;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameResult, GameState, WinType};
pub use stats::{GameRecord, SessionStats};
