//! Game rules for Gomoku
//!
//! Free-style five-in-a-row: the first player to line up five or more
//! stones on any axis wins. A full board with no winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, run_length, winning_line, WIN_LENGTH};
