//! Search module for the Gomoku AI
//!
//! One ply only: every empty cell is scored by the threat heuristic and
//! the best is played. No look-ahead.

pub mod selector;

pub use selector::{score_all, select_move, Selection, TieBreak};
