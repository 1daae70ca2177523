//! Evaluation module for candidate moves
//!
//! Scores an empty cell by the runs it would extend or interrupt along
//! the four axes through it:
//! - own runs (attack)
//! - opponent runs (defense)
//! - blocked ends and single gaps

pub mod heuristic;
pub mod patterns;

pub use heuristic::{LineScan, ThreatScorer};
pub use patterns::{line_score, PatternScore, Score};
