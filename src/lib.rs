//! Gomoku AI engine with a one-ply threat heuristic
//!
//! A free-style five-in-a-row opponent:
//! - Square board, 19x19 by default
//! - 5-in-a-row to win (overlines allowed)
//! - Board full with no five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and read-only cell access
//! - [`rules`]: Win detection
//! - [`eval`]: Threat scoring of candidate cells
//! - [`search`]: Move selection over all empty cells
//! - [`engine`]: AI engine with its own mirrored board
//! - [`game`]: Turn protocol between a human and the engine
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{check_win, AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new_game(19, Stone::White).unwrap();
//!
//! // Human plays Black
//! let human = Pos::new(9, 9);
//! board.place(human, Stone::Black).unwrap();
//! assert_eq!(check_win(&board, human, Stone::Black), None);
//! engine.record_opponent_move(human).unwrap();
//!
//! // AI responds as White
//! let reply = engine.compute_ai_move().unwrap();
//! board.place(reply, Stone::White).unwrap();
//! println!("AI plays at {}", reply);
//! ```
//!
//! # Scoring
//!
//! Each empty cell is scored along the four axes through it:
//! 1. Completing our own five
//! 2. Blocking the opponent's five
//! 3. Extending or blocking threes, then twos, then single stones
//!
//! Open runs outscore half-blocked ones, dead runs score nothing, and a
//! run broken by one gap counts half.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, CellReader, Pos, Stone, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::GameError;
pub use eval::{Score, ThreatScorer};
pub use game::{Game, Outcome, TurnPhase, TurnReport};
pub use rules::{check_win, WIN_LENGTH};
pub use search::TieBreak;
