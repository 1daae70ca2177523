//! Main AI engine
//!
//! The engine keeps its own copy of the board, updated through
//! [`AIEngine::record_opponent_move`] and its own committed moves, and
//! answers each human move with the best-scoring cell:
//!
//! 1. **Score**: every empty cell is rated by the threat heuristic
//! 2. **Select**: the highest score wins, ties broken per [`TieBreak`]
//! 3. **Commit**: the chosen stone is placed on the engine's board
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Pos, Stone};
//!
//! let mut engine = AIEngine::new_game(19, Stone::White).unwrap();
//! engine.record_opponent_move(Pos::new(9, 9)).unwrap();
//!
//! let result = engine.compute_ai_move_with_stats().unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Time: {}us", result.time_us);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use crate::board::{Board, CellReader, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::eval::{Score, ThreatScorer};
use crate::search::{score_all, select_move, Selection, TieBreak};

/// Result of a move search with statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Heuristic score of the chosen cell
    pub score: Score,
    /// Empty cells scored
    pub scanned: usize,
    /// Cells sharing the best score
    pub ties: usize,
    /// Time taken in microseconds
    pub time_us: u64,
}

impl MoveResult {
    #[inline]
    fn from_selection(selection: Selection, start: Instant) -> Self {
        Self {
            best_move: selection.pos,
            score: selection.score,
            scanned: selection.scanned,
            ties: selection.ties,
            time_us: start.elapsed().as_micros() as u64,
        }
    }
}

/// One-ply heuristic opponent
pub struct AIEngine {
    /// Engine's copy of the game board
    board: Board,
    scorer: ThreatScorer,
    tie_break: TieBreak,
    rng: StdRng,
}

impl AIEngine {
    /// Start a game on a `board_size` board with the engine playing
    /// `ai_stone`, default tie-breaking and an OS-seeded RNG.
    pub fn new_game(board_size: usize, ai_stone: Stone) -> Result<Self, GameError> {
        Self::with_config(&EngineConfig::new(board_size, ai_stone))
    }

    /// Create an engine from a full configuration
    #[instrument(level = "debug")]
    pub fn with_config(config: &EngineConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::with_size(config.board_size)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            size = config.board_size,
            stone = config.ai_stone.name(),
            tie_break = ?config.tie_break,
            "new game"
        );

        Ok(Self {
            board,
            scorer: ThreatScorer::new(config.ai_stone),
            tie_break: config.tie_break,
            rng,
        })
    }

    /// Color the engine plays
    #[inline]
    pub fn stone(&self) -> Stone {
        self.scorer.stone()
    }

    /// The engine's view of the board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Tell the engine where the opponent played
    #[instrument(level = "debug", skip(self), fields(stone = self.stone().opponent().name()))]
    pub fn record_opponent_move(&mut self, pos: Pos) -> Result<(), GameError> {
        self.board.place(pos, self.stone().opponent())
    }

    /// Choose a move and commit it to the engine's board
    pub fn compute_ai_move(&mut self) -> Result<Pos, GameError> {
        Ok(self.compute_ai_move_with_stats()?.best_move)
    }

    /// Choose a move, commit it, and report how it was found
    #[instrument(level = "debug", skip(self), fields(stone = self.stone().name()))]
    pub fn compute_ai_move_with_stats(&mut self) -> Result<MoveResult, GameError> {
        let result = self.choose_move()?;
        self.commit_move(result.best_move)?;
        Ok(result)
    }

    /// Choose a move on the engine's board without placing it
    pub(crate) fn choose_move(&mut self) -> Result<MoveResult, GameError> {
        let start = Instant::now();
        let selection = select_move(&self.board, &self.scorer, self.tie_break, &mut self.rng)?;

        let result = MoveResult::from_selection(selection, start);
        debug!(
            pos = %result.best_move,
            score = result.score,
            scanned = result.scanned,
            ties = result.ties,
            time_us = result.time_us,
            "engine move"
        );
        Ok(result)
    }

    /// Place the engine's own stone on its board
    pub(crate) fn commit_move(&mut self, pos: Pos) -> Result<(), GameError> {
        self.board.place(pos, self.stone())
    }

    /// Suggest a move for `stone` on any board, without committing it.
    ///
    /// Reads `board` directly, so it can run on the caller's board.
    pub fn suggest_move<R: CellReader + ?Sized>(&mut self, board: &R, stone: Stone) -> Result<MoveResult, GameError> {
        if !stone.is_player() {
            return Err(GameError::InvalidAiStone);
        }
        let start = Instant::now();
        let scorer = ThreatScorer::new(stone);
        let selection = select_move(board, &scorer, self.tie_break, &mut self.rng)?;
        Ok(MoveResult::from_selection(selection, start))
    }

    /// Score of one empty cell from the engine's point of view
    pub fn score_cell(&self, pos: Pos) -> Result<Score, GameError> {
        let occupant = self.board.value_at(pos)?;
        if occupant != Stone::Empty {
            return Err(GameError::CellOccupied { pos, occupant });
        }
        Ok(self.scorer.score_cell(&self.board, pos))
    }

    /// Every empty cell with its score, in scan order
    pub fn score_map(&self) -> Vec<(Pos, Score)> {
        score_all(&self.board, &self.scorer)
    }
}
