//! Engine configuration

use crate::board::{Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::GameError;
use crate::search::TieBreak;

/// Settings fixed for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Color the engine plays
    pub ai_stone: Stone,
    pub tie_break: TieBreak,
    /// Seed for tie-breaking; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            ai_stone: Stone::White,
            tie_break: TieBreak::CoinFlip,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn new(board_size: usize, ai_stone: Stone) -> Self {
        Self {
            board_size,
            ai_stone,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Color the human plays
    #[inline]
    pub fn human_stone(&self) -> Stone {
        self.ai_stone.opponent()
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GameError::InvalidBoardSize(self.board_size));
        }
        if !self.ai_stone.is_player() {
            return Err(GameError::InvalidAiStone);
        }
        Ok(())
    }
}
