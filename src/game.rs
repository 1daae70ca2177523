//! Turn protocol between a human player and the engine
//!
//! [`Game`] owns the authoritative board and walks through the phases
//!
//! ```text
//! AwaitingHumanMove -> HumanMoved -> AwaitingAiMove -> AiMoved -> ...
//! ```
//!
//! until a placement wins or fills the board. Black always moves first,
//! so a game where the engine plays Black starts in `AwaitingAiMove`.

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::{check_win, winning_line};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    /// Board filled with no five
    Draw,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingHumanMove,
    /// Human stone placed, result not yet resolved
    HumanMoved,
    AwaitingAiMove,
    /// Engine stone placed, result not yet resolved
    AiMoved,
    GameOver(Outcome),
}

/// Everything that happened in one call to [`Game::play_turn`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnReport {
    pub human_move: Pos,
    /// `None` when the human move ended the game
    pub ai_move: Option<MoveResult>,
    pub phase: TurnPhase,
}

/// A human-versus-engine game
pub struct Game {
    board: Board,
    engine: AIEngine,
    human: Stone,
    phase: TurnPhase,
    last_move: Option<(Pos, Stone)>,
    history: Vec<(Pos, Stone)>,
}

impl Game {
    pub fn new(config: &EngineConfig) -> Result<Self, GameError> {
        let engine = AIEngine::with_config(config)?;
        let board = Board::with_size(config.board_size)?;
        let human = config.human_stone();
        let phase = if human == Stone::Black {
            TurnPhase::AwaitingHumanMove
        } else {
            TurnPhase::AwaitingAiMove
        };

        Ok(Self {
            board,
            engine,
            human,
            phase,
            last_move: None,
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    #[inline]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[inline]
    pub fn human_stone(&self) -> Stone {
        self.human
    }

    #[inline]
    pub fn ai_stone(&self) -> Stone {
        self.engine.stone()
    }

    /// Color expected to place the next stone, `Empty` once the game is over
    pub fn current_turn(&self) -> Stone {
        match self.phase {
            TurnPhase::AwaitingHumanMove | TurnPhase::AiMoved => self.human,
            TurnPhase::AwaitingAiMove | TurnPhase::HumanMoved => self.ai_stone(),
            TurnPhase::GameOver(_) => Stone::Empty,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            TurnPhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    #[inline]
    pub fn last_move(&self) -> Option<(Pos, Stone)> {
        self.last_move
    }

    #[inline]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    /// Stones placed so far by `stone`
    pub fn moves_by(&self, stone: Stone) -> usize {
        self.history.iter().filter(|&&(_, s)| s == stone).count()
    }

    /// Cells of the winning run, once someone has won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        match (self.phase, self.last_move) {
            (TurnPhase::GameOver(Outcome::Win(winner)), Some((pos, stone))) if stone == winner => {
                winning_line(&self.board, pos, winner)
            }
            _ => None,
        }
    }

    fn expect_phase(&self, expected: TurnPhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase(self.phase))
        }
    }

    fn record(&mut self, pos: Pos, stone: Stone) {
        self.last_move = Some((pos, stone));
        self.history.push((pos, stone));
    }

    /// Place the human's stone. The phase is unchanged on error.
    pub fn play_human(&mut self, pos: Pos) -> Result<TurnPhase, GameError> {
        self.expect_phase(TurnPhase::AwaitingHumanMove)?;
        // Both boards must accept the stone before either changes
        let mirrored = self.engine.board().value_at(pos)?;
        if mirrored != Stone::Empty {
            return Err(GameError::CellOccupied { pos, occupant: mirrored });
        }
        self.board.place(pos, self.human)?;
        self.engine.record_opponent_move(pos)?;
        self.record(pos, self.human);
        self.phase = TurnPhase::HumanMoved;
        debug!(%pos, "human move");
        Ok(self.phase)
    }

    /// Let the engine choose and place its stone
    pub fn play_ai(&mut self) -> Result<MoveResult, GameError> {
        self.expect_phase(TurnPhase::AwaitingAiMove)?;
        let result = self.engine.choose_move()?;
        let stone = self.ai_stone();
        // Shared board first: a refused placement leaves both boards untouched
        self.board.place(result.best_move, stone)?;
        self.engine.commit_move(result.best_move)?;
        self.record(result.best_move, stone);
        self.phase = TurnPhase::AiMoved;
        Ok(result)
    }

    /// Check the last placement for a win or a full board and hand the
    /// turn to the other side.
    pub fn resolve(&mut self) -> Result<TurnPhase, GameError> {
        let next = match self.phase {
            TurnPhase::HumanMoved => TurnPhase::AwaitingAiMove,
            TurnPhase::AiMoved => TurnPhase::AwaitingHumanMove,
            other => return Err(GameError::WrongPhase(other)),
        };

        self.phase = match self.last_move {
            Some((pos, stone)) if check_win(&self.board, pos, stone).is_some() => {
                TurnPhase::GameOver(Outcome::Win(stone))
            }
            _ if self.board.is_full() => TurnPhase::GameOver(Outcome::Draw),
            _ => next,
        };

        if let TurnPhase::GameOver(outcome) = self.phase {
            info!(?outcome, moves = self.history.len(), "game over");
        }
        Ok(self.phase)
    }

    /// Engine's pick for the human side on the shared board, not played
    pub fn suggest_human_move(&mut self) -> Result<MoveResult, GameError> {
        self.expect_phase(TurnPhase::AwaitingHumanMove)?;
        self.engine.suggest_move(&self.board, self.human)
    }

    /// Human move followed, if the game goes on, by the engine's reply
    pub fn play_turn(&mut self, pos: Pos) -> Result<TurnReport, GameError> {
        self.play_human(pos)?;
        let mut phase = self.resolve()?;

        let ai_move = if phase == TurnPhase::AwaitingAiMove {
            let result = self.play_ai()?;
            phase = self.resolve()?;
            Some(result)
        } else {
            None
        };

        Ok(TurnReport {
            human_move: pos,
            ai_move,
            phase,
        })
    }
}
