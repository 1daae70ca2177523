//! Game state management for the Gomoku GUI

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::{EngineConfig, Game, GameError, MoveResult, Outcome, Pos, Score, Stone, TurnPhase};

use super::stats::{GameRecord, SessionStats};

/// How a game was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    FiveInRow,
    Surrender,
    /// Board full
    Draw,
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw
    pub winner: Option<Stone>,
    pub win_type: WinType,
    pub winning_line: Option<Vec<Pos>>,
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub config: EngineConfig,
    pub game_over: Option<GameResult>,
    pub stats: SessionStats,
    pub last_ai_result: Option<MoveResult>,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    started: Instant,
}

impl GameState {
    pub fn new(config: EngineConfig) -> Result<Self, GameError> {
        Ok(Self {
            game: Game::new(&config)?,
            config,
            game_over: None,
            stats: SessionStats::default(),
            last_ai_result: None,
            suggested_move: None,
            message: None,
            started: Instant::now(),
        })
    }

    /// Throw the current game away and start another with the same settings.
    ///
    /// An unfinished game is not counted.
    pub fn restart(&mut self) {
        match Game::new(&self.config) {
            Ok(game) => {
                self.game = game;
                self.game_over = None;
                self.last_ai_result = None;
                self.suggested_move = None;
                self.message = None;
                self.started = Instant::now();
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Start over with the engine playing `ai_stone`
    pub fn restart_as(&mut self, ai_stone: Stone) {
        self.config.ai_stone = ai_stone;
        self.restart();
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn is_human_turn(&self) -> bool {
        self.game_over.is_none() && self.game.phase() == TurnPhase::AwaitingHumanMove
    }

    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && self.game.phase() == TurnPhase::AwaitingAiMove
    }

    /// Color to move, `Empty` once the game is decided
    pub fn current_turn(&self) -> Stone {
        if self.game_over.is_some() {
            Stone::Empty
        } else {
            self.game.current_turn()
        }
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.game.play_human(pos).map_err(|e| e.to_string())?;
        self.suggested_move = None;
        self.message = None;
        self.advance();
        Ok(())
    }

    /// Let the engine move if it is its turn
    pub fn run_ai_turn(&mut self) {
        if !self.is_ai_turn() {
            return;
        }
        match self.game.play_ai() {
            Ok(result) => {
                self.last_ai_result = Some(result);
                self.advance();
            }
            Err(err) => {
                warn!(%err, "engine failed to move");
                self.message = Some(format!("AI error: {err}"));
            }
        }
    }

    /// Resolve the last placement and record the game if it ended
    fn advance(&mut self) {
        if let Err(err) = self.game.resolve() {
            self.message = Some(err.to_string());
            return;
        }
        if let Some(outcome) = self.game.outcome() {
            let result = match outcome {
                Outcome::Win(winner) => GameResult {
                    winner: Some(winner),
                    win_type: WinType::FiveInRow,
                    winning_line: self.game.winning_line(),
                },
                Outcome::Draw => GameResult {
                    winner: None,
                    win_type: WinType::Draw,
                    winning_line: None,
                },
            };
            self.finish(result);
        }
    }

    /// The side to move concedes. Needs at least one stone on the board.
    pub fn surrender(&mut self) {
        if self.game_over.is_some() || self.game.history().is_empty() {
            return;
        }
        let loser = self.game.current_turn();
        self.finish(GameResult {
            winner: Some(loser.opponent()),
            win_type: WinType::Surrender,
            winning_line: None,
        });
    }

    fn finish(&mut self, result: GameResult) {
        let record = GameRecord {
            total_moves: self.game.history().len(),
            black_moves: self.game.moves_by(Stone::Black),
            white_moves: self.game.moves_by(Stone::White),
            winner: result.winner,
            duration: self.elapsed(),
        };
        info!(winner = ?result.winner, win_type = ?result.win_type, moves = record.total_moves, "game recorded");
        self.stats.add_game(record);
        self.game_over = Some(result);
        self.suggested_move = None;
    }

    /// Ask the engine where the human should play
    pub fn request_suggestion(&mut self) {
        if !self.is_human_turn() {
            return;
        }
        match self.game.suggest_human_move() {
            Ok(result) => self.suggested_move = Some(result.best_move),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Engine's score for every empty cell
    pub fn heatmap(&self) -> Vec<(Pos, Score)> {
        self.game.engine().score_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(ai: Stone) -> GameState {
        GameState::new(EngineConfig::new(19, ai).with_seed(3)).unwrap()
    }

    #[test]
    fn test_human_move_gets_reply() {
        let mut s = state(Stone::White);
        assert!(s.is_human_turn());
        s.try_place_stone(Pos::new(9, 9)).unwrap();
        assert!(s.is_ai_turn());

        s.run_ai_turn();
        assert!(s.is_human_turn());
        assert_eq!(s.game.history().len(), 2);
        assert!(s.last_ai_result.is_some());
    }

    #[test]
    fn test_rejects_occupied_and_out_of_turn() {
        let mut s = state(Stone::White);
        s.try_place_stone(Pos::new(9, 9)).unwrap();
        assert_eq!(s.try_place_stone(Pos::new(3, 3)), Err("Not your turn".to_string()));
        s.run_ai_turn();
        assert!(s.try_place_stone(Pos::new(9, 9)).unwrap_err().contains("occupied"));
    }

    #[test]
    fn test_surrender_records_game() {
        let mut s = state(Stone::White);
        s.surrender();
        assert!(s.game_over.is_none(), "no surrender before the first move");

        s.try_place_stone(Pos::new(9, 9)).unwrap();
        s.run_ai_turn();
        s.surrender();

        let result = s.game_over.clone().unwrap();
        assert_eq!(result.winner, Some(Stone::White));
        assert_eq!(result.win_type, WinType::Surrender);
        assert_eq!(s.stats.games().len(), 1);
        assert_eq!(s.stats.games()[0].total_moves, 2);
        assert_eq!(s.current_turn(), Stone::Empty);
        assert_eq!(s.try_place_stone(Pos::new(0, 0)), Err("Game is over".to_string()));
    }

    #[test]
    fn test_restart_keeps_stats() {
        let mut s = state(Stone::White);
        s.try_place_stone(Pos::new(9, 9)).unwrap();
        s.run_ai_turn();
        s.surrender();
        s.restart();

        assert!(s.game_over.is_none());
        assert!(s.game.history().is_empty());
        assert_eq!(s.stats.games().len(), 1);
    }

    #[test]
    fn test_engine_opens_when_playing_black() {
        let mut s = state(Stone::White);
        s.restart_as(Stone::Black);
        assert!(s.is_ai_turn());
        s.run_ai_turn();
        assert_eq!(s.game.board().get(Pos::new(9, 9)), Stone::Black);
        assert_eq!(s.current_turn(), Stone::White);
    }

    #[test]
    fn test_suggestion_and_heatmap() {
        let mut s = state(Stone::White);
        s.try_place_stone(Pos::new(9, 9)).unwrap();
        s.run_ai_turn();
        s.request_suggestion();
        let hint = s.suggested_move.unwrap();
        assert_eq!(s.game.board().get(hint), Stone::Empty);
        assert_eq!(s.heatmap().len(), 361 - 2);
    }
}
