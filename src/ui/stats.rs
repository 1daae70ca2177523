//! Per-game move counts and session win tallies
//!
//! Kept in memory for the lifetime of the window only.

use std::time::Duration;

use crate::Stone;

/// Summary of one finished game
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub total_moves: usize,
    pub black_moves: usize,
    pub white_moves: usize,
    /// `None` for a draw
    pub winner: Option<Stone>,
    pub duration: Duration,
}

/// Finished games of this session
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    games: Vec<GameRecord>,
    black_wins: usize,
    white_wins: usize,
}

impl SessionStats {
    pub fn add_game(&mut self, record: GameRecord) {
        match record.winner {
            Some(Stone::Black) => self.black_wins += 1,
            Some(Stone::White) => self.white_wins += 1,
            _ => {}
        }
        self.games.push(record);
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn wins(&self, stone: Stone) -> usize {
        match stone {
            Stone::Black => self.black_wins,
            Stone::White => self.white_wins,
            Stone::Empty => 0,
        }
    }

    /// Win percentages `(black, white)`, `None` before the first game
    pub fn win_ratio(&self) -> Option<(f64, f64)> {
        let total = self.games.len();
        if total == 0 {
            return None;
        }
        let pct = |wins: usize| wins as f64 / total as f64 * 100.0;
        Some((pct(self.black_wins), pct(self.white_wins)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winner: Option<Stone>) -> GameRecord {
        GameRecord {
            total_moves: 9,
            black_moves: 5,
            white_moves: 4,
            winner,
            duration: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_empty_session() {
        let stats = SessionStats::default();
        assert!(stats.games().is_empty());
        assert_eq!(stats.win_ratio(), None);
    }

    #[test]
    fn test_win_ratio() {
        let mut stats = SessionStats::default();
        stats.add_game(record(Some(Stone::Black)));
        stats.add_game(record(Some(Stone::White)));
        stats.add_game(record(Some(Stone::White)));
        stats.add_game(record(None));

        assert_eq!(stats.games().len(), 4);
        assert_eq!(stats.wins(Stone::Black), 1);
        assert_eq!(stats.wins(Stone::White), 2);
        assert_eq!(stats.win_ratio(), Some((25.0, 50.0)));
    }
}
