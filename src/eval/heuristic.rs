//! One-ply threat evaluation of candidate cells
//!
//! For an empty cell the scorer looks along each of the four axes, works
//! out whose stones sit on either side, and measures the runs it would
//! extend or interrupt:
//! - run length of our own stones and of the opponent's
//! - how many of those runs' ends are blocked (opponent stone or edge)
//! - whether a run is broken by a single gap
//!
//! Each axis is scored with [`line_score`] and the four results summed.

use crate::board::{CellReader, Pos, Stone, AXES};

use super::patterns::{line_score, Score};

/// Cells inspected when deciding whose run a direction belongs to
const CLASSIFY_LOOKAHEAD: i32 = 2;

/// Cells walked outward from the candidate in one direction
const SCAN_DEPTH: i32 = 4;

/// Totals gathered along one axis through a candidate cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScan {
    /// Own stones the candidate would join (excluding the candidate)
    pub own_run: u32,
    /// Opponent stones the candidate would interrupt
    pub opp_run: u32,
    /// Ends of the own run blocked by an opponent stone or the edge
    pub own_blocked: u32,
    /// Ends of the opponent run blocked by our stone or the edge
    pub opp_blocked: u32,
    pub own_gap: bool,
    pub opp_gap: bool,
}

/// Whose run a direction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Own,
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gap {
    None,
    /// An empty cell was passed, no stone after it yet
    Pending,
    /// A stone followed the empty cell
    Seen,
}

/// Result of walking one direction
#[derive(Debug, Clone, Copy, Default)]
struct Walk {
    run: u32,
    blocked: u32,
    gap: bool,
}

/// Scores empty cells from the point of view of one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatScorer {
    me: Stone,
    opponent: Stone,
}

impl ThreatScorer {
    /// Scorer playing `me`. `me` should be Black or White.
    pub fn new(me: Stone) -> Self {
        Self { me, opponent: me.opponent() }
    }

    #[inline]
    pub fn stone(&self) -> Stone {
        self.me
    }

    /// Desirability of playing at `pos`, summed over the four axes.
    ///
    /// `pos` is expected to be empty; the cell's own content is never read.
    ///
    /// # Example
    ///
    /// ```
    /// use gomoku::{Board, Pos, Stone, ThreatScorer};
    ///
    /// let mut board = Board::new();
    /// for x in 5..9 {
    ///     board.place(Pos::new(x, 5), Stone::Black).unwrap();
    /// }
    /// assert_eq!(ThreatScorer::new(Stone::Black).score_cell(&board, Pos::new(4, 5)), 10_000.0);
    /// assert_eq!(ThreatScorer::new(Stone::White).score_cell(&board, Pos::new(9, 5)), 9_000.0);
    /// ```
    pub fn score_cell<R: CellReader + ?Sized>(&self, board: &R, pos: Pos) -> Score {
        let score: Score = AXES
            .iter()
            .map(|&axis| line_score(&self.scan_axis(board, pos, axis)))
            .sum();
        tracing::trace!(%pos, score, "scored cell");
        score
    }

    /// Gather run statistics along one axis, both directions
    pub fn scan_axis<R: CellReader + ?Sized>(&self, board: &R, pos: Pos, (dx, dy): (i32, i32)) -> LineScan {
        let mut scan = LineScan::default();

        for (dx, dy) in [(dx, dy), (-dx, -dy)] {
            let Some(side) = self.classify(board, pos, dx, dy) else {
                continue;
            };
            let walk = self.walk(board, pos, dx, dy, side);
            match side {
                Side::Own => {
                    scan.own_run += walk.run;
                    scan.own_blocked += walk.blocked;
                    scan.own_gap |= walk.gap;
                }
                Side::Opponent => {
                    scan.opp_run += walk.run;
                    scan.opp_blocked += walk.blocked;
                    scan.opp_gap |= walk.gap;
                }
            }
        }

        scan
    }

    /// First stone within two cells decides the direction. Empty or
    /// off-board after the lookahead means nothing to extend.
    fn classify<R: CellReader + ?Sized>(&self, board: &R, pos: Pos, dx: i32, dy: i32) -> Option<Side> {
        for step in 1..=CLASSIFY_LOOKAHEAD {
            let (x, y) = pos.step(dx, dy, step);
            match board.probe(x, y)? {
                Stone::Empty => continue,
                stone if stone == self.me => return Some(Side::Own),
                _ => return Some(Side::Opponent),
            }
        }
        None
    }

    /// Walk outward counting `side`'s stones, tolerating one gap
    fn walk<R: CellReader + ?Sized>(&self, board: &R, pos: Pos, dx: i32, dy: i32, side: Side) -> Walk {
        let friend = match side {
            Side::Own => self.me,
            Side::Opponent => self.opponent,
        };

        let mut walk = Walk::default();
        let mut gap = Gap::None;

        for step in 1..=SCAN_DEPTH {
            let (x, y) = pos.step(dx, dy, step);
            let Some(stone) = board.probe(x, y) else {
                walk.blocked += 1;
                break;
            };

            if stone == Stone::Empty {
                if gap != Gap::None {
                    break;
                }
                gap = Gap::Pending;
            } else if stone == friend {
                walk.run += 1;
                if gap == Gap::Pending {
                    gap = Gap::Seen;
                }
            } else {
                walk.blocked += 1;
                break;
            }
        }

        walk.gap = gap == Gap::Seen;
        walk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::eval::PatternScore;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(x, y, stone) in stones {
            board.place(Pos::new(x, y), stone).unwrap();
        }
        board
    }

    fn black_row(xs: impl IntoIterator<Item = u8>, y: u8) -> Board {
        let stones: Vec<_> = xs.into_iter().map(|x| (x, y, Stone::Black)).collect();
        board_with(&stones)
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        let scorer = ThreatScorer::new(Stone::White);
        for pos in board.empty_cells() {
            assert_eq!(scorer.score_cell(&board, pos), 0.0);
        }
    }

    #[test]
    fn test_open_four_completion() {
        let board = black_row(5..9, 5);
        let black = ThreatScorer::new(Stone::Black);
        let white = ThreatScorer::new(Stone::White);

        for pos in [Pos::new(4, 5), Pos::new(9, 5)] {
            assert_eq!(black.score_cell(&board, pos), PatternScore::FIVE);
            assert_eq!(white.score_cell(&board, pos), PatternScore::BLOCK_FIVE);
        }
    }

    #[test]
    fn test_completion_outranks_every_cell() {
        let board = black_row(5..9, 5);
        let black = ThreatScorer::new(Stone::Black);
        let white = ThreatScorer::new(Stone::White);

        for pos in board.empty_cells() {
            if pos == Pos::new(4, 5) || pos == Pos::new(9, 5) {
                continue;
            }
            assert!(black.score_cell(&board, pos) < PatternScore::FIVE, "{pos}");
            assert!(white.score_cell(&board, pos) < PatternScore::BLOCK_FIVE, "{pos}");
        }
    }

    #[test]
    fn test_gapped_two_is_halved() {
        // Candidate (5,5), then empty (6,5), then Black at (7,5) and (8,5)
        let board = black_row([7, 8], 5);
        let scorer = ThreatScorer::new(Stone::Black);
        let scan = scorer.scan_axis(&board, Pos::new(5, 5), (1, 0));
        assert_eq!(
            scan,
            LineScan { own_run: 2, own_gap: true, ..LineScan::default() }
        );
        assert_eq!(scorer.score_cell(&board, Pos::new(5, 5)), 50.0);
    }

    #[test]
    fn test_trailing_empty_is_not_a_gap() {
        let board = black_row([6, 7], 5);
        let scorer = ThreatScorer::new(Stone::Black);
        let scan = scorer.scan_axis(&board, Pos::new(5, 5), (1, 0));
        assert_eq!(scan.own_run, 2);
        assert!(!scan.own_gap);
        assert_eq!(line_score(&scan), PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_lookahead_stops_after_two_cells() {
        // Stone three cells away is out of reach
        let board = black_row([8], 5);
        let scorer = ThreatScorer::new(Stone::Black);
        assert_eq!(scorer.scan_axis(&board, Pos::new(5, 5), (1, 0)), LineScan::default());
    }

    #[test]
    fn test_opponent_blocks_own_run() {
        // Candidate (5,5): Black (6..8,5), White at (9,5)
        let mut board = black_row(6..9, 5);
        board.place(Pos::new(9, 5), Stone::White).unwrap();
        let scorer = ThreatScorer::new(Stone::Black);
        let scan = scorer.scan_axis(&board, Pos::new(5, 5), (1, 0));
        assert_eq!(scan.own_run, 3);
        assert_eq!(scan.own_blocked, 1);
        assert_eq!(line_score(&scan), PatternScore::CLOSED_THREE);
    }

    #[test]
    fn test_edge_blocks_run() {
        // Candidate (2,0) with Black at (1,0) and (0,0): left end is the edge
        let board = black_row([0, 1], 0);
        let scorer = ThreatScorer::new(Stone::Black);
        let scan = scorer.scan_axis(&board, Pos::new(2, 0), (1, 0));
        assert_eq!(scan.own_run, 2);
        assert_eq!(scan.own_blocked, 1);
        assert_eq!(line_score(&scan), PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_boxed_in_run_is_dead() {
        // W B [c] B W
        let board = board_with(&[
            (1, 4, Stone::White),
            (2, 4, Stone::Black),
            (4, 4, Stone::Black),
            (5, 4, Stone::White),
        ]);
        let scorer = ThreatScorer::new(Stone::Black);
        let scan = scorer.scan_axis(&board, Pos::new(3, 4), (1, 0));
        assert_eq!(scan.own_run, 2);
        assert_eq!(scan.own_blocked, 2);
        assert_eq!(line_score(&scan), 0.0);
    }

    #[test]
    fn test_both_sides_counted_on_one_axis() {
        // B B [c] W W W
        let board = board_with(&[
            (3, 9, Stone::Black),
            (4, 9, Stone::Black),
            (6, 9, Stone::White),
            (7, 9, Stone::White),
            (8, 9, Stone::White),
        ]);
        let scorer = ThreatScorer::new(Stone::Black);
        let scan = scorer.scan_axis(&board, Pos::new(5, 9), (1, 0));
        assert_eq!(scan.own_run, 2);
        assert_eq!(scan.opp_run, 3);
        assert_eq!(scan.opp_blocked, 0);
        // Opponent three outranks own two
        assert_eq!(line_score(&scan), PatternScore::BLOCK_OPEN_THREE);
    }

    #[test]
    fn test_overline_extension_scores_nothing() {
        // B B B [c] B B: joining makes six, not five
        let board = black_row([2, 3, 4, 6, 7], 9);
        let pos = Pos::new(5, 9);
        let black = ThreatScorer::new(Stone::Black);
        let white = ThreatScorer::new(Stone::White);

        let scan = black.scan_axis(&board, pos, (1, 0));
        assert_eq!(scan, LineScan { own_run: 5, ..LineScan::default() });
        assert_eq!(line_score(&scan), 0.0);
        assert_eq!(line_score(&white.scan_axis(&board, pos, (1, 0))), 0.0);
        assert_eq!(black.score_cell(&board, pos), 0.0);
        assert_eq!(white.score_cell(&board, pos), 0.0);
    }

    #[test]
    fn test_scores_are_deterministic() {
        let board = board_with(&[
            (9, 9, Stone::Black),
            (10, 10, Stone::White),
            (10, 9, Stone::Black),
            (8, 8, Stone::White),
        ]);
        let scorer = ThreatScorer::new(Stone::White);
        let first: Vec<Score> = board.empty_cells().map(|p| scorer.score_cell(&board, p)).collect();
        let second: Vec<Score> = board.empty_cells().map(|p| scorer.score_cell(&board, p)).collect();
        assert_eq!(first, second);
    }
}
