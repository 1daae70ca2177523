//! Pattern scores for candidate-cell evaluation
//!
//! Weights of the one-ply threat table. Own patterns always outrank the
//! matching opponent pattern by a tenth, so attacking wins ties with
//! defending at the same run length.

use super::heuristic::LineScan;

/// Score of a candidate cell. Fractional because gapped runs are halved.
pub type Score = f64;

/// Pattern scores for one axis through a candidate cell
pub struct PatternScore;

impl PatternScore {
    /// Completes five (or more) of our own
    pub const FIVE: Score = 10_000.0;
    /// Stops the opponent's five
    pub const BLOCK_FIVE: Score = 9_000.0;

    /// Own three, neither end blocked
    pub const OPEN_THREE: Score = 1_000.0;
    /// Own three, one end blocked
    pub const CLOSED_THREE: Score = 100.0;
    pub const BLOCK_OPEN_THREE: Score = 900.0;
    pub const BLOCK_CLOSED_THREE: Score = 90.0;

    pub const OPEN_TWO: Score = 100.0;
    pub const CLOSED_TWO: Score = 10.0;
    pub const BLOCK_OPEN_TWO: Score = 90.0;
    pub const BLOCK_CLOSED_TWO: Score = 9.0;

    /// Next to a single own stone
    pub const ONE: Score = 10.0;
    /// Next to a single opponent stone
    pub const BLOCK_ONE: Score = 9.0;

    /// Nothing worth playing for
    pub const NONE: Score = 0.0;
}

/// Score a run by how many of its ends are blocked. Two blocked ends make
/// the run dead.
#[inline]
fn by_blocked_ends(blocked: u32, open: Score, closed: Score) -> Score {
    match blocked {
        0 => open,
        1 => closed,
        _ => PatternScore::NONE,
    }
}

/// Turn one axis scan into a score.
///
/// Rules are tried longest run first, own run before opponent run at each
/// length, and the first that matches decides. A gap on either side
/// halves the result. Runs of five or more adjacent stones match no
/// rule of their own length.
pub fn line_score(scan: &LineScan) -> Score {
    let score = match (scan.own_run, scan.opp_run) {
        (4, _) => PatternScore::FIVE,
        (_, 4) => PatternScore::BLOCK_FIVE,
        (3, _) => by_blocked_ends(scan.own_blocked, PatternScore::OPEN_THREE, PatternScore::CLOSED_THREE),
        (_, 3) => by_blocked_ends(
            scan.opp_blocked,
            PatternScore::BLOCK_OPEN_THREE,
            PatternScore::BLOCK_CLOSED_THREE,
        ),
        (2, _) => by_blocked_ends(scan.own_blocked, PatternScore::OPEN_TWO, PatternScore::CLOSED_TWO),
        (_, 2) => by_blocked_ends(
            scan.opp_blocked,
            PatternScore::BLOCK_OPEN_TWO,
            PatternScore::BLOCK_CLOSED_TWO,
        ),
        (1, _) => PatternScore::ONE,
        (_, 1) => PatternScore::BLOCK_ONE,
        _ => PatternScore::NONE,
    };

    if scan.own_gap || scan.opp_gap {
        score / 2.0
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(own_run: u32, opp_run: u32, own_blocked: u32, opp_blocked: u32) -> LineScan {
        LineScan {
            own_run,
            opp_run,
            own_blocked,
            opp_blocked,
            ..LineScan::default()
        }
    }

    #[test]
    fn test_five_beats_block() {
        assert_eq!(line_score(&scan(4, 4, 2, 2)), PatternScore::FIVE);
        assert_eq!(line_score(&scan(0, 4, 0, 2)), PatternScore::BLOCK_FIVE);
    }

    #[test]
    fn test_longer_runs_fall_through() {
        assert_eq!(line_score(&scan(6, 0, 0, 0)), 0.0);
        assert_eq!(line_score(&scan(0, 5, 0, 0)), 0.0);
        // Shorter run on the other side still counts
        assert_eq!(line_score(&scan(5, 3, 0, 0)), PatternScore::BLOCK_OPEN_THREE);
        assert_eq!(line_score(&scan(2, 5, 0, 0)), PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_threes() {
        assert_eq!(line_score(&scan(3, 0, 0, 0)), 1000.0);
        assert_eq!(line_score(&scan(3, 0, 1, 0)), 100.0);
        assert_eq!(line_score(&scan(3, 0, 2, 0)), 0.0);
        assert_eq!(line_score(&scan(0, 3, 0, 0)), 900.0);
        assert_eq!(line_score(&scan(0, 3, 0, 1)), 90.0);
        assert_eq!(line_score(&scan(0, 3, 0, 2)), 0.0);
    }

    #[test]
    fn test_twos_and_ones() {
        assert_eq!(line_score(&scan(2, 0, 0, 0)), 100.0);
        assert_eq!(line_score(&scan(2, 0, 1, 0)), 10.0);
        assert_eq!(line_score(&scan(2, 0, 2, 0)), 0.0);
        assert_eq!(line_score(&scan(0, 2, 0, 0)), 90.0);
        assert_eq!(line_score(&scan(0, 2, 0, 1)), 9.0);
        assert_eq!(line_score(&scan(0, 2, 0, 3)), 0.0);
        assert_eq!(line_score(&scan(1, 0, 1, 0)), 10.0);
        assert_eq!(line_score(&scan(0, 1, 0, 1)), 9.0);
        assert_eq!(line_score(&LineScan::default()), 0.0);
    }

    #[test]
    fn test_dead_own_three_shadows_open_opponent_three() {
        // First matching rule decides, even when it scores nothing
        assert_eq!(line_score(&scan(3, 3, 2, 0)), 0.0);
        assert_eq!(line_score(&scan(2, 3, 0, 0)), 900.0);
    }

    #[test]
    fn test_gap_halves() {
        let mut s = scan(2, 0, 0, 0);
        s.own_gap = true;
        assert_eq!(line_score(&s), 50.0);

        let mut s = scan(0, 2, 0, 1);
        s.opp_gap = true;
        assert_eq!(line_score(&s), 4.5);
    }
}
