//! Move selection over a one-ply score scan
//!
//! Every empty cell is scored with a [`ThreatScorer`] in a fixed scan
//! order (outer loop over `x`, inner over `y`) and the best one is kept.
//! When nothing scores above zero the centre is played, or failing that
//! the first empty cell scanned.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{CellReader, Pos, Stone};
use crate::error::GameError;
use crate::eval::{Score, ThreatScorer};

/// How to choose between cells that share the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Each later tied cell replaces the current pick with probability 1/2.
    /// Favours cells scanned late.
    #[default]
    CoinFlip,
    /// Every cell sharing the best score is equally likely
    Uniform,
}

/// Outcome of one selection scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub pos: Pos,
    pub score: Score,
    /// Empty cells scored
    pub scanned: usize,
    /// Cells sharing the winning score (0 when no cell scored above zero)
    pub ties: usize,
}

/// Score of every empty cell, in scan order
pub fn score_all<R: CellReader + ?Sized>(board: &R, scorer: &ThreatScorer) -> Vec<(Pos, Score)> {
    board
        .empty_cells()
        .map(|pos| (pos, scorer.score_cell(board, pos)))
        .collect()
}

/// Pick the cell to play.
///
/// Fails with [`GameError::NoLegalMove`] when the board is full.
pub fn select_move<R, G>(
    board: &R,
    scorer: &ThreatScorer,
    tie_break: TieBreak,
    rng: &mut G,
) -> Result<Selection, GameError>
where
    R: CellReader + ?Sized,
    G: Rng,
{
    let mut best_score: Score = 0.0;
    let mut best: Option<Pos> = None;
    let mut tied: Vec<Pos> = Vec::new();
    let mut ties = 0;
    let mut first_empty = None;
    let mut scanned = 0;

    for pos in board.empty_cells() {
        scanned += 1;
        first_empty.get_or_insert(pos);

        let score = scorer.score_cell(board, pos);
        if score > best_score {
            best_score = score;
            best = Some(pos);
            ties = 1;
            tied.clear();
            tied.push(pos);
        } else if score == best_score && score > 0.0 {
            ties += 1;
            match tie_break {
                TieBreak::CoinFlip => {
                    if rng.gen_bool(0.5) {
                        best = Some(pos);
                    }
                }
                TieBreak::Uniform => tied.push(pos),
            }
        }
    }

    if tie_break == TieBreak::Uniform {
        if let Some(&pos) = tied.choose(rng) {
            best = Some(pos);
        }
    }

    let pos = match best {
        Some(pos) => pos,
        None => {
            // Nothing worth playing for: open in the centre
            let mid = (board.size() / 2) as u8;
            let center = Pos::new(mid, mid);
            if board.cell(center) == Stone::Empty {
                center
            } else {
                first_empty.ok_or(GameError::NoLegalMove)?
            }
        }
    };

    Ok(Selection {
        pos,
        score: best_score,
        scanned,
        ties: if best.is_some() { ties } else { 0 },
    })
}
