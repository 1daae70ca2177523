//! Win condition checking
//!
//! A stone wins when it sits on a run of five or more of its own color
//! along any of the four axes. Overlines count.

use crate::board::{CellReader, Pos, Stone, AXES};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Count consecutive `color` stones from `pos` (exclusive) along `(dx, dy)`.
///
/// Stops at the first cell that is off the board, empty, or the other color.
#[inline]
fn count_direction<R: CellReader + ?Sized>(
    board: &R,
    pos: Pos,
    dx: i32,
    dy: i32,
    color: Stone,
) -> usize {
    let mut count = 0;
    let mut step = 1;
    loop {
        let (x, y) = pos.step(dx, dy, step);
        match board.probe(x, y) {
            Some(stone) if stone == color => {
                count += 1;
                step += 1;
            }
            _ => return count,
        }
    }
}

/// Length of the `color` run through `pos` along one axis, counting `pos`
/// itself as `color`.
pub fn run_length<R: CellReader + ?Sized>(board: &R, pos: Pos, color: Stone, axis: (i32, i32)) -> usize {
    let (dx, dy) = axis;
    1 + count_direction(board, pos, dx, dy, color) + count_direction(board, pos, -dx, -dy, color)
}

/// Check whether `color`, just played at `pos`, completes five or more.
///
/// Returns the winning color, or `None`. `Stone::Empty` never wins.
///
/// # Example
///
/// ```
/// use gomoku::{check_win, Board, Pos, Stone};
///
/// let mut board = Board::new();
/// for x in 3..8 {
///     board.place(Pos::new(x, 9), Stone::Black).unwrap();
/// }
/// assert_eq!(check_win(&board, Pos::new(7, 9), Stone::Black), Some(Stone::Black));
/// ```
pub fn check_win<R: CellReader + ?Sized>(board: &R, pos: Pos, color: Stone) -> Option<Stone> {
    if !color.is_player() {
        return None;
    }
    AXES
        .iter()
        .any(|&axis| run_length(board, pos, color, axis) >= WIN_LENGTH)
        .then_some(color)
}

/// Find the winning line through `pos`, if any
///
/// Returns every stone of the first qualifying run, ordered along the axis.
pub fn winning_line<R: CellReader + ?Sized>(board: &R, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if !color.is_player() {
        return None;
    }

    for (dx, dy) in AXES {
        let back = count_direction(board, pos, -dx, -dy, color) as i32;
        let forward = count_direction(board, pos, dx, dy, color) as i32;
        if (1 + back + forward) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .map(|step| {
                    let (x, y) = pos.step(dx, dy, step);
                    Pos::new(x as u8, y as u8)
                })
                .collect();
            return Some(line);
        }
    }
    None
}
