//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default board size (19x19)
pub const BOARD_SIZE: usize = 19;

/// Smallest board a five can fit on
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest board addressable with `u8` coordinates
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Unit vectors of the four lines through a cell: horizontal, vertical and
/// the two diagonals. Each axis is walked both ways.
pub const AXES: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Signed coordinates `step` cells away along `(dx, dy)`
    #[inline]
    pub fn step(self, dx: i32, dy: i32, step: i32) -> (i32, i32) {
        (self.x as i32 + dx * step, self.y as i32 + dy * step)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Read-only access to board cells.
///
/// The scorer, selector and win detector only ever read through this
/// trait, so they can run against the engine's own board or against the
/// caller's board without copying it.
pub trait CellReader {
    /// Side length of the square board
    fn size(&self) -> usize;

    /// Stone at an in-bounds position
    fn cell(&self, pos: Pos) -> Stone;

    /// Whether the position lies on the board
    #[inline]
    fn contains(&self, pos: Pos) -> bool {
        (pos.x as usize) < self.size() && (pos.y as usize) < self.size()
    }

    /// Empty cells in scan order: outer loop over `x`, inner over `y`.
    ///
    /// Move selection breaks ties in this order.
    fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let n = self.size() as u8;
        (0..n)
            .flat_map(move |x| (0..n).map(move |y| Pos::new(x, y)))
            .filter(move |&pos| self.cell(pos) == Stone::Empty)
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    fn probe(&self, x: i32, y: i32) -> Option<Stone> {
        let n = self.size() as i32;
        if x >= 0 && x < n && y >= 0 && y < n {
            Some(self.cell(Pos::new(x as u8, y as u8)))
        } else {
            None
        }
    }
}
