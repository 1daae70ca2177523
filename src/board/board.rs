//! Board structure with bounds-checked placement

use crate::error::GameError;

use super::{CellReader, Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Square game board, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    /// Number of non-empty cells
    stones: usize,
}

impl Board {
    /// Standard 19x19 board
    pub fn new() -> Self {
        Self::blank(BOARD_SIZE)
    }

    /// Board with a custom side length
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self::blank(size))
    }

    fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.y as usize * self.size + pos.x as usize
    }

    fn check_bounds(&self, pos: Pos) -> Result<(), GameError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { pos, size: self.size })
        }
    }

    /// Get stone at position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board. Use [`Board::value_at`] when the
    /// coordinate has not been validated.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        assert!(self.contains(pos), "position {pos} outside {0}x{0} board", self.size);
        self.cells[self.index(pos)]
    }

    /// Bounds-checked read
    pub fn value_at(&self, pos: Pos) -> Result<Stone, GameError> {
        self.check_bounds(pos)?;
        Ok(self.cells[self.index(pos)])
    }

    /// Check if position is empty
    pub fn is_empty(&self, pos: Pos) -> Result<bool, GameError> {
        Ok(self.value_at(pos)? == Stone::Empty)
    }

    /// Place a stone on an empty, in-bounds cell
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        if stone == Stone::Empty {
            return Err(GameError::EmptyStone(pos));
        }
        let occupant = self.value_at(pos)?;
        if occupant != Stone::Empty {
            return Err(GameError::CellOccupied { pos, occupant });
        }
        let idx = self.index(pos);
        self.cells[idx] = stone;
        self.stones += 1;
        Ok(())
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Centre cell, the opening point
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl CellReader for Board {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn cell(&self, pos: Pos) -> Stone {
        self.get(pos)
    }
}
