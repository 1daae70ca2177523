//! Error type shared by the board, engine and turn protocol

use thiserror::Error;

use crate::board::{Pos, Stone};
use crate::game::TurnPhase;

/// Contract violations reported by the engine.
///
/// None of these are expected during normal play; they indicate that the
/// caller passed a coordinate, stone or phase it should have validated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("position {pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    #[error("position {pos} is already occupied by {occupant:?}")]
    CellOccupied { pos: Pos, occupant: Stone },

    #[error("cannot place an empty stone at {0}")]
    EmptyStone(Pos),

    #[error("no legal move left on the board")]
    NoLegalMove,

    #[error("board size {0} is not supported")]
    InvalidBoardSize(usize),

    #[error("the engine must play Black or White")]
    InvalidAiStone,

    #[error("operation not allowed while {0:?}")]
    WrongPhase(TurnPhase),
}
