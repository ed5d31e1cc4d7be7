use std::error::Error;
use std::fmt;

use crate::board::board_types::Square;

pub type PlacementResult<T> = Result<T, PlacementError>;

/// Error kinds surfaced by the board model and the coordinate boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Coordinate outside the 8x8 board after translation.
    OutOfRange { row: i8, col: i8 },
    /// Boundary input could not be parsed as a file letter or rank number.
    InvalidFormat(String),
    /// Attempted to place a piece on a square that already holds one.
    /// Unreachable from the engine's own loops; a hard contract failure.
    AlreadyOccupied(Square),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfRange { row, col } => {
                write!(f, "coordinate (row {row}, col {col}) is outside the board")
            }
            PlacementError::InvalidFormat(input) => {
                write!(f, "cannot parse {input:?} as a board square")
            }
            PlacementError::AlreadyOccupied(square) => {
                write!(f, "square index {square} already holds a centaur")
            }
        }
    }
}

impl Error for PlacementError {}
