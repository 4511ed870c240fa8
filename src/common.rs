//! Common types for the board model: errors and cell states.

use core::fmt;

use crate::board::ShipId;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::rect::RectError;
use crate::ship::Ship;

/// Display/occupancy state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Empty water.
    #[default]
    Normal,
    /// Covered by a placed ship.
    Occupied,
    /// Drag preview at a legal location.
    PreviewValid,
    /// Drag preview at an illegal location.
    PreviewInvalid,
}

/// Errors returned by Ship and Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A rectangle dimension was not strictly positive.
    InvalidArgument(RectError),
    /// Ship length outside `1..=MAX_SHIP_LENGTH`.
    InvalidShipLength(usize),
    /// The ship cannot be placed at the requested anchor.
    InvalidPlacement { x: i32, y: i32 },
    /// Coordinate outside the grid.
    OutOfBounds { x: i32, y: i32 },
    /// No placed ship carries this handle.
    ShipNotFound(ShipId),
    /// A board state lists the same handle twice.
    DuplicateShipId(ShipId),
    /// A board state was recorded for a grid of another size.
    SizeMismatch { width: i32, height: i32 },
}

impl From<RectError> for BoardError {
    fn from(err: RectError) -> Self {
        BoardError::InvalidArgument(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            BoardError::InvalidShipLength(len) => {
                write!(f, "Ship length {} is not supported", len)
            }
            BoardError::InvalidPlacement { x, y } => {
                write!(f, "Cannot place ship at ({}, {})", x, y)
            }
            BoardError::OutOfBounds { x, y } => write!(f, "Cell ({}, {}) is out of bounds", x, y),
            BoardError::ShipNotFound(id) => write!(f, "Ship {} is not on the board", id),
            BoardError::DuplicateShipId(id) => write!(f, "Ship {} appears more than once", id),
            BoardError::SizeMismatch { width, height } => write!(
                f,
                "Board is {}x{}, expected {}x{}",
                width, height, BOARD_WIDTH, BOARD_HEIGHT
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::InvalidArgument(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors returned by [`crate::Board::move_ship`] and [`crate::Board::reposition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No placed ship carries this handle; the board is unchanged.
    ShipNotFound(ShipId),
    /// The ship was taken off the board but could not be re-added. It is
    /// handed back so the caller can decide where it goes.
    Unplaced { ship: Ship, error: BoardError },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::ShipNotFound(id) => write!(f, "Ship {} is not on the board", id),
            MoveError::Unplaced { error, .. } => write!(f, "Ship left unplaced: {}", error),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::ShipNotFound(_) => None,
            MoveError::Unplaced { error, .. } => Some(error),
        }
    }
}
