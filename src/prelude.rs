//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, CellState, FleetOutcome, InputEvent, Interaction, Orientation, Outcome,
    Rect, Ship, ShipId,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, render_board};
