//! Ship definitions and region logic using our `Rect`.

use core::fmt;

use crate::common::BoardError;
use crate::config::MAX_SHIP_LENGTH;
use crate::rect::Rect;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A fleet unit anchored at its top-left cell.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    x: i32,
    y: i32,
}

impl Ship {
    /// Create a horizontal ship of `length` anchored at (0, 0).
    pub fn new(length: usize) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidShipLength(length));
        }
        Ok(Ship {
            length,
            orientation: Orientation::default(),
            x: 0,
            y: 0,
        })
    }

    /// Create a ship with an explicit orientation.
    pub fn with_orientation(length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        let mut ship = Self::new(length)?;
        ship.orientation = orientation;
        Ok(ship)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Toggle orientation in place. The anchor does not move.
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.toggled();
    }

    /// Anchor of the ship (x, y).
    pub fn anchor(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Move the anchor without touching any board.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Cells covered by the ship at its current anchor.
    pub fn region(&self) -> Rect {
        // length is validated in `new`, so both dimensions are positive
        let len = self.length as i32;
        match self.orientation {
            Orientation::Horizontal => Rect::from_positive(self.x, self.y, len, 1),
            Orientation::Vertical => Rect::from_positive(self.x, self.y, 1, len),
        }
    }

    /// Returns `true` if (x, y) is one of the ship's cells.
    pub fn is_located_at(&self, x: i32, y: i32) -> bool {
        self.region().contains_point(x, y)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, anchor: ({}, {}), orientation: {:?} }}",
            self.length, self.x, self.y, self.orientation,
        )
    }
}
