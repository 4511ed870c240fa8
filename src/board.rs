//! Board state: placed ships and per-cell display state.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use crate::common::{BoardError, CellState, MoveError};
use crate::config::{BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};
use crate::fleet::{self, FleetOutcome};
use crate::rect::Rect;
use crate::ship::{Orientation, Ship};

/// Handle to a ship placed on a [`Board`]. Stays the same across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(u32);

impl ShipId {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Serializable board state for rendering or syncing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub width: i32,
    pub height: i32,
    /// Row-major cell states, `width * height` entries.
    pub cells: Vec<CellState>,
    pub ships: Vec<ShipPlacement>,
}

/// A placed ship as recorded in a [`BoardState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipPlacement {
    pub id: ShipId,
    pub length: usize,
    pub orientation: Orientation,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PlacedShip {
    id: ShipId,
    ship: Ship,
}

/// 10×10 grid owning the placed ships.
///
/// No two placed ships touch, not even diagonally: every ship's region grown
/// by one cell is disjoint from every other ship's region.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; BOARD_CELLS],
    ships: Vec<PlacedShip>,
    next_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            cells: [CellState::Normal; BOARD_CELLS],
            ships: Vec::new(),
            next_id: 0,
        }
    }

    /// Flat index of (x, y), or `None` outside the grid.
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y * BOARD_WIDTH + x) as usize)
    }

    /// State of the cell at (x, y).
    pub fn cell_state_at(&self, x: i32, y: i32) -> Result<CellState, BoardError> {
        Self::index(x, y)
            .map(|i| self.cells[i])
            .ok_or(BoardError::OutOfBounds { x, y })
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of ships currently on the board.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> + '_ {
        self.ships.iter().map(|p| (p.id, &p.ship))
    }

    /// The placed ship with handle `id`.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|p| p.id == id).map(|p| &p.ship)
    }

    /// Handle of the ship covering (x, y), if any.
    pub fn ship_at(&self, x: i32, y: i32) -> Option<ShipId> {
        self.ships
            .iter()
            .find(|p| p.ship.is_located_at(x, y))
            .map(|p| p.id)
    }

    /// Returns `true` if `ship` may be anchored at (x, y).
    ///
    /// The far edge test is `right >= BOARD_WIDTH`, so the last column and
    /// row are never used. The rest of the placement code depends on this
    /// exact comparison.
    pub fn can_place(&self, ship: &Ship, x: i32, y: i32) -> bool {
        self.fits(ship, x, y, None)
    }

    /// Like [`Board::can_place`], but treats the ship `exclude` as already
    /// lifted off the board. Used to preview a move.
    pub fn can_place_excluding(&self, ship: &Ship, x: i32, y: i32, exclude: ShipId) -> bool {
        self.fits(ship, x, y, Some(exclude))
    }

    fn fits(&self, ship: &Ship, x: i32, y: i32, exclude: Option<ShipId>) -> bool {
        // anchors past the grid never fit
        if x < 0 || y < 0 || x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return false;
        }
        let mut r = ship.region();
        r.set_location(x, y);
        if r.right() >= BOARD_WIDTH || r.bottom() >= BOARD_HEIGHT {
            return false;
        }
        if r.inflate(1, 1).is_err() {
            return false;
        }
        !self
            .ships
            .iter()
            .filter(|p| Some(p.id) != exclude)
            .any(|p| p.ship.region().intersects_with(&r))
    }

    /// Anchor `ship` at (x, y) and mark its cells occupied.
    pub fn add_ship(&mut self, ship: Ship, x: i32, y: i32) -> Result<ShipId, BoardError> {
        let id = ShipId(self.next_id);
        self.insert(id, ship, x, y)?;
        self.next_id += 1;
        Ok(id)
    }

    fn insert(&mut self, id: ShipId, mut ship: Ship, x: i32, y: i32) -> Result<(), BoardError> {
        if !self.can_place(&ship, x, y) {
            return Err(BoardError::InvalidPlacement { x, y });
        }
        ship.move_to(x, y);
        self.fill(&ship.region(), CellState::Occupied);
        self.ships.push(PlacedShip { id, ship });
        debug!("placed ship {} {:?}", id, ship);
        Ok(())
    }

    /// Take ship `id` off the board and hand it back.
    pub fn remove_ship(&mut self, id: ShipId) -> Result<Ship, BoardError> {
        let pos = self
            .ships
            .iter()
            .position(|p| p.id == id)
            .ok_or(BoardError::ShipNotFound(id))?;
        let PlacedShip { ship, .. } = self.ships.remove(pos);
        self.restore_region(&ship.region());
        trace!("removed ship {} {:?}", id, ship);
        Ok(ship)
    }

    /// Move ship `id` to (x, y), keeping its orientation.
    ///
    /// The ship is lifted first, so its old cells do not block the new
    /// anchor. If the new anchor is illegal the ship stays off the board and
    /// comes back in [`MoveError::Unplaced`].
    pub fn move_ship(&mut self, id: ShipId, x: i32, y: i32) -> Result<(), MoveError> {
        let orientation = self
            .ship(id)
            .map(Ship::orientation)
            .ok_or(MoveError::ShipNotFound(id))?;
        self.reposition(id, x, y, orientation)
    }

    /// Move ship `id` to (x, y) with a new orientation.
    pub fn reposition(
        &mut self,
        id: ShipId,
        x: i32,
        y: i32,
        orientation: Orientation,
    ) -> Result<(), MoveError> {
        let mut ship = self
            .remove_ship(id)
            .map_err(|_| MoveError::ShipNotFound(id))?;
        ship.set_orientation(orientation);
        self.insert(id, ship, x, y).map_err(|error| {
            debug!("ship {} left unplaced: {}", id, error);
            MoveError::Unplaced { ship, error }
        })
    }

    /// Remove every ship and reset all cells to [`CellState::Normal`].
    pub fn clear(&mut self) {
        self.ships.clear();
        self.cells = [CellState::Normal; BOARD_CELLS];
    }

    /// Place the standard fleet at random. See [`fleet::generate_fleet`].
    pub fn generate_random_fleet<R: Rng>(&mut self, rng: &mut R) -> FleetOutcome {
        fleet::generate_fleet(self, rng)
    }

    /// Paint `region` with a drag preview state. Cells off the grid are
    /// skipped.
    pub fn paint_preview(&mut self, region: &Rect, valid: bool) {
        let state = if valid {
            CellState::PreviewValid
        } else {
            CellState::PreviewInvalid
        };
        self.fill(region, state);
    }

    /// Recompute the cells of `region` from the placed ships, discarding any
    /// preview paint.
    pub fn restore_region(&mut self, region: &Rect) {
        for (x, y) in region.cells() {
            let Some(i) = Self::index(x, y) else {
                continue;
            };
            self.cells[i] = if self.ship_at(x, y).is_some() {
                CellState::Occupied
            } else {
                CellState::Normal
            };
        }
    }

    fn fill(&mut self, region: &Rect, state: CellState) {
        for (x, y) in region.cells() {
            if let Some(i) = Self::index(x, y) {
                self.cells[i] = state;
            }
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  occupied: {}\n}}",
            self.ships,
            self.cells
                .iter()
                .filter(|&&c| c == CellState::Occupied)
                .count()
        )
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        let ships = b
            .ships
            .iter()
            .map(|p| {
                let (x, y) = p.ship.anchor();
                ShipPlacement {
                    id: p.id,
                    length: p.ship.length(),
                    orientation: p.ship.orientation(),
                    x,
                    y,
                }
            })
            .collect();
        BoardState {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: b.cells.to_vec(),
            ships,
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = BoardError;

    /// Rebuild a board by re-adding every recorded ship, so a state that
    /// breaks the adjacency rule, repeats a handle or was taken from a grid
    /// of another size is rejected. Preview paint is dropped.
    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        if state.width != BOARD_WIDTH || state.height != BOARD_HEIGHT {
            return Err(BoardError::SizeMismatch {
                width: state.width,
                height: state.height,
            });
        }
        let mut board = Board::new();
        for p in state.ships {
            if board.ship(p.id).is_some() {
                return Err(BoardError::DuplicateShipId(p.id));
            }
            let ship = Ship::with_orientation(p.length, p.orientation)?;
            board.insert(p.id, ship, p.x, p.y)?;
            board.next_id = board.next_id.max(p.id.0.saturating_add(1));
        }
        Ok(board)
    }
}
