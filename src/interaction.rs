//! Drag-and-drop state machine for repositioning placed ships.
//!
//! A front end translates its raw input into [`InputEvent`]s and feeds them
//! to [`Interaction::handle`]. The state machine paints preview cells on the
//! board while a ship is dragged and commits the move on drop. The board
//! itself only ever sees preview painting and committed moves.

use crate::board::{Board, ShipId};
use crate::common::MoveError;
use crate::ship::Ship;

/// Discrete input events, in board cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Button pressed on a cell.
    Press { x: i32, y: i32 },
    /// Pointer entered a cell while dragging.
    Enter { x: i32, y: i32 },
    /// Rotation modifier pressed or released.
    ModifierToggle { pressed: bool },
    /// Dragged ship released over a cell.
    Drop { x: i32, y: i32 },
    /// Pointer left the current cell.
    Leave,
}

/// A ship being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    id: ShipId,
    preview: Ship,
    rotated: bool,
}

impl Drag {
    /// Handle of the ship that will move on drop.
    pub fn ship_id(&self) -> ShipId {
        self.id
    }

    /// Preview copy of the ship: current anchor and orientation.
    pub fn preview(&self) -> &Ship {
        &self.preview
    }
}

/// Whether a ship is currently being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Drag),
}

/// What an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Event had no effect in the current state.
    Ignored,
    /// A drag started on ship `id`.
    Started(ShipId),
    /// Preview repainted; `valid` tells whether a drop here would succeed.
    Preview { valid: bool },
    /// Preview cells restored.
    Cleared,
    /// Drop committed.
    Moved(ShipId),
    /// Drop refused; the ship stays where it was.
    Rejected(ShipId),
}

/// Drag-and-drop driver for one board. Starts idle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction {
    state: DragState,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Feed one event. A `MoveError` means the board lost the dragged ship
    /// on commit; the state machine is back to idle either way.
    pub fn handle(&mut self, board: &mut Board, event: InputEvent) -> Result<Outcome, MoveError> {
        let drag = match &mut self.state {
            DragState::Dragging(drag) => drag,
            DragState::Idle => {
                return Ok(match event {
                    InputEvent::Press { x, y } => self.start(board, x, y),
                    _ => Outcome::Ignored,
                });
            }
        };

        match event {
            InputEvent::Enter { x, y } => {
                board.restore_region(&drag.preview.region());
                drag.preview.move_to(x, y);
                Ok(Outcome::Preview {
                    valid: paint(board, drag),
                })
            }
            InputEvent::ModifierToggle { pressed } if pressed != drag.rotated => {
                board.restore_region(&drag.preview.region());
                drag.preview.rotate();
                drag.rotated = pressed;
                Ok(Outcome::Preview {
                    valid: paint(board, drag),
                })
            }
            InputEvent::Leave => {
                board.restore_region(&drag.preview.region());
                Ok(Outcome::Cleared)
            }
            InputEvent::Drop { x, y } => {
                let mut drag = *drag;
                self.state = DragState::Idle;
                board.restore_region(&drag.preview.region());
                drag.preview.move_to(x, y);
                if !board.can_place_excluding(&drag.preview, x, y, drag.id) {
                    return Ok(Outcome::Rejected(drag.id));
                }
                board.reposition(drag.id, x, y, drag.preview.orientation())?;
                Ok(Outcome::Moved(drag.id))
            }
            _ => Ok(Outcome::Ignored),
        }
    }

    fn start(&mut self, board: &Board, x: i32, y: i32) -> Outcome {
        let Some(id) = board.ship_at(x, y) else {
            return Outcome::Ignored;
        };
        let Some(ship) = board.ship(id) else {
            return Outcome::Ignored;
        };
        self.state = DragState::Dragging(Drag {
            id,
            preview: *ship,
            rotated: false,
        });
        Outcome::Started(id)
    }
}

fn paint(board: &mut Board, drag: &Drag) -> bool {
    let (x, y) = drag.preview.anchor();
    let valid = board.can_place_excluding(&drag.preview, x, y, drag.id);
    board.paint_preview(&drag.preview.region(), valid);
    valid
}
