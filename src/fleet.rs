//! Randomized placement of the standard fleet.
//!
//! Ships are placed largest first. Each ship gets a handful of uniformly
//! random anchors; when all of them are rejected the generator scans the
//! grid column by column and takes the first legal anchor. A ship with no
//! legal anchor at all is skipped, so callers should check
//! [`FleetOutcome::is_complete`].

use alloc::vec::Vec;
use log::{debug, trace, warn};
use rand::Rng;

use crate::board::Board;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, FLEET, RANDOM_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Summary of a fleet generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetOutcome {
    requested: usize,
    placed: usize,
}

impl FleetOutcome {
    /// Number of ships the generator tried to place.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of ships that ended up on the board.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Returns `true` when every requested ship was placed.
    pub fn is_complete(&self) -> bool {
        self.placed == self.requested
    }
}

/// Draw a uniformly random orientation.
pub fn random_orientation<R: Rng>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Find an anchor for `ship` on `board` without placing it.
///
/// Draws up to [`RANDOM_PLACEMENT_ATTEMPTS`] anchors with `x` in
/// `0..=BOARD_WIDTH` and `y` in `0..=BOARD_HEIGHT`, then scans x-major from
/// (0, 0). Returns `None` if no anchor is legal.
pub fn find_placement<R: Rng>(
    board: &Board,
    ship: &Ship,
    rng: &mut R,
) -> Option<(i32, i32)> {
    for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
        let x = rng.random_range(0..=BOARD_WIDTH);
        let y = rng.random_range(0..=BOARD_HEIGHT);
        if board.can_place(ship, x, y) {
            return Some((x, y));
        }
    }
    trace!(
        "random attempts exhausted for length {} {:?}, scanning",
        ship.length(),
        ship.orientation()
    );
    (0..BOARD_WIDTH)
        .flat_map(|x| (0..BOARD_HEIGHT).map(move |y| (x, y)))
        .find(|&(x, y)| board.can_place(ship, x, y))
}

/// Place the standard fleet on `board`, keeping any ships already there.
pub fn generate_fleet<R: Rng>(board: &mut Board, rng: &mut R) -> FleetOutcome {
    // orientations are all drawn before any anchor
    let ships: Vec<Ship> = FLEET
        .iter()
        .filter_map(|&len| Ship::with_orientation(len, random_orientation(rng)).ok())
        .collect();

    let mut placed = 0;
    for ship in ships {
        let Some((x, y)) = find_placement(board, &ship, rng) else {
            debug!("no legal anchor for ship of length {}", ship.length());
            continue;
        };
        if board.add_ship(ship, x, y).is_ok() {
            placed += 1;
        }
    }

    let outcome = FleetOutcome {
        requested: FLEET.len(),
        placed,
    };
    if !outcome.is_complete() {
        warn!(
            "fleet incomplete: placed {} of {} ships",
            outcome.placed, outcome.requested
        );
    }
    outcome
}
