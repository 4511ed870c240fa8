pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 10;
pub const BOARD_CELLS: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Longest ship that may be constructed.
pub const MAX_SHIP_LENGTH: usize = 4;

pub const FLEET_SIZE: usize = 10;
/// Standard fleet, largest ships first.
pub const FLEET: [usize; FLEET_SIZE] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Random anchors tried per ship before the generator falls back to a scan.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 10;

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "SEABATTLE_LOG";
