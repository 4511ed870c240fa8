//! SeaBattle placement board.
//!
//! A fixed 10×10 grid holding ships of length one to four that may not touch,
//! not even diagonally. The crate covers the placement check, adding,
//! removing and moving ships, a seeded random fleet generator and a
//! drag-and-drop state machine for interactive front ends. The model is
//! `no_std` + `alloc`; the `std` feature adds serde derives, logging, text
//! rendering and the `seabattle` binary.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
pub mod fleet;
pub mod interaction;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod rect;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::{generate_fleet, FleetOutcome};
pub use interaction::{DragState, InputEvent, Interaction, Outcome};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
pub use rect::{Rect, RectError};
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
