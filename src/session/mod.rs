//! Game sessions: the host-facing boundary of the engine.
//!
//! - `Session`: owns the live game, accepts move requests, hands out snapshots
//! - `play`: seating and a driver for computer-vs-computer games

mod game;
mod play;

pub use game::{MoveRecord, Session, Snapshot};
pub use play::{computer_to_move, play_game, PlayConfig, PlayReport, Seat};
