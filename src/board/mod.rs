//! Board data: positions, cells and the grid itself.
//!
//! Pure data with read accessors. The only way to change the live board is
//! through the rules engine; everything here either reads a board or
//! returns a new one.

mod cell;
mod grid;

pub use cell::{Cell, Position};
pub use grid::{Board, Neighbors};
