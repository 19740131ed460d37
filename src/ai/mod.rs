//! Computer opponent.
//!
//! The evaluator is a pure function of the board: it never touches a
//! session, and its only source of randomness is the injected `GameRng`.
//! Policies wrap it behind a trait so sessions and drivers can seat
//! different kinds of computer players.

mod evaluator;
mod policy;

pub use evaluator::{Evaluator, MoveScore};
pub use policy::{HeuristicPolicy, MovePolicy, RandomPolicy};
