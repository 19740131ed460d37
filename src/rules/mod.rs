//! Rules engine: legality, move application, chain reactions, termination.
//!
//! - `state`: `GameState` and the `GameStatus` state machine
//! - `engine`: validating and applying moves, finalizing turns
//! - `resolution`: the chain-reaction algorithm, shared with the evaluator

pub mod engine;
pub mod resolution;
pub mod state;

pub use engine::{apply_move, decide_winner, legal_moves, validate_move, MoveOutcome};
pub use resolution::{resolve, Cascade};
pub use state::{GameState, GameStatus};
