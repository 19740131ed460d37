//! Core engine types: players, RNG, constants, configuration, errors.
//!
//! Everything here is independent of the board and the rules.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    EvaluatorConfig, BOARD_SIZE, CELL_COUNT, COMPUTER_PLAYER, FIRST_MOVE_CHARGE, HUMAN_PLAYER,
    MAX_CHARGE, MAX_RESOLUTION_ROUNDS, PLAYER_COUNT,
};
pub use error::{EngineError, IllegalReason};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
