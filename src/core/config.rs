//! Game constants and evaluator configuration.
//!
//! The board geometry and charge threshold are fixed for this version but
//! live here as named constants so the rules and evaluator never hardcode
//! them. Heuristic weights are runtime configuration via `EvaluatorConfig`.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Charge at which a cell explodes.
pub const MAX_CHARGE: u8 = 4;

/// Charge placed by a player's first move: one short of exploding.
pub const FIRST_MOVE_CHARGE: u8 = MAX_CHARGE - 1;

/// Number of players.
pub const PLAYER_COUNT: usize = 2;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Upper bound on resolution rounds before the cascade is considered broken.
///
/// Any valid board stabilises well within this many rounds.
pub const MAX_RESOLUTION_ROUNDS: usize = CELL_COUNT * CELL_COUNT;

/// Seat taken by the human in the standard human-vs-computer layout.
pub const HUMAN_PLAYER: Player = Player::P1;

/// Seat taken by the computer in the standard human-vs-computer layout.
pub const COMPUTER_PLAYER: Player = Player::P2;

/// Weights of the heuristic move evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Points per opponent cell captured during the simulated cascade.
    pub capture_weight: i32,

    /// Points per explosion during the simulated cascade.
    pub chain_weight: i32,

    /// Points subtracted when any adjacent opponent cell is one charge
    /// short of exploding.
    pub threat_penalty: i32,

    /// Whether to add the centre-proximity bonus.
    pub positional_bonus: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            capture_weight: 10,
            chain_weight: 5,
            threat_penalty: 15,
            positional_bonus: true,
        }
    }
}

impl EvaluatorConfig {
    /// Set the capture weight.
    pub fn with_capture_weight(mut self, weight: i32) -> Self {
        self.capture_weight = weight;
        self
    }

    /// Set the chain (explosion) weight.
    pub fn with_chain_weight(mut self, weight: i32) -> Self {
        self.chain_weight = weight;
        self
    }

    /// Set the threat penalty.
    pub fn with_threat_penalty(mut self, penalty: i32) -> Self {
        self.threat_penalty = penalty;
        self
    }

    /// Enable or disable the positional bonus.
    pub fn with_positional_bonus(mut self, enabled: bool) -> Self {
        self.positional_bonus = enabled;
        self
    }
}
