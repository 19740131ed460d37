//! Chain-reaction resolution.
//!
//! Resolution runs in whole-board rounds:
//!
//! 1. Collect every cell at or above `MAX_CHARGE`, row-major. None left
//!    means the board is stable.
//! 2. On a fresh copy of the pre-round board, each exploding cell is reset
//!    to empty and every in-bounds orthogonal neighbour is handed to the
//!    exploder's owner and gains one charge.
//! 3. The copy becomes the board for the next round.
//!
//! Exploders read their owner from the pre-round board, so all captures in
//! a round are simultaneous. Writes to the copy happen in scan order: when
//! two explosions hit the same neighbour, both add charge and the later one
//! sets the owner.
//!
//! The same function serves the live session and the evaluator's
//! look-ahead. It takes a board by value and never touches anything else.

use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use crate::board::{Board, Cell};
use crate::core::{EngineError, Player, PlayerMap, MAX_RESOLUTION_ROUNDS};

/// Result of resolving a board to a fixed point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cascade {
    /// The stable board.
    pub board: Board,

    /// Board after each explosion round, in order. Empty if nothing exploded.
    pub rounds: Vec<Board>,

    /// Total number of cell explosions across all rounds.
    pub explosions: usize,

    /// Cells taken away from each player: one count per neighbour update
    /// that changed the cell's owner away from that player.
    pub captured: PlayerMap<usize>,
}

impl Cascade {
    /// Number of explosion rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Check whether any cell exploded.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.explosions == 0
    }

    /// Cells captured from `victim`.
    #[must_use]
    pub fn captured_from(&self, victim: Player) -> usize {
        self.captured[victim]
    }
}

/// Resolve every pending explosion on `board`.
///
/// Fails with `InvariantViolation` if a critical cell has no owner or the
/// cascade fails to settle within `MAX_RESOLUTION_ROUNDS`.
pub fn resolve(board: Board) -> Result<Cascade, EngineError> {
    let mut board = board;
    let mut rounds = Vec::new();
    let mut explosions = 0;
    let mut captured = PlayerMap::with_value(0);

    loop {
        let exploding = board.critical_positions();
        if exploding.is_empty() {
            break;
        }

        if rounds.len() >= MAX_RESOLUTION_ROUNDS {
            error!(rounds = rounds.len(), "chain reaction did not settle");
            return Err(EngineError::InvariantViolation(format!(
                "chain reaction still active after {} rounds",
                rounds.len()
            )));
        }

        let mut next = board;
        for &pos in &exploding {
            let Some(owner) = board.get(pos).owner() else {
                error!(%pos, "critical cell has no owner");
                return Err(EngineError::InvariantViolation(format!(
                    "critical cell {pos} has no owner"
                )));
            };

            next.set(pos, Cell::empty());
            for neighbor in Board::neighbors(pos) {
                let target = next.get_mut(neighbor);
                if let Some(previous) = target.owner() {
                    if previous != owner {
                        captured[previous] += 1;
                    }
                }
                target.absorb(owner);
            }
        }

        explosions += exploding.len();
        board = next;
        rounds.push(board);
        trace!(round = rounds.len(), exploded = exploding.len(), "explosion round resolved");
    }

    Ok(Cascade {
        board,
        rounds,
        explosions,
        captured,
    })
}
