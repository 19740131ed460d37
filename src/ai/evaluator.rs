//! Heuristic move evaluator.
//!
//! Opening placements prefer the interior of the board. Later moves are
//! scored one candidate at a time by simulating the chain reaction the move
//! would trigger, using the same resolution routine as the live game:
//!
//! ```text
//! score = capture_weight * opponent cells captured
//!       + chain_weight   * explosions
//!       - threat_penalty if any adjacent opponent cell is one charge from exploding
//!       + (BOARD_SIZE - distance to centre)
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::board::{Board, Position};
use crate::core::{
    EngineError, EvaluatorConfig, GameRng, IllegalReason, Player, BOARD_SIZE, MAX_CHARGE,
};
use crate::rules::resolve;

/// Score of one candidate move, broken down by term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// The candidate cell.
    pub position: Position,
    /// Opponent cells captured during the simulated cascade.
    pub captures: usize,
    /// Cells that exploded during the simulated cascade.
    pub explosions: usize,
    /// Adjacent opponent cells one charge short of exploding. Any non-zero
    /// count costs the threat penalty once.
    pub threats: usize,
    /// Centre-proximity bonus (0 when disabled).
    pub positional: i32,
    /// Weighted sum of all terms.
    pub total: i32,
}

/// Heuristic evaluator for computer move selection.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Choose a destination cell for `player`.
    pub fn choose_move(
        &self,
        board: &Board,
        player: Player,
        first_move: bool,
        rng: &mut GameRng,
    ) -> Result<Position, EngineError> {
        if first_move {
            self.choose_first_move(board, rng)
        } else {
            self.best_move(board, player).map(|score| score.position)
        }
    }

    /// Pick an opening cell: uniformly among empty interior cells, falling
    /// back to any empty cell.
    pub fn choose_first_move(
        &self,
        board: &Board,
        rng: &mut GameRng,
    ) -> Result<Position, EngineError> {
        let empty = board.empty_positions();
        let interior: Vec<Position> = empty
            .iter()
            .copied()
            .filter(|pos| pos.is_interior())
            .collect();
        let pool = if interior.is_empty() { &empty } else { &interior };

        match rng.choose(pool) {
            Some(&pos) => Ok(pos),
            None => {
                error!("no empty cell for an opening placement");
                Err(EngineError::InvariantViolation(
                    "no empty cell available for a first move".to_string(),
                ))
            }
        }
    }

    /// Score charging `pos` for `player` on `board`.
    ///
    /// `board` is not modified; the cascade runs on a copy.
    pub fn score_move(
        &self,
        board: &Board,
        pos: Position,
        player: Player,
    ) -> Result<MoveScore, EngineError> {
        let cell = board.cell_at(pos.row, pos.col)?;
        if !cell.is_owned_by(player) {
            return Err(IllegalReason::NotOwnCell.into());
        }
        let opponent = player.opponent();

        let mut simulated = *board;
        simulated.get_mut(pos).add_charge();
        let cascade = resolve(simulated)?;

        let threats = Board::neighbors(pos)
            .into_iter()
            .filter(|&n| {
                let neighbor = board.get(n);
                neighbor.is_owned_by(opponent) && neighbor.charge() == MAX_CHARGE - 1
            })
            .count();

        let positional = if self.config.positional_bonus {
            (BOARD_SIZE - pos.distance_to_center()) as i32
        } else {
            0
        };

        let captures = cascade.captured_from(opponent);
        let explosions = cascade.explosions;
        let threat = if threats > 0 { self.config.threat_penalty } else { 0 };
        let total = self.config.capture_weight * captures as i32
            + self.config.chain_weight * explosions as i32
            - threat
            + positional;

        Ok(MoveScore {
            position: pos,
            captures,
            explosions,
            threats,
            positional,
            total,
        })
    }

    /// Score every cell `player` owns, row-major.
    pub fn rank_moves(&self, board: &Board, player: Player) -> Result<Vec<MoveScore>, EngineError> {
        board
            .owned_positions(player)
            .into_iter()
            .map(|pos| self.score_move(board, pos, player))
            .collect()
    }

    /// The highest-scoring candidate. Ties go to the first in row-major order.
    pub fn best_move(&self, board: &Board, player: Player) -> Result<MoveScore, EngineError> {
        let mut best: Option<MoveScore> = None;
        for score in self.rank_moves(board, player)? {
            if best.map_or(true, |b| score.total > b.total) {
                best = Some(score);
            }
        }

        let Some(best) = best else {
            error!(%player, "no owned cell to charge");
            return Err(EngineError::InvariantViolation(format!(
                "{player} owns no cell to play"
            )));
        };

        debug!(%player, position = %best.position, score = best.total, "selected move");
        Ok(best)
    }
}
