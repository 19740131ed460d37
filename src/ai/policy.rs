//! Move policies for computer-controlled players.
//!
//! - `HeuristicPolicy`: the evaluator's choice
//! - `RandomPolicy`: uniform over legal moves, useful as a sparring partner

use crate::board::Position;
use crate::core::{EngineError, GameRng, Player};
use crate::rules::{legal_moves, GameState};

use super::evaluator::Evaluator;

/// Chooses a move for a player.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `player` in `state`.
    ///
    /// Fails with `InvariantViolation` if the rules leave `player` without a
    /// legal move on their own turn.
    fn choose_move(
        &self,
        state: &GameState,
        player: Player,
        rng: &mut GameRng,
    ) -> Result<Position, EngineError>;
}

/// Heuristic evaluator policy.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy {
    evaluator: Evaluator,
}

impl HeuristicPolicy {
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_move(
        &self,
        state: &GameState,
        player: Player,
        rng: &mut GameRng,
    ) -> Result<Position, EngineError> {
        self.evaluator
            .choose_move(state.board(), player, state.status().is_first_move(), rng)
    }
}

/// Uniform random policy.
///
/// Selects uniformly from legal moves.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_move(
        &self,
        state: &GameState,
        player: Player,
        rng: &mut GameRng,
    ) -> Result<Position, EngineError> {
        let moves = legal_moves(state, player);
        rng.choose(&moves).copied().ok_or_else(|| {
            EngineError::InvariantViolation(format!(
                "{player} has no legal move ({})",
                state.status()
            ))
        })
    }
}
