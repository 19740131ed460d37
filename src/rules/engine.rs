//! Move legality, move application and turn finalization.
//!
//! [`apply_move`] is the only entry point that changes a [`GameState`]. It
//! works on a copy and commits only once the whole turn has been resolved,
//! so a rejected move or a failed resolution leaves the caller's state
//! exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Cell, Position};
use crate::core::{EngineError, IllegalReason, Player, PlayerMap, CELL_COUNT, FIRST_MOVE_CHARGE};

use super::resolution::{resolve, Cascade};
use super::state::{GameState, GameStatus};

/// Everything that happened while applying one move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Who moved.
    pub player: Player,

    /// Target cell.
    pub position: Position,

    /// Whether this was an opening placement.
    pub first_move: bool,

    /// Board right after the placement, before any explosion.
    pub placed: Board,

    /// The chain reaction triggered by the move.
    pub cascade: Cascade,

    /// Status after the turn was finalized.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// Every board a presentation layer may want to show, in order:
    /// the placement followed by one board per explosion round.
    pub fn frames(&self) -> impl Iterator<Item = &Board> {
        std::iter::once(&self.placed).chain(self.cascade.rounds.iter())
    }
}

/// Check whether `player` may act on `(row, col)` in `state`.
///
/// Returns the validated position.
pub fn validate_move(
    state: &GameState,
    player: Player,
    row: usize,
    col: usize,
) -> Result<Position, EngineError> {
    match state.status {
        GameStatus::GameOver(_) => return Err(IllegalReason::GameOver.into()),
        GameStatus::Resolving => return Err(IllegalReason::Resolving.into()),
        _ => {}
    }

    let pos = Position::checked(row, col)?;
    let cell = state.board.get(pos);

    match state.status {
        GameStatus::FirstMove(expected) => {
            if player != expected {
                return Err(IllegalReason::WrongPlayer.into());
            }
            if !cell.is_empty() {
                return Err(IllegalReason::CellOccupied.into());
            }
        }
        _ => {
            if player != state.current_player {
                return Err(IllegalReason::WrongPlayer.into());
            }
            if !cell.is_owned_by(player) {
                return Err(IllegalReason::NotOwnCell.into());
            }
        }
    }

    Ok(pos)
}

/// Every position `player` may act on, row-major.
///
/// Empty when it is not `player`'s turn or the game is over.
#[must_use]
pub fn legal_moves(state: &GameState, player: Player) -> Vec<Position> {
    Board::positions()
        .filter(|pos| validate_move(state, player, pos.row, pos.col).is_ok())
        .collect()
}

/// Apply a move, resolve the chain reaction and finalize the turn.
///
/// On error `state` is left untouched.
pub fn apply_move(
    state: &mut GameState,
    player: Player,
    row: usize,
    col: usize,
) -> Result<MoveOutcome, EngineError> {
    let pos = validate_move(state, player, row, col)?;
    let first_move = state.status.is_first_move();

    let mut next = *state;
    if first_move {
        next.board.set(pos, Cell::owned(player, FIRST_MOVE_CHARGE));
    } else {
        next.board.get_mut(pos).add_charge();
    }
    next.status = GameStatus::Resolving;
    debug!(%player, %pos, first_move, "move placed");

    let placed = next.board;
    let cascade = resolve(placed)?;
    next.board = cascade.board;
    finalize_turn(&mut next);

    debug!(
        explosions = cascade.explosions,
        rounds = cascade.round_count(),
        status = %next.status,
        "turn finalized"
    );

    *state = next;
    Ok(MoveOutcome {
        player,
        position: pos,
        first_move,
        placed,
        cascade,
        status: state.status,
    })
}

/// The winner implied by a territory count, ignoring the opening guard.
#[must_use]
pub fn decide_winner(territory: &PlayerMap<usize>) -> Option<Player> {
    let p1 = territory[Player::P1];
    let p2 = territory[Player::P2];

    if p1 == CELL_COUNT {
        Some(Player::P1)
    } else if p2 == CELL_COUNT {
        Some(Player::P2)
    } else if p1 == 0 && p2 > 0 {
        Some(Player::P2)
    } else if p2 == 0 && p1 > 0 {
        Some(Player::P1)
    } else {
        None
    }
}

/// Recompute scores, check for a winner and hand the turn over.
///
/// Nobody can win until both players have made their opening placement.
/// A finished game keeps its last `current_player` and `turn_count`.
fn finalize_turn(state: &mut GameState) {
    state.scores = state.board.territory();
    let next_turn = state.turn_count + 1;

    if next_turn > 1 {
        if let Some(winner) = decide_winner(&state.scores) {
            state.status = GameStatus::GameOver(winner);
            return;
        }
    }

    let next_player = state.current_player.opponent();
    state.current_player = next_player;
    state.turn_count = next_turn;
    state.status = if next_turn < 2 {
        GameStatus::FirstMove(next_player)
    } else {
        GameStatus::Playing
    };
}
