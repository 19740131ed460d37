//! The authoritative game session.
//!
//! A `Session` owns the one live `GameState` and a log of applied moves.
//! Hosts send move requests and read snapshots; nothing else can change
//! the state. Sessions are plain values: several games can run side by
//! side, and a multi-threaded host serializes access with its own lock.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::ai::MovePolicy;
use crate::board::{Board, Position};
use crate::core::{EngineError, GameRng, Player, PlayerMap};
use crate::rules::{apply_move, GameState, GameStatus, MoveOutcome};

/// Read-only view of a session, safe to hand to presentation code.
pub type Snapshot = GameState;

/// One applied move, as recorded in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the move was made on (0-based).
    pub turn: u32,
    pub player: Player,
    pub position: Position,
    pub first_move: bool,
    pub explosions: usize,
    /// Opponent cells captured by the move.
    pub captures: usize,
}

/// A single game between two players.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: GameState,
    history: Vector<MoveRecord>,
}

impl Session {
    /// Start a new game: empty board, Player 1 to place.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state with an empty history.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: Vector::new(),
        }
    }

    /// Submit a move for `player` at `(row, col)`.
    ///
    /// On success the chain reaction has fully resolved and the turn has
    /// been handed over (or the game has ended). On error nothing changed.
    #[instrument(level = "debug", skip(self))]
    pub fn request_move(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<MoveOutcome, EngineError> {
        let turn = self.state.turn_count();
        let outcome = apply_move(&mut self.state, player, row, col)?;

        self.history.push_back(MoveRecord {
            turn,
            player,
            position: outcome.position,
            first_move: outcome.first_move,
            explosions: outcome.cascade.explosions,
            captures: outcome.cascade.captured_from(player.opponent()),
        });

        if let GameStatus::GameOver(winner) = outcome.status {
            debug!(%winner, moves = self.history.len(), "game over");
        }
        Ok(outcome)
    }

    /// Let `policy` choose and play the current player's move.
    pub fn computer_move(
        &mut self,
        policy: &dyn MovePolicy,
        rng: &mut GameRng,
    ) -> Result<MoveOutcome, EngineError> {
        let player = self.state.current_player();
        let pos = policy.choose_move(&self.state, player, rng)?;
        self.request_move(player, pos.row, pos.col)
    }

    /// Throw the game away and start over.
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::new();
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn scores(&self) -> PlayerMap<usize> {
        self.state.scores()
    }

    pub fn turn_count(&self) -> u32 {
        self.state.turn_count()
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Moves applied since the session started or was last reset.
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }
}
