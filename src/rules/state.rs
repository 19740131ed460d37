//! Game state: board, turn bookkeeping and status.
//!
//! ## GameStatus
//!
//! ```text
//! FirstMove(P1) -> Resolving -> FirstMove(P2) | GameOver
//! FirstMove(P2) -> Resolving -> Playing | GameOver
//! Playing       -> Resolving -> Playing | GameOver
//! GameOver      (terminal until the session is reset)
//! ```
//!
//! `Resolving` only exists while a move is being applied. A state handed
//! back by the engine is never in it.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Player, PlayerMap};

/// Phase of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The given player must place their opening piece on an empty cell.
    FirstMove(Player),
    /// Normal play: the current player charges one of their own cells.
    Playing,
    /// A chain reaction is being resolved; no moves are accepted.
    Resolving,
    /// The given player has won.
    GameOver(Player),
}

impl GameStatus {
    /// Check whether this is an opening placement phase.
    #[must_use]
    pub const fn is_first_move(self) -> bool {
        matches!(self, GameStatus::FirstMove(_))
    }

    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::GameOver(_))
    }

    /// The winner, if the game has ended.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::GameOver(winner) => Some(winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::FirstMove(player) => write!(f, "first move ({player})"),
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Resolving => write!(f, "resolving"),
            GameStatus::GameOver(winner) => write!(f, "game over ({winner} wins)"),
        }
    }
}

/// Complete, copyable game state.
///
/// This is also the read-only snapshot handed to presentation layers.
/// Fields are only written by the rules engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) scores: PlayerMap<usize>,
    pub(crate) turn_count: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The start state: empty board, Player 1 to place.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::P1,
            status: GameStatus::FirstMove(Player::P1),
            scores: PlayerMap::with_value(0),
            turn_count: 0,
        }
    }

    /// Build a state from its parts, e.g. to set up a position for analysis.
    ///
    /// Scores are derived from the board.
    #[must_use]
    pub fn from_parts(
        board: Board,
        current_player: Player,
        status: GameStatus,
        turn_count: u32,
    ) -> Self {
        Self {
            board,
            current_player,
            status,
            scores: board.territory(),
            turn_count,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Owned-cell counts as of the last completed turn.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<usize> {
        self.scores
    }

    /// Number of completed, non-final turns.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
