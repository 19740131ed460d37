//! Engine error taxonomy.
//!
//! - `OutOfBounds`: caller passed a coordinate outside the board.
//! - `IllegalMove`: phase, turn, or ownership violation. Expected and
//!   recoverable; the session is left untouched.
//! - `InvariantViolation`: the rules engine reached a state it should never
//!   reach. Indicates a bug and is logged at error level where raised.

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalReason {
    #[error("the game is over")]
    GameOver,

    #[error("a chain reaction is still resolving")]
    Resolving,

    #[error("it is not this player's turn")]
    WrongPlayer,

    #[error("first moves must target an empty cell")]
    CellOccupied,

    #[error("moves must target one of the player's own cells")]
    NotOwnCell,
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalReason),

    #[error("engine invariant violated: {0}")]
    InvariantViolation(String),
}

impl EngineError {
    /// Check whether this is an expected, recoverable rejection.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EngineError::InvariantViolation(_))
    }
}
