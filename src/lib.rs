//! # chroma-clash
//!
//! A deterministic two-player territory game engine built around chain
//! reactions, with a heuristic computer opponent.
//!
//! ## Rules in brief
//!
//! - The board is a 6x6 grid. Each cell is empty or owned by one player
//!   and holds a charge.
//! - Each player opens by placing a piece with charge 3 on an empty cell.
//! - Afterwards a move adds one charge to one of your own cells.
//! - A cell reaching charge 4 explodes: it empties, and each orthogonal
//!   neighbour becomes yours and gains one charge. Explosions cascade.
//! - Once both players have opened, owning every cell or wiping out the
//!   opponent wins.
//!
//! ## Design Principles
//!
//! 1. **Presentation-agnostic**: the engine accepts move requests and
//!    returns snapshots. Explosion rounds come back as a list of boards so a
//!    UI can animate them at its own pace.
//!
//! 2. **No ambient state**: a `Session` is an ordinary value. Any number of
//!    games can run side by side.
//!
//! 3. **Reproducible AI**: all randomness flows through an injected,
//!    seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: players, RNG, constants, configuration, errors
//! - `board`: positions, cells, the grid
//! - `rules`: legality, move application, chain-reaction resolution
//! - `ai`: heuristic evaluator and move policies
//! - `session`: the live game and automated play
//!
//! ## Example
//!
//! ```
//! use chroma_clash::{GameStatus, Player, Session};
//!
//! let mut session = Session::new();
//! session.request_move(Player::P1, 2, 2).unwrap();
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.status(), GameStatus::FirstMove(Player::P2));
//! assert_eq!(snapshot.scores()[Player::P1], 1);
//! ```

pub mod ai;
pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EvaluatorConfig, GameRng, IllegalReason, Player, PlayerMap, BOARD_SIZE,
    FIRST_MOVE_CHARGE, MAX_CHARGE,
};

pub use crate::board::{Board, Cell, Position};

pub use crate::rules::{Cascade, GameState, GameStatus, MoveOutcome};

pub use crate::ai::{Evaluator, HeuristicPolicy, MoveScore, MovePolicy, RandomPolicy};

pub use crate::session::{MoveRecord, PlayConfig, PlayReport, Seat, Session, Snapshot};
