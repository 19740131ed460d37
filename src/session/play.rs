//! Seating and automated play.
//!
//! A host decides per player whether moves come from a person or from a
//! [`MovePolicy`]. [`play_game`] drives a session with two policies until
//! the game ends or a move limit is hit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::MovePolicy;
use crate::core::{EngineError, GameRng, Player, PlayerMap, COMPUTER_PLAYER};
use crate::rules::{GameState, GameStatus};

use super::game::Session;

/// Who controls a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    /// The standard layout: a person against the computer.
    #[must_use]
    pub fn standard() -> PlayerMap<Seat> {
        PlayerMap::new(|player| {
            if player == COMPUTER_PLAYER {
                Seat::Computer
            } else {
                Seat::Human
            }
        })
    }
}

/// Check whether the computer should move now.
///
/// True when the game accepts moves and the current player is seated as
/// `Seat::Computer`.
#[must_use]
pub fn computer_to_move(state: &GameState, seats: &PlayerMap<Seat>) -> bool {
    match state.status() {
        GameStatus::Resolving | GameStatus::GameOver(_) => false,
        GameStatus::FirstMove(_) | GameStatus::Playing => {
            seats[state.current_player()] == Seat::Computer
        }
    }
}

/// Configuration for automated games.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Maximum moves before the game is abandoned.
    pub max_moves: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { max_moves: 500 }
    }
}

impl PlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }
}

/// Summary of an automated game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayReport {
    /// `None` if the move limit was reached first.
    pub winner: Option<Player>,
    /// Moves played in this call.
    pub moves: usize,
    /// Explosions across all moves.
    pub explosions: usize,
    /// State when play stopped.
    pub final_state: GameState,
}

/// Play `session` to the end with one policy per player.
///
/// Continues from whatever state the session is in.
pub fn play_game(
    session: &mut Session,
    policies: PlayerMap<&dyn MovePolicy>,
    rng: &mut GameRng,
    config: &PlayConfig,
) -> Result<PlayReport, EngineError> {
    let mut moves = 0;
    let mut explosions = 0;

    while moves < config.max_moves && !session.is_over() {
        let player = session.current_player();
        let outcome = session.computer_move(policies[player], rng)?;
        explosions += outcome.cascade.explosions;
        moves += 1;
    }

    let report = PlayReport {
        winner: session.winner(),
        moves,
        explosions,
        final_state: session.snapshot(),
    };
    debug!(winner = ?report.winner, moves, explosions, "automated game finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{HeuristicPolicy, RandomPolicy};

    #[test]
    fn test_standard_seats() {
        let seats = Seat::standard();
        assert_eq!(seats[Player::P1], Seat::Human);
        assert_eq!(seats[Player::P2], Seat::Computer);
    }

    #[test]
    fn test_computer_to_move() {
        let seats = Seat::standard();
        let mut session = Session::new();
        assert!(!computer_to_move(session.state(), &seats));

        session.request_move(Player::P1, 2, 2).unwrap();
        assert!(computer_to_move(session.state(), &seats));

        let resolving =
            GameState::from_parts(*session.board(), Player::P2, GameStatus::Resolving, 1);
        assert!(!computer_to_move(&resolving, &seats));
    }

    #[test]
    fn test_play_config_builder() {
        assert_eq!(PlayConfig::default().max_moves, 500);
        assert_eq!(PlayConfig::new().with_max_moves(20).max_moves, 20);
    }

    #[test]
    fn test_play_game_respects_move_limit() {
        let mut session = Session::new();
        let heuristic = HeuristicPolicy::default();
        let policies: PlayerMap<&dyn MovePolicy> =
            PlayerMap::new(|_| &heuristic as &dyn MovePolicy);

        let report = play_game(
            &mut session,
            policies,
            &mut GameRng::new(42),
            &PlayConfig::new().with_max_moves(6),
        )
        .unwrap();

        assert!(report.moves <= 6);
        assert_eq!(session.history().len(), report.moves);
        assert_eq!(report.final_state, session.snapshot());
    }

    #[test]
    fn test_play_game_is_reproducible() {
        let heuristic = HeuristicPolicy::default();
        let random = RandomPolicy;
        let policies: PlayerMap<&dyn MovePolicy> = PlayerMap::new(|player| {
            if player == Player::P1 {
                &heuristic as &dyn MovePolicy
            } else {
                &random as &dyn MovePolicy
            }
        });
        let config = PlayConfig::new().with_max_moves(200);

        let mut first = Session::new();
        let mut second = Session::new();
        let a = play_game(&mut first, policies, &mut GameRng::new(9), &config).unwrap();
        let b = play_game(&mut second, policies, &mut GameRng::new(9), &config).unwrap();

        assert_eq!(a, b);
        assert_eq!(first.history(), second.history());
    }
}
