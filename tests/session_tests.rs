//! Session-level tests: turn flow, reset, snapshots, automated play and
//! use from a multi-threaded host.

use std::sync::{Arc, Mutex};
use std::thread;

use chroma_clash::session::{computer_to_move, play_game};
use chroma_clash::{
    EngineError, GameRng, GameState, GameStatus, HeuristicPolicy, IllegalReason, MovePolicy,
    PlayConfig, Player, PlayerMap, RandomPolicy, Seat, Session,
};

#[test]
fn test_new_session_start_state() {
    let session = Session::new();
    let snapshot = session.snapshot();

    assert_eq!(snapshot.status(), GameStatus::FirstMove(Player::P1));
    assert_eq!(snapshot.current_player(), Player::P1);
    assert_eq!(snapshot.turn_count(), 0);
    assert_eq!(snapshot.scores(), PlayerMap::with_value(0));
    assert_eq!(snapshot.board().empty_positions().len(), 36);
}

#[test]
fn test_turns_alternate() {
    let mut session = Session::new();
    session.request_move(Player::P1, 1, 1).unwrap();
    assert_eq!(session.current_player(), Player::P2);
    session.request_move(Player::P2, 4, 4).unwrap();
    assert_eq!(session.current_player(), Player::P1);
    session.request_move(Player::P1, 1, 1).unwrap();
    assert_eq!(session.current_player(), Player::P2);
    assert_eq!(session.turn_count(), 3);
}

#[test]
fn test_outcome_frames_for_animation() {
    let mut session = Session::new();
    session.request_move(Player::P1, 2, 2).unwrap();
    session.request_move(Player::P2, 2, 3).unwrap();
    let outcome = session.request_move(Player::P1, 2, 2).unwrap();

    let frames: Vec<_> = outcome.frames().collect();
    assert_eq!(frames.len(), 3);
    assert_eq!(*frames[2], *session.board());
    assert_eq!(outcome.status, session.status());
}

#[test]
fn test_reset_after_game_over() {
    let mut session = Session::new();
    session.request_move(Player::P1, 2, 2).unwrap();
    session.request_move(Player::P2, 2, 3).unwrap();
    session.request_move(Player::P1, 2, 2).unwrap();
    assert_eq!(session.winner(), Some(Player::P1));

    assert_eq!(
        session.request_move(Player::P2, 0, 0),
        Err(EngineError::IllegalMove(IllegalReason::GameOver))
    );

    session.reset();
    assert_eq!(session.snapshot(), GameState::new());
    assert!(session.history().is_empty());
    session.request_move(Player::P1, 0, 0).unwrap();
}

#[test]
fn test_history_records_captures() {
    let mut session = Session::new();
    session.request_move(Player::P1, 2, 2).unwrap();
    session.request_move(Player::P2, 2, 3).unwrap();
    session.request_move(Player::P1, 2, 2).unwrap();

    let last = *session.history().last().unwrap();
    assert_eq!(last.player, Player::P1);
    assert_eq!(last.turn, 2);
    assert!(!last.first_move);
    assert_eq!(last.explosions, 2);
    assert_eq!(last.captures, 1);
}

#[test]
fn test_human_versus_computer_loop() {
    let seats = Seat::standard();
    let policy = HeuristicPolicy::default();
    let mut rng = GameRng::new(2024);
    let mut session = Session::new();

    session.request_move(Player::P1, 0, 0).unwrap();
    assert!(computer_to_move(session.state(), &seats));

    let reply = session.computer_move(&policy, &mut rng).unwrap();
    assert_eq!(reply.player, Player::P2);
    assert!(!computer_to_move(session.state(), &seats));
    assert_eq!(session.status(), GameStatus::Playing);
}

#[test]
fn test_computer_versus_computer_game_stays_consistent() {
    let heuristic = HeuristicPolicy::default();
    let random = RandomPolicy;
    let policies: PlayerMap<&dyn MovePolicy> = PlayerMap::new(|player| match player {
        Player::P1 => &heuristic as &dyn MovePolicy,
        Player::P2 => &random as &dyn MovePolicy,
    });

    for seed in 0..5 {
        let mut session = Session::new();
        let report = play_game(
            &mut session,
            policies,
            &mut GameRng::new(seed),
            &PlayConfig::new().with_max_moves(300),
        )
        .unwrap();

        let state = report.final_state;
        assert!(state.board().is_stable());
        assert!(state.board().is_consistent());
        assert_eq!(report.moves, session.history().len());
        if let Some(winner) = report.winner {
            assert_eq!(state.status(), GameStatus::GameOver(winner));
            assert_eq!(state.scores()[winner.opponent()], 0);
        }
    }
}

#[test]
fn test_concurrent_requests_are_serialized() {
    let session = Arc::new(Mutex::new(Session::new()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                let mut session = session.lock().unwrap();
                session.request_move(Player::P1, 2, 2)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let accepted = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(accepted, 1);
    for rejected in results.iter().filter(|r| r.is_err()) {
        assert_eq!(
            rejected.as_ref().unwrap_err(),
            &EngineError::IllegalMove(IllegalReason::WrongPlayer)
        );
    }
    assert_eq!(session.lock().unwrap().history().len(), 1);
}

#[test]
fn test_independent_sessions() {
    let mut a = Session::new();
    let b = Session::new();
    a.request_move(Player::P1, 3, 3).unwrap();

    assert_eq!(b.snapshot(), GameState::new());
    assert_ne!(a.snapshot(), b.snapshot());
}
