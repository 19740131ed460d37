//! Property tests over randomly played games.
//!
//! Each case plays a game from a random seed with random or heuristic
//! players and checks the engine's invariants after every move.

use proptest::prelude::*;

use chroma_clash::core::CELL_COUNT;
use chroma_clash::rules::resolve;
use chroma_clash::{
    Board, Cell, GameRng, GameState, GameStatus, HeuristicPolicy, MoveOutcome, MovePolicy, Player,
    Position, RandomPolicy, Session, FIRST_MOVE_CHARGE, MAX_CHARGE,
};

/// Play up to `max_moves` moves, calling `check` after each accepted move
/// with the state before and the outcome.
fn play_checked(
    seed: u64,
    max_moves: usize,
    heuristic_p1: bool,
    mut check: impl FnMut(&GameState, &Session, &MoveOutcome),
) {
    let heuristic = HeuristicPolicy::default();
    let random = RandomPolicy;
    let mut rng = GameRng::new(seed);
    let mut session = Session::new();

    for _ in 0..max_moves {
        if session.is_over() {
            break;
        }
        let policy: &dyn MovePolicy = if heuristic_p1 && session.current_player() == Player::P1 {
            &heuristic
        } else {
            &random
        };
        let before = session.snapshot();
        let outcome = session.computer_move(policy, &mut rng).unwrap();
        check(&before, &session, &outcome);
    }
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec((0u8..3, 1u8..=MAX_CHARGE + 2), CELL_COUNT).prop_map(|cells| {
        let mut board = Board::new();
        for (pos, (owner, charge)) in Board::positions().zip(cells) {
            let cell = match owner {
                1 => Cell::owned(Player::P1, charge),
                2 => Cell::owned(Player::P2, charge),
                _ => Cell::empty(),
            };
            board = board.with_cell(pos, cell);
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolution_never_adds_charge(seed in any::<u64>(), heuristic in any::<bool>()) {
        play_checked(seed, 120, heuristic, |before, _, outcome| {
            let added = if outcome.first_move { u32::from(FIRST_MOVE_CHARGE) } else { 1 };
            assert_eq!(outcome.placed.total_charge(), before.board().total_charge() + added);
            assert!(outcome.cascade.board.total_charge() <= outcome.placed.total_charge());
        });
    }

    #[test]
    fn boards_stay_stable_and_consistent(seed in any::<u64>(), heuristic in any::<bool>()) {
        play_checked(seed, 120, heuristic, |_, session, outcome| {
            assert_ne!(session.status(), GameStatus::Resolving);
            assert!(session.board().is_stable());
            assert!(session.board().is_consistent());
            for round in &outcome.cascade.rounds {
                assert!(round.is_consistent());
            }
        });
    }

    #[test]
    fn resolution_settles_within_cell_count_rounds(seed in any::<u64>()) {
        play_checked(seed, 120, false, |_, _, outcome| {
            assert!(outcome.cascade.round_count() <= CELL_COUNT);
        });
    }

    #[test]
    fn turns_alternate_until_game_over(seed in any::<u64>(), heuristic in any::<bool>()) {
        play_checked(seed, 120, heuristic, |before, session, outcome| {
            assert_eq!(outcome.player, before.current_player());
            if !session.is_over() {
                assert_eq!(session.current_player(), before.current_player().opponent());
                assert_eq!(session.turn_count(), before.turn_count() + 1);
            }
        });
    }

    #[test]
    fn scores_match_territory(seed in any::<u64>()) {
        play_checked(seed, 120, true, |_, session, _| {
            let scores = session.scores();
            for player in Player::ALL {
                assert_eq!(scores[player], session.board().count_owned(player));
            }
        });
    }

    #[test]
    fn resolve_settles_arbitrary_boards(board in arb_board()) {
        let cascade = resolve(board).unwrap();
        prop_assert!(cascade.board.is_stable());
        prop_assert!(cascade.board.is_consistent());
        prop_assert!(cascade.board.total_charge() <= board.total_charge());
        prop_assert_eq!(cascade.round_count(), cascade.rounds.len());
        prop_assert_eq!(cascade.rounds.last().copied().unwrap_or(board), cascade.board);
    }

    #[test]
    fn rejected_moves_change_nothing(seed in any::<u64>(), row in 0usize..8, col in 0usize..8) {
        let mut session = Session::new();
        let mut rng = GameRng::new(seed);
        for _ in 0..4 {
            if session.is_over() {
                break;
            }
            session.computer_move(&RandomPolicy, &mut rng).unwrap();
        }

        let before = session.snapshot();
        let history_len = session.history().len();
        let mover = session.current_player().opponent();
        prop_assert!(session.request_move(mover, row, col).is_err());
        prop_assert_eq!(session.snapshot(), before);
        prop_assert_eq!(session.history().len(), history_len);

        if Position::checked(row, col).is_ok() {
            let target = before.board().get(Position::new(row, col));
            if !target.is_owned_by(before.current_player()) && !before.is_over() {
                prop_assert!(session.request_move(before.current_player(), row, col).is_err());
                prop_assert_eq!(session.snapshot(), before);
            }
        }
    }
}
