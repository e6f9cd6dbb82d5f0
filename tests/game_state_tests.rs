//! Turn state machine scenarios, driven with injected time

use memory_puzzle::core::{Board, BoardConfig, GameState, SelectOutcome, TurnState, WIN_TOTAL_MS};
use memory_puzzle::types::{
    CellPos, Color, Icon, Shape, MISMATCH_PAUSE_MS, NEW_ROUND_PAUSE_MS, SWEEP_MS,
    WIN_FLASH_INTERVAL_MS,
};

const A: Icon = Icon::new(Shape::Donut, Color::Red);
const B: Icon = Icon::new(Shape::Oval, Color::Cyan);

/// 2x2 board: A B / B A
fn two_by_two() -> GameState {
    let config = BoardConfig::new(2, 2).unwrap();
    let board = Board::from_icons(&config, vec![A, B, B, A]).unwrap();
    let mut state = GameState::with_board(board, 9);
    state.start();
    state
}

/// Run frames until no sweep is animating.
fn settle(state: &mut GameState) {
    while let Some(ms) = state.sweep().map(|s| s.remaining_ms()) {
        state.tick(ms);
    }
}

fn cell(x: u8, y: u8) -> CellPos {
    CellPos::new(x, y)
}

#[test]
fn test_first_selection_goes_pending() {
    let mut state = two_by_two();
    assert_eq!(state.turn(), &TurnState::Idle);

    assert_eq!(state.select(cell(0, 0)), SelectOutcome::FirstReveal);
    assert_eq!(state.turn(), &TurnState::Pending(cell(0, 0)));
    assert!(state.revealed().is_revealed(cell(0, 0)));
    assert_eq!(state.pending(), Some(cell(0, 0)));
}

#[test]
fn test_mismatch_covers_both_after_pause() {
    let mut state = two_by_two();
    state.select(cell(0, 0));
    settle(&mut state);

    assert_eq!(
        state.select(cell(1, 0)),
        SelectOutcome::Mismatch {
            first: cell(0, 0),
            second: cell(1, 0)
        }
    );
    assert!(state.revealed().is_revealed(cell(0, 0)));
    assert!(state.revealed().is_revealed(cell(1, 0)));

    settle(&mut state);
    assert!(matches!(state.turn(), TurnState::MismatchPause { .. }));

    // Input during the pause is ignored.
    assert_eq!(state.select(cell(0, 1)), SelectOutcome::Ignored);
    assert!(!state.revealed().is_revealed(cell(0, 1)));

    state.tick(MISMATCH_PAUSE_MS - 1);
    assert!(state.revealed().is_revealed(cell(1, 0)));

    state.tick(1);
    assert!(!state.revealed().is_revealed(cell(0, 0)));
    assert!(!state.revealed().is_revealed(cell(1, 0)));
    assert_eq!(state.turn(), &TurnState::Idle);
    assert!(state.is_busy(), "cover sweep still running");

    settle(&mut state);
    assert!(!state.is_busy());
    assert_eq!(state.attempts(), 1);
    assert_eq!(state.pairs_found(), 0);
}

#[test]
fn test_match_keeps_both_revealed() {
    let mut state = two_by_two();
    state.select(cell(0, 0));
    settle(&mut state);

    assert_eq!(
        state.select(cell(1, 1)),
        SelectOutcome::Matched { won: false }
    );
    assert_eq!(state.turn(), &TurnState::Idle);
    settle(&mut state);

    assert!(state.revealed().is_revealed(cell(0, 0)));
    assert!(state.revealed().is_revealed(cell(1, 1)));
    assert_eq!(state.pairs_found(), 1);
    assert_eq!(state.attempts(), 1);
}

#[test]
fn test_finishing_the_board_wins() {
    let mut state = two_by_two();
    for (first, second) in [(cell(0, 0), cell(1, 1)), (cell(1, 0), cell(0, 1))] {
        state.select(first);
        settle(&mut state);
        state.select(second);
        settle(&mut state);
    }
    assert!(state.is_won());
    assert_eq!(state.rounds_won(), 1);
    assert_eq!(state.pairs_found(), state.total_pairs());
}

#[test]
fn test_single_pair_board_wins_and_resets() {
    let config = BoardConfig::new(2, 1).unwrap();
    let board = Board::from_icons(&config, vec![A, A]).unwrap();
    let mut state = GameState::with_board(board, 3);
    state.start();

    state.select(cell(0, 0));
    settle(&mut state);
    assert_eq!(
        state.select(cell(1, 0)),
        SelectOutcome::Matched { won: true }
    );
    assert!(state.is_won());
    settle(&mut state);
    assert_eq!(state.revealed().revealed_count(), 2);

    // Clicks during the celebration do nothing.
    assert_eq!(state.select(cell(0, 0)), SelectOutcome::Ignored);

    state.tick(WIN_TOTAL_MS);
    assert!(matches!(state.turn(), TurnState::RoundPause { .. }));
    assert_eq!(state.round(), 2);
    assert_eq!(state.revealed().revealed_count(), 0);
    assert_eq!(state.attempts(), 0);
    assert_eq!(state.pairs_found(), 0);

    // The fresh board still holds exactly one pair.
    let icons = state.board().icons();
    assert_eq!(icons.len(), 2);
    assert_eq!(icons[0], icons[1]);

    state.tick(NEW_ROUND_PAUSE_MS);
    assert_eq!(state.turn(), &TurnState::Idle);
    assert!(!state.is_busy());
}

#[test]
fn test_win_flash_alternates() {
    let config = BoardConfig::new(2, 1).unwrap();
    let board = Board::from_icons(&config, vec![B, B]).unwrap();
    let mut state = GameState::with_board(board, 3);
    state.start();
    state.select(cell(0, 0));
    settle(&mut state);
    state.select(cell(1, 0));
    settle(&mut state);

    assert!(!state.win_flash_on());
    state.tick(WIN_FLASH_INTERVAL_MS);
    assert!(state.win_flash_on());
    state.tick(WIN_FLASH_INTERVAL_MS);
    assert!(!state.win_flash_on());
}

#[test]
fn test_revealed_and_outside_clicks_are_noops() {
    let mut state = two_by_two();
    state.select(cell(0, 0));
    settle(&mut state);

    let before = state.revealed().clone();
    assert_eq!(state.select(cell(0, 0)), SelectOutcome::Ignored);
    assert_eq!(state.select(cell(2, 0)), SelectOutcome::Ignored);
    assert_eq!(state.select(cell(0, 9)), SelectOutcome::Ignored);
    assert_eq!(state.revealed(), &before);
    assert_eq!(state.turn(), &TurnState::Pending(cell(0, 0)));
    assert_eq!(state.attempts(), 0);
}

#[test]
fn test_selection_ignored_during_reveal_sweep() {
    let mut state = two_by_two();
    state.select(cell(0, 0));
    assert_eq!(state.select(cell(1, 0)), SelectOutcome::Ignored);

    state.tick(SWEEP_MS);
    assert!(state.select(cell(1, 0)).has_update());
}

#[test]
fn test_intro_previews_without_revealing() {
    let config = BoardConfig::new(4, 4).unwrap();
    let mut state = GameState::new(config, 7).with_intro(true);
    state.start();

    assert!(matches!(state.turn(), TurnState::Intro { .. }));
    assert_eq!(state.revealed().revealed_count(), 0);
    assert_eq!(state.select(cell(0, 0)), SelectOutcome::Ignored);

    // Two groups of eight, each swept open then closed.
    for _ in 0..4 {
        assert!(state.is_busy());
        state.tick(SWEEP_MS);
    }
    assert_eq!(state.turn(), &TurnState::Idle);
    assert!(!state.is_busy());
    assert_eq!(state.revealed().revealed_count(), 0);
}

#[test]
fn test_restart_deals_a_fresh_round() {
    let mut state = two_by_two();
    state.select(cell(0, 0));
    settle(&mut state);

    state.restart();
    assert_eq!(state.round(), 2);
    assert_eq!(state.turn(), &TurnState::Idle);
    assert_eq!(state.revealed().revealed_count(), 0);
    assert!(state.sweep().is_none());
}

#[test]
fn test_same_seed_same_session() {
    let config = BoardConfig::default();
    let a = GameState::new(config, 1234);
    let b = GameState::new(config, 1234);
    assert_eq!(a.board(), b.board());
    assert_eq!(a.seed(), 1234);
}

#[test]
fn test_frame_ticks_do_not_stretch_the_pause() {
    let mut state = two_by_two();
    state.select(cell(0, 0));
    settle(&mut state);
    state.select(cell(1, 0));

    let frame = memory_puzzle::types::TICK_MS;
    let mut waited = 0;
    while state.revealed().is_revealed(cell(1, 0)) {
        state.tick(frame);
        waited += frame;
    }
    assert!(waited >= SWEEP_MS + MISMATCH_PAUSE_MS);
    assert!(waited < SWEEP_MS + MISMATCH_PAUSE_MS + frame);
}
