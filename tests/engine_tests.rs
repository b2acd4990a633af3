//! Engine facade integration tests.

use twenty48_engine::board::{Board, Direction, Position, Tile};
use twenty48_engine::core::{EngineConfig, EngineError, GameRng};
use twenty48_engine::engine::{Engine, EngineState};
use twenty48_engine::events::Event;
use twenty48_engine::rules::{collapse_line, TerminalState};

fn row(values: &[u32]) -> Vec<Option<Tile>> {
    values
        .iter()
        .map(|&v| if v == 0 { None } else { Some(Tile::from_value(v).unwrap()) })
        .collect()
}

fn engine_with(board: Board) -> Engine {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut engine = Engine::new(EngineConfig::default(), GameRng::new(42));
    engine.load_board(board).unwrap();
    engine
}

// =============================================================================
// Line Collapse Scenarios
// =============================================================================

#[test]
fn test_gap_pair_collapses_to_single_tile() {
    let out = collapse_line(&row(&[0, 2, 0, 2]));
    assert_eq!(out.cells.as_slice(), row(&[4, 0, 0, 0]).as_slice());
    assert_eq!(out.score, 4);
    assert_eq!(out.merges.len(), 1);
}

#[test]
fn test_three_of_a_kind_merges_leading_pair() {
    let out = collapse_line(&row(&[2, 2, 2, 0]));
    assert_eq!(out.cells.as_slice(), row(&[4, 2, 0, 0]).as_slice());
    assert_eq!(out.score, 4);
}

#[test]
fn test_four_of_a_kind_never_merges_twice() {
    let out = collapse_line(&row(&[2, 2, 2, 2]));
    assert_eq!(out.cells.as_slice(), row(&[4, 4, 0, 0]).as_slice());
}

// =============================================================================
// Move Scenarios
// =============================================================================

#[test]
fn test_single_tile_slides_right_and_spawns() {
    let mut engine = engine_with(
        Board::from_array([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap(),
    );

    let outcome = engine.apply_move(Direction::Right);

    assert!(outcome.changed);
    assert_eq!(outcome.score_delta, 0);
    assert_eq!(outcome.merges().count(), 0);
    assert_eq!(engine.board().get(0, 3), Some(Tile::TWO));

    let spawn = outcome.spawn().expect("changed move spawns");
    assert_ne!(spawn.cell(), Position::new(0, 3));
    assert_eq!(engine.board().empty_cells().count(), 14);
    assert_eq!(outcome.events.len(), 1);
}

#[test]
fn test_merge_events_precede_spawn() {
    let mut engine = engine_with(
        Board::from_array([[2, 2, 0, 0], [0; 4], [4, 0, 4, 0], [0; 4]]).unwrap(),
    );

    let outcome = engine.apply_move(Direction::Left);

    assert_eq!(outcome.score_delta, 4 + 8);
    assert_eq!(engine.score(), 12);
    assert_eq!(outcome.events.len(), 3);
    assert_eq!(
        outcome.events[0],
        Event::merge(Position::new(0, 0), Position::new(0, 1), Position::new(0, 0), Tile::FOUR)
    );
    assert_eq!(outcome.events[1].cell(), Position::new(2, 0));
    assert!(outcome.events[2].is_spawn());
}

#[test]
fn test_full_board_with_merge_frees_a_cell() {
    let mut engine = engine_with(
        Board::from_array([[2, 2, 4, 8], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]).unwrap(),
    );
    assert!(engine.board().is_full());

    let outcome = engine.apply_move(Direction::Left);

    assert!(outcome.changed);
    assert_eq!(outcome.score_delta, 4);
    // the freed cell is taken straight back by the spawn
    let spawn = outcome.spawn().unwrap();
    assert_eq!(spawn.cell(), Position::new(0, 3));
    assert!(engine.board().is_full());
}

// =============================================================================
// No-op Moves
// =============================================================================

#[test]
fn test_repeated_noop_leaves_state_identical() {
    let mut engine = engine_with(
        Board::from_array([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]).unwrap(),
    );
    let before = engine.current_state();

    for _ in 0..2 {
        let outcome = engine.apply_move(Direction::Left);
        assert!(!outcome.changed);
        assert!(outcome.events.is_empty());
        assert_eq!(engine.current_state(), before);
    }
}

#[test]
fn test_saturated_board_without_shift_is_noop() {
    let mut engine = engine_with(
        Board::from_array([[2, 4, 8, 16], [32, 64, 128, 256], [2, 4, 8, 16], [32, 64, 128, 256]]).unwrap(),
    );
    assert_eq!(engine.terminal_state(), TerminalState::Lost);
    let before = engine.current_state();

    for dir in Direction::ALL {
        assert!(!engine.apply_move(dir).changed);
    }
    assert_eq!(engine.current_state(), before);
}

// =============================================================================
// Terminal States
// =============================================================================

#[test]
fn test_move_into_dead_end_reports_lost() {
    // Only 2s spawn, so the freed corner is filled with a tile that has no
    // equal neighbour.
    let mut engine = Engine::new(
        EngineConfig::default().with_four_probability(0.0),
        GameRng::new(42),
    );
    engine
        .load_board(Board::from_array([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [8, 8, 2, 4]]).unwrap())
        .unwrap();
    assert_eq!(engine.terminal_state(), TerminalState::InProgress);

    let outcome = engine.apply_move(Direction::Left);

    assert!(outcome.changed);
    assert_eq!(outcome.score_delta, 16);
    assert_eq!(outcome.spawn().map(Event::cell), Some(Position::new(3, 3)));
    assert_eq!(outcome.terminal, TerminalState::Lost);
    assert!(engine.legal_moves().is_empty());
}

#[test]
fn test_checkerboard_loaded_is_lost() {
    let engine = engine_with(
        Board::from_array([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap(),
    );
    assert_eq!(engine.terminal_state(), TerminalState::Lost);
    assert!(engine.legal_moves().is_empty());
}

#[test]
fn test_reaching_target_wins_and_stays_won() {
    let mut engine = engine_with(
        Board::from_array([[1024, 1024, 4, 8], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]).unwrap(),
    );
    let outcome = engine.apply_move(Direction::Left);
    assert_eq!(outcome.terminal, TerminalState::Won);
    assert_eq!(engine.board().get(0, 0), Tile::from_value(2048).ok());

    // frozen after the win, even though the board is full
    assert!(!engine.apply_move(Direction::Right).changed);
    assert_eq!(engine.terminal_state(), TerminalState::Won);

    engine.reset();
    assert_eq!(engine.terminal_state(), TerminalState::InProgress);
}

#[test]
fn test_custom_target() {
    let mut engine = Engine::new(
        EngineConfig::default().with_target(8),
        GameRng::new(1),
    );
    engine
        .load_board(Board::from_array([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap())
        .unwrap();
    assert_eq!(engine.apply_move(Direction::Left).terminal, TerminalState::Won);
}

// =============================================================================
// Save and Load
// =============================================================================

#[test]
fn test_saved_state_reloads_into_engine() {
    let mut engine = Engine::with_seed(EngineConfig::default().with_seed(11));
    for dir in Direction::ALL {
        engine.apply_move(dir);
    }
    let saved = serde_json::to_string(&engine.current_state()).unwrap();

    let state: EngineState = serde_json::from_str(&saved).unwrap();
    let mut restored = Engine::with_seed(EngineConfig::default().with_seed(11));
    restored.load_board(state.board.clone()).unwrap();
    assert_eq!(restored.board(), &state.board);
    assert_eq!(restored.terminal_state(), state.terminal);
}

#[test]
fn test_malformed_saved_board_rejected_at_load() {
    assert!(serde_json::from_str::<Board>(r#"{"size":4,"cells":[]}"#).is_err());
    assert!(serde_json::from_str::<Board>("[[2,0,0,0],[0,0,0,0],[0,0,0,0],[0]]").is_err());
    assert!(serde_json::from_str::<Board>("[[1,0],[0,0]]").is_err());

    let mut engine = Engine::with_seed(EngineConfig::default());
    let before = engine.current_state();
    let small: Board = serde_json::from_str("[[2,0,0],[0,0,0],[0,0,4]]").unwrap();
    assert!(matches!(engine.load_board(small), Err(EngineError::InvalidBoard(_))));
    assert_eq!(engine.current_state(), before);

    // the engine keeps playing normally after the rejected load
    assert!(!engine.legal_moves().is_empty());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_game() {
    let moves = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    let config = EngineConfig::default().with_seed(2024);
    let mut a = Engine::with_seed(config.clone());
    let mut b = Engine::with_seed(config);

    assert_eq!(a.initial_events(), b.initial_events());
    for i in 0..200 {
        let dir = moves[i % moves.len()];
        assert_eq!(a.apply_move(dir), b.apply_move(dir));
    }
    assert_eq!(a.current_state(), b.current_state());
}

#[test]
fn test_different_seeds_differ() {
    let a = Engine::with_seed(EngineConfig::default().with_seed(1));
    let b = Engine::with_seed(EngineConfig::default().with_seed(2));
    let c = Engine::with_seed(EngineConfig::default().with_seed(3));
    assert!(
        a.current_state().board != b.current_state().board
            || b.current_state().board != c.current_state().board
    );
}

// =============================================================================
// Board Sizes
// =============================================================================

#[test]
fn test_non_default_sizes_play_to_completion() {
    for size in [2, 3, 5, 6] {
        let mut engine = Engine::with_seed(EngineConfig::default().with_size(size).with_seed(size as u64));
        let mut steps = 0;
        while engine.terminal_state() == TerminalState::InProgress && steps < 10_000 {
            let Some(&dir) = engine.legal_moves().first() else { break };
            assert!(engine.apply_move(dir).changed);
            steps += 1;
        }
        assert_eq!(engine.board().size(), size);
    }
}
