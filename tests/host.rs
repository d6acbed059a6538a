//! Host lifecycle: request/reply pairing, timeout restart, recovery.

use std::str::FromStr;
use std::time::Duration;
use woodpusher::search::SearchLimits;
use woodpusher::types::{Board, MoveGen};
use woodpusher::{EngineError, EngineHost};

const FOOLS_MATE_DELIVERED: &str =
    "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_request_round_trip() {
    init_tracing();
    let board = Board::default();
    let mut host = EngineHost::with_limits(SearchLimits::depth(2));
    let m = host
        .find_best_move(&board)
        .expect("worker alive")
        .expect("start position has moves");
    assert!(MoveGen::new_legal(&board).any(|lm| lm == m));
}

#[test]
fn test_game_over_position_resolves_to_none() {
    init_tracing();
    let board = Board::from_str(FOOLS_MATE_DELIVERED).unwrap();
    let mut host = EngineHost::with_limits(SearchLimits::depth(2));
    assert_eq!(host.find_best_move(&board).expect("worker alive"), None);
}

#[test]
fn test_sequential_requests_share_one_worker() {
    init_tracing();
    let mut host = EngineHost::with_limits(SearchLimits::depth(2));
    let start = Board::default();
    let after_e4 =
        Board::from_str("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();

    let first = host.find_best_move(&start).expect("worker alive");
    let second = host.find_best_move(&after_e4).expect("worker alive");
    assert!(first.is_some());
    assert!(second.is_some());
}

#[test]
fn test_hard_ceiling_rejects_and_host_recovers() {
    init_tracing();
    // A budget far beyond the ceiling guarantees the ceiling fires first.
    let mut host = EngineHost::with_config(
        SearchLimits::movetime(10_000),
        Duration::from_millis(200),
    );

    let board = Board::default();
    match host.find_best_move(&board) {
        Err(EngineError::HostTimeout(_)) => {}
        other => panic!("expected HostTimeout, got {:?}", other),
    }

    // The replacement worker must answer; a game-over probe is instant.
    let mated = Board::from_str(FOOLS_MATE_DELIVERED).unwrap();
    assert_eq!(host.find_best_move(&mated).expect("fresh worker"), None);
}

#[test]
fn test_skill_level_is_a_recorded_hint() {
    let mut host = EngineHost::with_limits(SearchLimits::depth(1));
    host.set_skill_level(7);
    assert_eq!(host.skill_level(), 7);
    host.set_skill_level(99);
    assert_eq!(host.skill_level(), 20);
}
