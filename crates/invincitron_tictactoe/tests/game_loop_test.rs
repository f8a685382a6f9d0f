//! End-to-end games between automated players.

use invincitron_tictactoe::{
    EngineError, Mark, MoveSource, Outcome, RandomPlayer, StrategyPlayer, evaluate, play_game,
};
use std::collections::HashSet;

#[test]
fn test_strategy_self_play_terminates_consistently() {
    for seed in 0..50 {
        let mut x = StrategyPlayer::with_seed("x", seed);
        let mut o = StrategyPlayer::with_seed("o", seed + 1000);
        let record = play_game(&mut x, &mut o).unwrap();

        let history = record.history();
        assert!((5..=9).contains(&history.len()), "seed {seed}: {history:?}");
        assert_eq!(history.iter().collect::<HashSet<_>>().len(), history.len());
        assert_eq!(evaluate(record.board()).unwrap().outcome(), *record.outcome());
        assert_eq!(*record.outcome(), Outcome::Tie, "seed {seed}: {history:?}");
    }
}

#[test]
fn test_strategy_never_loses_to_random_when_moving_first() {
    // Moving first from the center, the cascade is never forked.
    for seed in 0..100 {
        let mut engine = StrategyPlayer::with_seed("engine", seed);
        let mut random = RandomPlayer::with_seed("random", seed);
        let record = play_game(&mut engine, &mut random).unwrap();
        assert_ne!(
            *record.outcome(),
            Outcome::Winner(Mark::O),
            "seed {seed}: {:?}",
            record.history()
        );
    }
}

#[test]
fn test_random_games_respect_alternation() {
    for seed in 0..50 {
        let mut x = RandomPlayer::with_seed("x", seed);
        let mut o = RandomPlayer::with_seed("o", seed * 7 + 1);
        let record = play_game(&mut x, &mut o).unwrap();

        let board = record.board();
        let xs = board.count(Mark::X);
        let os = board.count(Mark::O);
        assert!(xs == os || xs == os + 1);
        assert_eq!(xs + os, record.history().len());
    }
}

#[test]
fn test_boxed_sources_play() -> Result<(), EngineError> {
    let mut x: Box<dyn MoveSource> = Box::new(StrategyPlayer::with_seed("x", 5));
    let mut o: Box<dyn MoveSource> = Box::new(RandomPlayer::with_seed("o", 5));
    let record = play_game(x.as_mut(), o.as_mut())?;
    assert!(record.history().len() >= 5);
    Ok(())
}
