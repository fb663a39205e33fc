//! Invariant checks across adversarial interaction sequences.

use neongrid::invariants::{AlternatingTurn, HistoryConsistent, Invariant, MonotonicBoard};
use neongrid::Game;

fn assert_all_hold(game: &Game) {
    assert!(
        AlternatingTurn::holds(game),
        "violated: {}",
        AlternatingTurn::description()
    );
    assert!(
        MonotonicBoard::holds(game),
        "violated: {}",
        MonotonicBoard::description()
    );
    assert!(
        HistoryConsistent::holds(game),
        "violated: {}",
        HistoryConsistent::description()
    );
}

#[test]
fn test_invariants_hold_on_fresh_game() {
    assert_all_hold(&Game::new());
}

#[test]
fn test_invariants_hold_under_hostile_input() {
    let mut game = Game::new();

    // Duplicate clicks, out-of-range clicks and jumps, interleaved
    // with legal play.
    let clicks = [4usize, 4, 9, 0, 0, 77, 8, 2, 6];
    for (step, index) in clicks.iter().enumerate() {
        game.click_cell(*index);
        game.jump_to(step * 7); // mostly out of range, sometimes not
        assert_all_hold(&game);
    }
}

#[test]
fn test_invariants_hold_across_branches_and_resets() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.click_cell(index);
    }
    assert_all_hold(&game);

    game.jump_to(2);
    game.click_cell(8);
    assert_all_hold(&game);

    game.reset();
    assert_all_hold(&game);

    game.click_cell(5);
    assert_all_hold(&game);
}
