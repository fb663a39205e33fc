//! Monotonic board invariant: marks are added, never moved or cleared.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::Square;

/// Invariant: consecutive snapshots differ by exactly one square going
/// from empty to occupied. Within one game no filled square ever
/// reverts or changes owner short of a full reset.
pub struct MonotonicBoard;

impl Invariant<Game> for MonotonicBoard {
    fn holds(game: &Game) -> bool {
        for pair in game.history().snapshots().windows(2) {
            let mut added = 0;
            for pos in Position::ALL {
                match (pair[0].get(pos), pair[1].get(pos)) {
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    (before, after) if before == after => {}
                    _ => return false,
                }
            }
            if added != 1 {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark; filled squares never revert"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoard::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_branching() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4] {
            game.click_cell(index);
        }
        game.jump_to(2);
        game.click_cell(8);
        assert!(MonotonicBoard::holds(&game));
    }
}
