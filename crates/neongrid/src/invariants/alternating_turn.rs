//! Alternating turn invariant: X, O, X, O, ... with X opening.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::{Player, Square};

/// Invariant: players alternate turns.
///
/// Snapshot `k+1` must differ from snapshot `k` by a mark belonging to
/// X when `k` is even and O when `k` is odd, and the derived turn must
/// match the cursor's parity.
pub struct AlternatingTurn;

impl Invariant<Game> for AlternatingTurn {
    fn holds(game: &Game) -> bool {
        let snapshots = game.history().snapshots();

        for (k, pair) in snapshots.windows(2).enumerate() {
            let expected = if k % 2 == 0 { Player::X } else { Player::O };
            let placed = Position::ALL.iter().find_map(|pos| {
                match (pair[0].get(*pos), pair[1].get(*pos)) {
                    (Square::Empty, Square::Occupied(p)) => Some(p),
                    _ => None,
                }
            });
            if placed != Some(expected) {
                return false;
            }
        }

        let expected_next = if game.history().cursor() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...), X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurn::holds(&Game::new()));
    }

    #[test]
    fn test_holds_through_play_and_scrubbing() {
        let mut game = Game::new();
        for index in [4, 0, 8, 2] {
            game.click_cell(index);
            assert!(AlternatingTurn::holds(&game));
        }
        game.jump_to(1);
        assert!(AlternatingTurn::holds(&game));
    }
}
