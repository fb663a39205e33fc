//! History consistency invariant: the log shape the controller relies on.

use super::Invariant;
use crate::game::Game;
use crate::types::Board;

/// Invariant: the log is never empty, its first snapshot is the empty
/// board, and the cursor selects an existing snapshot.
pub struct HistoryConsistent;

impl Invariant<Game> for HistoryConsistent {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        history.len() >= 1
            && history.snapshots()[0] == Board::new()
            && history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Log starts with the empty board and the cursor stays in range"
    }
}
