//! Move history as a log of board snapshots with a navigation cursor.
//!
//! The log always starts with the empty board, so the cursor can scrub
//! back to before the first move. Playing from an earlier cursor
//! truncates the abandoned future before appending: there is exactly
//! one visible branch at any time.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots plus a cursor selecting the visible one.
///
/// Invariants: the snapshot at index 0 is the empty board, the log is
/// never empty, and the cursor is always in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl HistoryLog {
    /// Creates a log holding only the empty board, cursor at 0.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// The snapshot the cursor currently selects.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Cursor into the log.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the initial empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the initial empty board is never dropped.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Appends `board` after the cursor, discarding any later snapshots.
    ///
    /// This is the branch-on-write rule: moving after scrubbing back
    /// erases the alternate future. The cursor lands on the new last
    /// snapshot.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn push(&mut self, board: Board) {
        if self.cursor + 1 < self.snapshots.len() {
            debug!(
                dropped = self.snapshots.len() - self.cursor - 1,
                "Truncating abandoned future"
            );
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor without touching the snapshots.
    ///
    /// Returns whether the jump was applied; out-of-range indices are
    /// absorbed as no-ops.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.snapshots.len() {
            self.cursor = index;
            true
        } else {
            debug!(index, "Ignoring out-of-range history jump");
            false
        }
    }

    /// Replaces the whole log with a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    fn log_of_moves(moves: &[Position]) -> HistoryLog {
        let mut log = HistoryLog::new();
        let mut player = Player::X;
        for pos in moves {
            let next = log.current().place(*pos, player);
            log.push(next);
            player = player.opponent();
        }
        log
    }

    #[test]
    fn test_new_log_holds_empty_board() {
        let log = HistoryLog::new();
        assert_eq!(log.len(), 1);
        assert_eq!(log.cursor(), 0);
        assert_eq!(log.current(), &Board::new());
    }

    #[test]
    fn test_push_advances_cursor_to_tail() {
        let log = log_of_moves(&[Position::Center, Position::TopLeft]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.cursor(), 2);
    }

    #[test]
    fn test_jump_does_not_modify_snapshots() {
        let mut log = log_of_moves(&[Position::Center, Position::TopLeft]);
        let snapshots = log.snapshots().to_vec();
        assert!(log.jump_to(1));
        assert_eq!(log.cursor(), 1);
        assert_eq!(log.snapshots(), &snapshots[..]);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut log = log_of_moves(&[Position::Center]);
        assert!(!log.jump_to(5));
        assert_eq!(log.cursor(), 1);
    }

    #[test]
    fn test_push_after_jump_truncates_future() {
        let mut log = log_of_moves(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]);
        assert_eq!(log.len(), 6);

        log.jump_to(2);
        let next = log.current().place(Position::BottomRight, Player::X);
        log.push(next);

        // push at cursor k yields length k+2
        assert_eq!(log.len(), 4);
        assert_eq!(log.cursor(), 3);
        assert_eq!(
            log.current().get(Position::BottomRight),
            crate::types::Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut log = log_of_moves(&[Position::Center, Position::TopLeft, Position::TopRight]);
        log.jump_to(1);
        log.reset();
        assert_eq!(log, HistoryLog::new());
    }

    #[test]
    fn test_snapshot_zero_survives_every_operation() {
        let mut log = log_of_moves(&[Position::Center, Position::TopLeft]);
        log.jump_to(0);
        let next = log.current().place(Position::TopRight, Player::X);
        log.push(next);
        assert_eq!(log.snapshots()[0], Board::new());
        assert_eq!(log.len(), 2);
    }
}
