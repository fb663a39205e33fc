//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winnable lines: 3 rows top-to-bottom, 3 columns left-to-right,
/// then the two diagonals. Checked in this order; the first uniformly
/// marked line wins (a legal game has at most one).
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A detected win: the winning player and the line they completed.
///
/// The line is reported so the UI can highlight the winning squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinInfo {
    /// The player with three in a row.
    pub winner: Player,
    /// The completed line.
    pub line: [Position; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the winning player and line if any of the 8 fixed lines is
/// uniformly marked, `None` otherwise. Pure and deterministic.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinInfo> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(winner) = sq {
                return Some(WinInfo { winner, line });
            }
        }
    }

    None
}
