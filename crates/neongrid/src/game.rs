//! Game controller: owns the history log, derives everything else.
//!
//! There is no stored turn, winner, or status. All of it is computed
//! from the snapshot the cursor selects, so scrubbing history and
//! playing stay consistent by construction.

use crate::history::HistoryLog;
use crate::position::Position;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, GameStatus, Player};
use tracing::{debug, instrument};

/// Tic-tac-toe game with time-travel history.
///
/// Every operation either advances state or is a silent no-op. Invalid
/// input (occupied square, finished game, out-of-range index) is a
/// normal user action here, not an error, so nothing returns `Result`.
#[derive(Debug, Clone, Default)]
pub struct Game {
    history: HistoryLog,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: HistoryLog::new(),
        }
    }

    /// The board the history cursor currently selects.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// The history log, for rendering the scrubber.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The player whose turn it is on the visible board.
    ///
    /// Derived from cursor parity: X moves at even cursors since X
    /// always opens the game.
    pub fn to_move(&self) -> Player {
        if self.history.cursor() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Status of the visible board, computed fresh on every call.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = check_winner(self.board()) {
            GameStatus::Won(win)
        } else if is_full(self.board()) {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// No-op if the game on the visible board is already decided or
    /// the square is taken. An accepted move appends a snapshot,
    /// truncating any abandoned future first.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn click(&mut self, pos: Position) {
        if self.status() != GameStatus::InProgress {
            debug!(?pos, "Ignoring click: game already decided");
            return;
        }
        if !self.board().is_empty(pos) {
            debug!(?pos, "Ignoring click: square occupied");
            return;
        }

        let next = self.board().place(pos, self.to_move());
        self.history.push(next);
    }

    /// Index-based click entry point for the UI (0-8).
    ///
    /// Out-of-range indices are absorbed.
    pub fn click_cell(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.click(pos);
        } else {
            debug!(index, "Ignoring click: index out of range");
        }
    }

    /// Moves the history cursor to the given snapshot without touching
    /// the log. No-op for out-of-range indices.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        self.history.jump_to(index);
    }

    /// Starts over: history becomes `[empty board]`, cursor 0.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.reset();
    }
}
