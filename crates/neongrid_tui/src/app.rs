//! Application state and key handling.

use crossterm::event::KeyCode;
use neongrid::{Game, GameStatus, Position};
use tracing::debug;

use crate::input;

/// Main application state: the game plus the grid cursor the player
/// steers with the arrow keys. Everything shown on screen is derived
/// from the game each frame.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Grid cursor for rendering the highlight.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line for the header: whose turn, victory, or stalemate.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.game.to_move()),
            GameStatus::Won(win) => format!("VICTORY - {} wins", win.winner),
            GameStatus::Drawn => "STALEMATE".to_string(),
        }
    }

    /// Handles a key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        debug!(?key, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') => self.game.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => self.game.click(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Keys 1-9 map to squares 0-8
                if let Some(digit) = c.to_digit(10) {
                    if digit >= 1 {
                        self.game.click_cell(digit as usize - 1);
                    }
                }
            }
            KeyCode::Char('[') => self.scrub(-1),
            KeyCode::Char(']') => self.scrub(1),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
        false
    }

    /// Moves the history cursor one step; saturates at the ends, which
    /// keeps every scrub request in range by construction.
    fn scrub(&mut self, delta: isize) {
        let cursor = self.game.history().cursor();
        let target = if delta < 0 {
            cursor.saturating_sub(1)
        } else {
            cursor + 1
        };
        self.game.jump_to(target);
    }
}
