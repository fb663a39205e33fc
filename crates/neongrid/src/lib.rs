//! neongrid - tic-tac-toe game logic with time-travel history.
//!
//! Pure, UI-independent core: immutable board values, a fixed-line win
//! evaluator, a snapshot log with a navigation cursor, and a game
//! controller that derives turn and status instead of storing them.
//!
//! # Example
//!
//! ```
//! use neongrid::{Game, GameStatus, Position};
//!
//! let mut game = Game::new();
//! game.click(Position::Center);
//! game.click(Position::TopLeft);
//!
//! // Scrub back before O's move, then branch
//! game.jump_to(1);
//! game.click(Position::TopRight);
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
mod position;
mod rules;
mod types;

pub mod invariants;

pub use game::Game;
pub use history::HistoryLog;
pub use position::Position;
pub use rules::{check_winner, is_full, WinInfo, LINES};
pub use types::{Board, GameStatus, Player, Square};
