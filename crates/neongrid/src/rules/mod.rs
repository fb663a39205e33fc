//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the game controller can derive status fresh on every
//! inspection without caching.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, WinInfo, LINES};
