//! First-class invariants over the game's history log.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

mod alternating_turn;
mod history_consistent;
mod monotonic_board;

pub use alternating_turn::AlternatingTurn;
pub use history_consistent::HistoryConsistent;
pub use monotonic_board::MonotonicBoard;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}
