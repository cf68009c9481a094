//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and are asserted after
//! every state transition in debug builds.

use crate::state::GameState;
use crate::types::Player;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: mark counts stay balanced.
///
/// X moves first, so under legal alternating play the X count is never
/// less than the O count and never exceeds it by more than one.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().marks(Player::X);
        let o_count = state.board().marks(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by exactly one"
    }
}

/// Invariant: players alternate turns.
///
/// Move history must show X, O, X, O, ... with X first, and the side to
/// move must agree with the history length.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "players alternate turns (X, O, X, O, ...)"
    }
}

/// Asserts that all engine invariants hold (debug builds only).
pub(crate) fn assert_invariants(state: &GameState) {
    debug_assert!(BalancedMarks::holds(state), "{}", BalancedMarks::description());
    debug_assert!(
        AlternatingTurn::holds(state),
        "{}",
        AlternatingTurn::description()
    );
}
