//! Pure tic-tac-toe game logic with a difficulty-tiered computer opponent.
//!
//! Two components, strictly layered:
//!
//! - [`GameState`] — the authoritative 3x3 board, turn tracking, and
//!   terminal-state detection. Leaf component; everything else depends on it.
//! - [`MoveSelector`] — picks the automated player's next move under a
//!   [`Difficulty`] policy: uniform random, one-ply win/block, or full
//!   adversarial search.
//!
//! The crate is UI-agnostic. A front end applies the human's move with
//! [`GameState::apply_move`], checks [`GameState::status`], and when the game
//! is still live and it is the computer's turn asks
//! [`MoveSelector::select_move`] for a reply.
//!
//! # Example
//!
//! ```
//! use witty_tictactoe::{Difficulty, GameState, GameStatus, MoveSelector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut selector = MoveSelector::new();
//!
//! let state = GameState::new();
//! let state = state.apply_move(0, 0)?; // human X takes a corner
//!
//! let reply = selector.select_move(&state, Difficulty::Optimal)?;
//! let state = state.play(reply)?;
//!
//! assert_eq!(state.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod position;
mod rules;
mod selector;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use invariants::{AlternatingTurn, BalancedMarks, Invariant};
pub use position::Position;
pub use selector::{Difficulty, MoveSelector, SelectError};
pub use state::GameState;
pub use types::{Board, GameStatus, Player, Square};
