//! Move selection for the automated player.
//!
//! Three difficulty policies:
//!
//! - [`Difficulty::Random`] — uniform choice among the empty squares.
//! - [`Difficulty::Tactical`] — one-ply lookahead: take an immediate win,
//!   else block the opponent's, else fall back to random.
//! - [`Difficulty::Optimal`] — exhaustive minimax over the full game tree;
//!   never loses.
//!
//! Deterministic policies scan candidates in row-major order and take the
//! first qualifying move, so their choices are reproducible.

use crate::position::Position;
use crate::rules;
use crate::state::GameState;
use crate::types::{Board, Player, Square};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty policy for the automated player.
///
/// Parses from the policy names or from the front-end tier names
/// (`easy` / `medium` / `hard`), case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform choice among the empty squares.
    #[strum(serialize = "easy", to_string = "random")]
    Random,
    /// Take an immediate win, else block the opponent's, else play random.
    #[strum(serialize = "medium", to_string = "tactical")]
    Tactical,
    /// Full-depth adversarial search; never loses.
    #[strum(serialize = "hard", to_string = "optimal")]
    Optimal,
}

/// Error that can occur when selecting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// No empty square remains. The caller must check for termination
    /// before requesting a move; this is a contract violation, surfaced
    /// as an error rather than undefined behavior.
    #[display("no legal move remains on the board")]
    NoLegalMove,
}

impl std::error::Error for SelectError {}

/// Selects moves for the automated player.
///
/// Owns the random source used by the [`Difficulty::Random`] policy and
/// the tactical fallback. Construct with [`MoveSelector::from_seed`] for
/// reproducible games.
#[derive(Debug)]
pub struct MoveSelector {
    rng: SmallRng,
}

impl MoveSelector {
    /// Creates a selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a deterministic selector from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Picks the next move for the side to move under `difficulty`.
    ///
    /// The search runs to completion before returning and only ever
    /// explores owned snapshots; `state` is never mutated.
    ///
    /// # Errors
    ///
    /// [`SelectError::NoLegalMove`] if the board is full.
    #[instrument(skip(self, state), fields(to_move = %state.to_move()))]
    pub fn select_move(
        &mut self,
        state: &GameState,
        difficulty: Difficulty,
    ) -> Result<Position, SelectError> {
        let legal = state.legal_moves();
        let choice = match difficulty {
            Difficulty::Random => self.random_move(&legal),
            Difficulty::Tactical => self.tactical_move(state, &legal),
            Difficulty::Optimal => optimal_move(state, &legal),
        };
        let position = choice.ok_or(SelectError::NoLegalMove)?;
        debug!(%position, "selected move");
        Ok(position)
    }

    /// Uniform choice among the legal moves.
    fn random_move(&mut self, legal: &[Position]) -> Option<Position> {
        legal.choose(&mut self.rng).copied()
    }

    /// One-ply lookahead: win if possible, else block, else random.
    ///
    /// Own win is checked before the block: a winning move always beats
    /// blocking, even when both are available.
    fn tactical_move(&mut self, state: &GameState, legal: &[Position]) -> Option<Position> {
        let me = state.to_move();

        if let Some(position) = winning_square(state.board(), me, legal) {
            debug!(%position, "taking immediate win");
            return Some(position);
        }
        if let Some(position) = winning_square(state.board(), me.opponent(), legal) {
            debug!(%position, "blocking opponent threat");
            return Some(position);
        }
        self.random_move(legal)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// First legal square (row-major) where placing `player`'s mark would
/// complete a line.
fn winning_square(board: &Board, player: Player, legal: &[Position]) -> Option<Position> {
    legal.iter().copied().find(|&position| {
        let mut probe = board.clone();
        probe.set(position, Square::Occupied(player));
        rules::check_winner(&probe) == Some(player)
    })
}

/// The legal move with the best full-depth minimax score for the side to
/// move. Ties go to the first candidate in row-major order (strict `>`
/// against the running best).
fn optimal_move(state: &GameState, legal: &[Position]) -> Option<Position> {
    let me = state.to_move();
    let mut best_score = i8::MIN;
    let mut best = None;

    for &position in legal {
        let score = minimax(&state.advance(position), me);
        if score > best_score {
            best_score = score;
            best = Some(position);
        }
    }

    best
}

/// Scores a state from `me`'s perspective: +1 if `me` wins, -1 if the
/// opponent wins, 0 for a draw, with no depth discount.
///
/// Whichever player is to move optimizes its own interest: `me`
/// maximizes the score, the opponent minimizes it. Hypothetical states
/// are owned clones, so the recursion never leaks exploratory mutation.
fn minimax(state: &GameState, me: Player) -> i8 {
    if let Some(winner) = rules::check_winner(state.board()) {
        return if winner == me { 1 } else { -1 };
    }

    let legal = state.legal_moves();
    if legal.is_empty() {
        return 0;
    }

    let maximizing = state.to_move() == me;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };
    for position in legal {
        let score = minimax(&state.advance(position), me);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
