//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent the player's
//! intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates do not name a cell on the 3x3 board.
    #[display("coordinates ({_0}, {_1}) are off the board")]
    OutOfBounds(usize, usize),

    /// The square at the position is already occupied.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("it is not {_0}'s turn")]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}
