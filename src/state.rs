//! Authoritative game state: board, turn tracking, terminal detection.

use crate::action::{Move, MoveError};
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete game state: the board plus the side to move.
///
/// A new game starts with an empty board and X to move. The state is
/// mutated exclusively through [`GameState::apply_move`] (or its
/// position-typed variant [`GameState::play`]), which is pure: it returns
/// a fresh state and never touches the receiver, so a failed move is a
/// no-op by construction.
///
/// The outcome is derived, never stored — [`GameState::status`],
/// [`GameState::winner`], and [`GameState::is_draw`] recompute it from
/// the board on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    to_move: Player,
    /// Moves played so far, in order.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies the side to move's mark at (row, col), both in 0-2.
    ///
    /// Returns the successor state; the receiver is unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if the coordinates do not name a cell.
    /// - [`MoveError::SquareOccupied`] if the target cell is not empty.
    /// - [`MoveError::GameOver`] if the game has already ended.
    #[instrument(skip(self))]
    pub fn apply_move(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        let position =
            Position::from_coords(row, col).ok_or(MoveError::OutOfBounds(row, col))?;
        self.play(position)
    }

    /// Applies the side to move's mark at the given position.
    ///
    /// Same semantics as [`GameState::apply_move`], minus the range check:
    /// a [`Position`] is always on the board.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&self, position: Position) -> Result<GameState, MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let next = self.advance(position);
        assert_invariants(&next);
        Ok(next)
    }

    /// The player owning three in a row, column, or diagonal, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// True iff no empty cell remains and there is no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_full(&self.board) && self.winner().is_none()
    }

    /// Derived game status: win, draw, or still in progress.
    ///
    /// A full board with a winner reports the win, never a draw.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// All empty cells, in row-major order (top-left to bottom-right).
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Rebuilds a state by validating and applying every move in order.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`] from the offending move; additionally
    /// [`MoveError::WrongPlayer`] if a move is attributed to the player
    /// whose turn it is not.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameState, MoveError> {
        let mut state = GameState::new();
        for action in moves {
            if action.player != state.to_move {
                return Err(MoveError::WrongPlayer(action.player));
            }
            state = state.play(action.position)?;
        }
        Ok(state)
    }

    /// Advances without validation. Callers guarantee the position is
    /// empty and the game is live; used by the search to explore
    /// hypothetical states as owned snapshots.
    pub(crate) fn advance(&self, position: Position) -> GameState {
        debug_assert!(self.board.is_empty(position));
        let mut next = self.clone();
        next.board.set(position, Square::Occupied(next.to_move));
        next.history.push(Move::new(next.to_move, position));
        next.to_move = next.to_move.opponent();
        next
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.to_move(), Player::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.legal_moves().len(), 9);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_legal_moves_row_major_on_empty_board() {
        let state = GameState::new();
        assert_eq!(state.legal_moves(), Position::ALL.to_vec());
    }

    #[test]
    fn test_legal_moves_skip_occupied() {
        let state = GameState::new()
            .play(Position::Center)
            .and_then(|s| s.play(Position::TopLeft))
            .expect("valid moves");

        let legal = state.legal_moves();
        assert_eq!(legal.len(), 7);
        assert!(!legal.contains(&Position::Center));
        assert!(!legal.contains(&Position::TopLeft));
    }

    #[test]
    fn test_play_alternates_turns() {
        let state = GameState::new();
        let state = state.play(Position::Center).expect("valid move");
        assert_eq!(state.to_move(), Player::O);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_status_derived_not_stored() {
        // X takes the top row: status flips to Won without any explicit set.
        let moves = [
            (0, 0), // X
            (1, 0), // O
            (0, 1), // X
            (1, 1), // O
            (0, 2), // X wins
        ];
        let mut state = GameState::new();
        for (row, col) in moves {
            state = state.apply_move(row, col).expect("valid move");
        }
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.winner(), Some(Player::X));
        assert!(!state.is_draw());
    }
}
