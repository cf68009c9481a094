//! Tests for the game-state engine: moves, rejection, termination, replay.

use witty_tictactoe::{
    BalancedMarks, GameState, GameStatus, Invariant, Move, MoveError, Player, Position,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_lifecycle() {
    init_tracing();

    let state = GameState::new();
    assert_eq!(state.to_move(), Player::X);
    assert_eq!(state.status(), GameStatus::InProgress);

    let state = state.apply_move(1, 1).expect("valid move");
    assert_eq!(state.to_move(), Player::O);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_out_of_range_rejected() {
    let state = GameState::new();

    assert_eq!(state.apply_move(3, 0), Err(MoveError::OutOfBounds(3, 0)));
    assert_eq!(state.apply_move(0, 3), Err(MoveError::OutOfBounds(0, 3)));
    assert_eq!(
        state.apply_move(7, 7),
        Err(MoveError::OutOfBounds(7, 7))
    );
}

#[test]
fn test_occupied_square_rejected() {
    let state = GameState::new().apply_move(1, 1).expect("valid move");

    assert_eq!(
        state.apply_move(1, 1),
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_failed_move_is_a_no_op() {
    let state = GameState::new().apply_move(0, 0).expect("valid move");
    let snapshot = state.clone();

    assert!(state.apply_move(0, 0).is_err());
    assert!(state.apply_move(9, 9).is_err());

    // The receiver is untouched on failure.
    assert_eq!(state, snapshot);
    assert_eq!(state.legal_moves().len(), 8);
}

#[test]
fn test_win_detection() {
    // X takes the top row.
    let state = play_all(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(state.winner(), Some(Player::X));
    assert!(!state.is_draw());
    assert_eq!(state.status().winner(), Some(Player::X));
}

#[test]
fn test_draw_detection() {
    let state = play_all(&[
        (0, 0), // X
        (1, 1), // O
        (0, 2), // X
        (0, 1), // O
        (1, 0), // X
        (1, 2), // O
        (2, 1), // X
        (2, 0), // O
        (2, 2), // X
    ]);

    assert_eq!(state.status(), GameStatus::Draw);
    assert!(state.is_draw());
    assert_eq!(state.winner(), None);
    assert!(state.legal_moves().is_empty());
}

#[test]
fn test_terminal_state_rejects_moves() {
    let state = play_all(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(state.status().is_terminal());

    assert_eq!(state.apply_move(2, 2), Err(MoveError::GameOver));
}

#[test]
fn test_mark_balance_after_every_move() {
    let script = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1)];

    let mut state = GameState::new();
    for (row, col) in script {
        state = state.apply_move(row, col).expect("valid move");
        assert!(BalancedMarks::holds(&state), "after ({row}, {col})");
    }
}

#[test]
fn test_replay_rebuilds_state() {
    let moves = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
    ];

    let replayed = GameState::replay(&moves).expect("valid replay");
    assert_eq!(replayed.history(), moves.as_slice());
    assert_eq!(replayed.to_move(), Player::O);
    assert_eq!(replayed.status(), GameStatus::InProgress);
}

#[test]
fn test_replay_rejects_wrong_player() {
    let moves = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::X, Position::TopLeft), // X plays twice
    ];

    assert_eq!(
        GameState::replay(&moves),
        Err(MoveError::WrongPlayer(Player::X))
    );
}

#[test]
fn test_serde_round_trip() {
    let state = play_all(&[(1, 1), (0, 0), (2, 0)]);

    let encoded = serde_json::to_string(&state).expect("serialize");
    let decoded: GameState = serde_json::from_str(&encoded).expect("deserialize");

    assert_eq!(decoded, state);
    assert_eq!(decoded.to_move(), Player::O);
}

fn play_all(moves: &[(usize, usize)]) -> GameState {
    let mut state = GameState::new();
    for &(row, col) in moves {
        state = state.apply_move(row, col).expect("valid script");
    }
    state
}
