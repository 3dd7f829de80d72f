//! Deserialized states must agree with their boards.

use touchless_tictactoe::{Board, GameOutcomeState, Player, Position, StateError};

fn round_trip(state: &GameOutcomeState) -> Result<GameOutcomeState, serde_json::Error> {
    let json = serde_json::to_string(state).expect("serialize");
    serde_json::from_str(&json)
}

fn board_with(moves: &[(Position, Player)]) -> Board {
    moves
        .iter()
        .fold(Board::empty(), |board, &(position, player)| {
            board.with_move(position, player)
        })
}

#[test]
fn test_reachable_states_round_trip() {
    let mut state = GameOutcomeState::start(Player::First);
    assert_eq!(round_trip(&state).expect("start"), state);

    for (player, position) in [
        (Player::First, Position::TOP_LEFT),
        (Player::Second, Position::CENTER),
        (Player::First, Position::TOP_CENTER),
        (Player::Second, Position::BOTTOM_LEFT),
        (Player::First, Position::TOP_RIGHT),
    ] {
        state = state.advance(player, position).expect("legal move");
        assert_eq!(round_trip(&state).expect("reachable"), state);
    }
    assert_eq!(state.winner(), Some(Player::First));
}

#[test]
fn test_occupied_legal_position_rejected() {
    let board = Board::empty().with_move(Position::CENTER, Player::Second);
    let forged = GameOutcomeState::ToMove {
        player: Player::First,
        board,
        legal: vec![Position::CENTER],
    };

    let err = round_trip(&forged).unwrap_err();
    assert!(
        err.to_string()
            .contains(&StateError::LegalMismatch(vec![Position::CENTER]).to_string())
    );
}

#[test]
fn test_move_expected_on_decided_board_rejected() {
    let board = board_with(&[
        (Position::TOP_LEFT, Player::First),
        (Position::TOP_CENTER, Player::First),
        (Position::TOP_RIGHT, Player::First),
    ]);
    let forged = GameOutcomeState::ToMove {
        player: Player::Second,
        legal: board.remaining_positions(),
        board,
    };

    let err = round_trip(&forged).unwrap_err();
    assert!(err.to_string().contains(&StateError::AlreadyDecided.to_string()));
}

#[test]
fn test_win_without_line_rejected() {
    let forged = GameOutcomeState::Won {
        player: Player::Second,
        board: Board::empty().with_move(Position::CENTER, Player::Second),
    };

    let err = round_trip(&forged).unwrap_err();
    assert!(
        err.to_string()
            .contains(&StateError::NotWonBy(Player::Second).to_string())
    );
}

#[test]
fn test_tie_on_open_board_rejected() {
    let forged = GameOutcomeState::Tied {
        board: Board::empty(),
    };

    let err = round_trip(&forged).unwrap_err();
    assert!(err.to_string().contains(&StateError::NotTied.to_string()));
}
