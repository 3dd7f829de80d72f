//! End-to-end game scenarios through the public API.

use touchless_tictactoe::{
    Game, GameConfig, GameOutcomeState, Move, MoveOutcome, Occupancy, Player, Position,
    Rejection, TerminalInput,
};

fn play(game: &mut Game, moves: &[(Player, Position)]) {
    for &(player, position) in moves {
        assert_eq!(
            game.apply_move(player, position),
            MoveOutcome::Accepted,
            "{:?} at {}",
            player,
            position
        );
    }
}

/// X O X / X O O / O X X, no line.
const TIE: [(Player, Position); 9] = [
    (Player::First, Position::TOP_LEFT),
    (Player::Second, Position::TOP_CENTER),
    (Player::First, Position::TOP_RIGHT),
    (Player::Second, Position::CENTER),
    (Player::First, Position::CENTER_LEFT),
    (Player::Second, Position::CENTER_RIGHT),
    (Player::First, Position::BOTTOM_CENTER),
    (Player::Second, Position::BOTTOM_LEFT),
    (Player::First, Position::BOTTOM_RIGHT),
];

const DIAGONAL_WIN: [(Player, Position); 5] = [
    (Player::First, Position::TOP_LEFT),
    (Player::Second, Position::TOP_CENTER),
    (Player::First, Position::CENTER),
    (Player::Second, Position::TOP_RIGHT),
    (Player::First, Position::BOTTOM_RIGHT),
];

#[test]
fn test_first_move_passes_turn() {
    let mut game = Game::new_game();
    play(&mut game, &[(Player::First, Position::TOP_LEFT)]);

    assert_eq!(game.current_state().active_player(), Some(Player::Second));
    let played: Vec<_> = game
        .current_board()
        .cells()
        .iter()
        .filter(|cell| cell.occupancy() != Occupancy::Empty)
        .collect();
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].position(), Position::TOP_LEFT);
    assert!(played[0].is_played_by(Player::First));
}

#[test]
fn test_diagonal_win() {
    let mut game = Game::new_game();
    play(&mut game, &DIAGONAL_WIN);

    match game.current_state() {
        GameOutcomeState::Won { player, board } => {
            assert_eq!(*player, Player::First);
            assert_eq!(board.played_count(), 5);
        }
        other => panic!("Expected a win, got {:?}", other),
    }
    assert!(game.available_moves(Player::First).is_empty());
    assert!(game.available_moves(Player::Second).is_empty());
}

#[test]
fn test_full_board_without_line_is_tied() {
    let mut game = Game::new_game();
    play(&mut game, &TIE);

    assert!(matches!(game.current_state(), GameOutcomeState::Tied { .. }));
    assert!(game.current_board().is_full());
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_out_of_turn_move_ignored() {
    let mut game = Game::new_game();
    let before = game.current_state().clone();

    for position in Position::all() {
        let outcome = game.apply_move(Player::Second, position);
        assert_eq!(
            outcome,
            MoveOutcome::Ignored(Rejection::WrongPlayer {
                player: Player::Second,
                active: Player::First,
            })
        );
        assert_eq!(game.current_state(), &before);
    }
}

#[test]
fn test_occupied_position_ignored() {
    let mut game = Game::new_game();
    play(
        &mut game,
        &[
            (Player::First, Position::CENTER),
            (Player::Second, Position::TOP_LEFT),
        ],
    );
    let before = game.current_state().clone();

    assert!(!game.available_moves(Player::First).contains(&Position::TOP_LEFT));
    assert_eq!(
        game.apply_move(Player::First, Position::TOP_LEFT),
        MoveOutcome::Ignored(Rejection::IllegalPosition(Position::TOP_LEFT))
    );
    assert_eq!(game.current_state(), &before);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_win_on_last_cell_is_not_a_tie() {
    let mut game = Game::new_game();
    play(
        &mut game,
        &[
            (Player::First, Position::TOP_LEFT),
            (Player::Second, Position::TOP_CENTER),
            (Player::First, Position::TOP_RIGHT),
            (Player::Second, Position::CENTER_LEFT),
            (Player::First, Position::CENTER),
            (Player::Second, Position::CENTER_RIGHT),
            (Player::First, Position::BOTTOM_CENTER),
            (Player::Second, Position::BOTTOM_LEFT),
            (Player::First, Position::BOTTOM_RIGHT),
        ],
    );

    assert!(game.current_board().is_full());
    assert_eq!(game.current_state().winner(), Some(Player::First));
}

#[test]
fn test_input_after_game_over_resets_by_default() {
    let mut game = Game::new_game();
    play(&mut game, &DIAGONAL_WIN);

    let outcome = game.apply_move(Player::Second, Position::BOTTOM_LEFT);

    assert_eq!(outcome, MoveOutcome::Reset);
    assert_eq!(game.current_state(), &GameOutcomeState::start(Player::First));
    assert!(game.history().is_empty());
}

#[test]
fn test_input_after_tie_resets_by_default() {
    let mut game = Game::new_game();
    play(&mut game, &TIE);

    assert_eq!(game.apply_move(Player::First, Position::CENTER), MoveOutcome::Reset);
    assert_eq!(game.available_moves(Player::First).len(), 9);
}

#[test]
fn test_ignore_policy_requires_explicit_reset() {
    let config = GameConfig::default().with_terminal_input(TerminalInput::Ignore);
    let mut game = Game::with_config(config);
    play(&mut game, &DIAGONAL_WIN);
    let finished = game.current_state().clone();

    assert_eq!(
        game.apply_move(Player::Second, Position::BOTTOM_LEFT),
        MoveOutcome::Ignored(Rejection::GameOver)
    );
    assert_eq!(game.current_state(), &finished);

    game.reset();
    assert_eq!(game.current_state(), &GameOutcomeState::start(Player::First));
}

#[test]
fn test_replay_matches_live_game() {
    let mut live = Game::new_game();
    play(&mut live, &DIAGONAL_WIN);

    let moves: Vec<Move> = DIAGONAL_WIN
        .iter()
        .map(|&(player, position)| Move::new(player, position))
        .collect();
    let replayed = Game::replay(GameConfig::default(), &moves).expect("valid replay");

    assert_eq!(replayed.current_state(), live.current_state());
    assert_eq!(replayed.history(), live.history());
}

#[test]
fn test_replay_rejects_moves_after_game_over() {
    let mut moves: Vec<Move> = DIAGONAL_WIN
        .iter()
        .map(|&(player, position)| Move::new(player, position))
        .collect();
    moves.push(Move::new(Player::Second, Position::BOTTOM_LEFT));

    let err = Game::replay(GameConfig::default(), &moves).unwrap_err();
    assert_eq!(err.index, 5);
    assert_eq!(err.rejection, Rejection::GameOver);
}
