//! Win detection logic.

use crate::line::Line;
use crate::types::{Board, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns true if `player` holds every position of some line.
///
/// Stops at the first completed line.
#[instrument(skip(board))]
pub fn is_won_by(board: &Board, player: Player) -> bool {
    Line::all().iter().any(|line| {
        line.positions().iter().all(|&position| {
            board
                .cell_at(position)
                .is_ok_and(|cell| cell.is_played_by(player))
        })
    })
}

/// Returns the player who has completed a line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| is_won_by(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board_with(moves: &[(Position, Player)]) -> Board {
        moves
            .iter()
            .fold(Board::empty(), |board, &(position, player)| {
                board.with_move(position, player)
            })
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::empty();
        assert!(!is_won_by(&board, Player::First));
        assert!(!is_won_by(&board, Player::Second));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TOP_LEFT, Player::First),
            (Position::TOP_CENTER, Player::First),
            (Position::TOP_RIGHT, Player::First),
        ]);
        assert!(is_won_by(&board, Player::First));
        assert!(!is_won_by(&board, Player::Second));
        assert_eq!(winner(&board), Some(Player::First));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TOP_CENTER, Player::Second),
            (Position::CENTER, Player::Second),
            (Position::BOTTOM_CENTER, Player::Second),
        ]);
        assert_eq!(winner(&board), Some(Player::Second));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TOP_RIGHT, Player::Second),
            (Position::CENTER, Player::Second),
            (Position::BOTTOM_LEFT, Player::Second),
        ]);
        assert!(is_won_by(&board, Player::Second));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TOP_LEFT, Player::First),
            (Position::TOP_CENTER, Player::Second),
            (Position::TOP_RIGHT, Player::First),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TOP_LEFT, Player::First),
            (Position::TOP_CENTER, Player::First),
        ]);
        assert!(!is_won_by(&board, Player::First));
    }
}
