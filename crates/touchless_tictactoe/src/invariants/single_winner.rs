//! Outcome agreement: the state machine and the rules tell the same story.

use super::Invariant;
use crate::{Game, GameOutcomeState, Player, rules};

/// Invariant: at most one player holds a completed line, and the current
/// phase matches what the rules say about the board.
pub struct SingleWinnerInvariant;

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.current_board();
        let first_won = rules::is_won_by(board, Player::First);
        let second_won = rules::is_won_by(board, Player::Second);

        if first_won && second_won {
            return false;
        }

        match game.current_state() {
            GameOutcomeState::ToMove { legal, .. } => {
                !first_won && !second_won && !board.is_full() && *legal == board.remaining_positions()
            }
            GameOutcomeState::Won { player, .. } => rules::is_won_by(board, *player),
            GameOutcomeState::Tied { .. } => !first_won && !second_won && rules::is_tied(board),
        }
    }

    fn description() -> &'static str {
        "At most one winner, and the phase agrees with the board"
    }
}
