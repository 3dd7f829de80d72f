//! History consistency: the board is exactly the replay of the history.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: replaying the move history onto an empty board reproduces
/// the current board, and no move landed on a taken cell.
///
/// Implies the played-cell count equals the number of accepted moves.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::empty();

        for action in game.history() {
            match reconstructed.cell_at(action.position) {
                Ok(cell) if cell.is_empty() => {}
                _ => return false,
            }
            reconstructed = reconstructed.with_move(action.position, action.player);
        }

        reconstructed == *game.current_board()
            && game.current_board().played_count() == game.history().len()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}
