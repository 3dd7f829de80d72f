//! Tie detection logic.

use crate::types::Board;
use tracing::instrument;

/// Returns true if every cell has been played.
///
/// A full board can also hold a completed line, so callers check for a
/// winner first. A win always takes precedence over a tie.
#[instrument(skip(board))]
pub fn is_tied(board: &Board) -> bool {
    board.is_full()
}
