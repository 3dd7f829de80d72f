//! Machine opponent: takes the first legal position.

use touchless_tictactoe::{Game, Player, Position};

/// Returns the first position `player` may take, if it is their turn.
pub fn pick_move(game: &Game, player: Player) -> Option<Position> {
    game.available_moves(player).into_iter().next()
}
