//! Alternating turn invariant: First, Second, First, ... from the configured
//! first player.

use super::Invariant;
use crate::{Game, GameOutcomeState};

/// Invariant: players alternate, starting with the configured first player,
/// and a game still in progress waits on the right player.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let first = *game.config().first_player();
        let history = game.history();

        if let Some(opening) = history.first()
            && opening.player != first
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match game.current_state() {
            GameOutcomeState::ToMove { player, .. } => {
                let expected = if history.len() % 2 == 0 {
                    first
                } else {
                    first.opponent()
                };
                *player == expected
            }
            // The last mover finished the game.
            GameOutcomeState::Won { player, .. } => {
                history.last().is_some_and(|last| last.player == *player)
            }
            GameOutcomeState::Tied { .. } => !history.is_empty(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns from the first player"
    }
}
