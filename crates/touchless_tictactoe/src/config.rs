//! Engine configuration.

use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What a move attempt does once the game is won or tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalInput {
    /// Any move attempt starts a new round on an empty board.
    #[default]
    Reset,
    /// Move attempts are ignored; only [`Game::reset`](crate::Game::reset)
    /// starts a new round.
    Ignore,
}

/// Settings fixed for the lifetime of a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player who moves first in every round.
    first_player: Player,
    /// Handling of move attempts after the game is over.
    terminal_input: TerminalInput,
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(first_player: Player, terminal_input: TerminalInput) -> Self {
        Self {
            first_player,
            terminal_input,
        }
    }

    /// Returns a copy with a different first player.
    pub fn with_first_player(self, first_player: Player) -> Self {
        Self {
            first_player,
            ..self
        }
    }

    /// Returns a copy with a different terminal-input policy.
    pub fn with_terminal_input(self, terminal_input: TerminalInput) -> Self {
        Self {
            terminal_input,
            ..self
        }
    }
}
