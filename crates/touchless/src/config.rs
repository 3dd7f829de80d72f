//! Application configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use touchless_tictactoe::{GameConfig, Player, TerminalInput};
use tracing::{debug, info, instrument};

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Engine settings.
    #[serde(default)]
    game: GameConfig,

    /// Name shown for the human player.
    #[serde(default = "default_first_player_name")]
    first_player_name: String,

    /// Name shown for the machine player.
    #[serde(default = "default_second_player_name")]
    second_player_name: String,
}

fn default_first_player_name() -> String {
    Player::First.display_name().to_string()
}

fn default_second_player_name() -> String {
    Player::Second.display_name().to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            first_player_name: default_first_player_name(),
            second_player_name: default_second_player_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(game = ?config.game, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file named on the command line, if any, then applies flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(cli))
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if cli.explicit_reset {
            self.game = self.game.with_terminal_input(TerminalInput::Ignore);
        }
        if cli.second_player_first {
            self.game = self.game.with_first_player(Player::Second);
        }
        self
    }

    /// Name to show for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::First => &self.first_player_name,
            Player::Second => &self.second_player_name,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.name_of(Player::First), "User");
        assert_eq!(config.name_of(Player::Second), "AI");
        assert_eq!(*config.game().terminal_input(), TerminalInput::Reset);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            first_player_name = "Hand"

            [game]
            terminal_input = "ignore"
            "#,
        )
        .unwrap();
        assert_eq!(config.name_of(Player::First), "Hand");
        assert_eq!(config.name_of(Player::Second), "AI");
        assert_eq!(*config.game().terminal_input(), TerminalInput::Ignore);
        assert_eq!(*config.game().first_player(), Player::First);
    }

    #[test]
    fn test_flags_override_file() {
        let cli = Cli::parse_from(["touchless", "--explicit-reset", "--second-player-first"]);
        let config = AppConfig::default().with_overrides(&cli);
        assert_eq!(*config.game().terminal_input(), TerminalInput::Ignore);
        assert_eq!(*config.game().first_player(), Player::Second);
    }
}
