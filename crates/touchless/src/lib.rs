//! Console front end for the touchless tic-tac-toe engine.
//!
//! Stands in for the gesture-driven input layer and the on-screen board:
//! positions come from typed lines instead of fingertips, and a text
//! renderer registered as a [`GameObserver`](touchless_tictactoe::GameObserver)
//! redraws the board after every change.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod opponent;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use console::{Command, ConsoleSession, ConsoleView};
pub use opponent::pick_move;
