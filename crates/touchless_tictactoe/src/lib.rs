//! Tic-tac-toe rules engine for touch-free play.
//!
//! The engine is a synchronous, single-threaded state machine with no I/O.
//! Input layers (gesture detection, a console, a test) turn whatever they
//! observe into a [`Player`] and a [`Position`] and call
//! [`Game::apply_move`]. Rendering layers implement [`GameObserver`] and
//! re-read [`Game::current_state`] whenever they are notified.
//!
//! # Architecture
//!
//! - **Geometry**: [`Position`] and the eight winning [`Line`]s
//! - **Board**: immutable [`Board`] values of nine [`Cell`]s
//! - **Rules**: pure win/tie detection in [`rules`]
//! - **State machine**: [`GameOutcomeState`] and its transition function
//! - **Game**: state ownership, history and observer notification
//!
//! # Example
//!
//! ```
//! use touchless_tictactoe::{Game, GameOutcomeState, MoveOutcome, Player, Position};
//!
//! let mut game = Game::new_game();
//! assert_eq!(game.apply_move(Player::First, Position::CENTER), MoveOutcome::Accepted);
//! assert!(matches!(
//!     game.current_state(),
//!     GameOutcomeState::ToMove { player: Player::Second, .. }
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
mod game;
pub mod invariants;
mod line;
mod observer;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::Move;
pub use config::{GameConfig, TerminalInput};
pub use error::{BoardError, ParsePositionError, StateError};
pub use game::{Game, MoveOutcome, ReplayError};
pub use line::Line;
pub use observer::{GameObserver, ObserverId};
pub use position::{Horizontal, Position, Vertical};
pub use state::{GameOutcomeState, Rejection};
pub use types::{Board, Cell, Occupancy, Player};
