//! Error types for the board engine.
//!
//! Illegal moves are not errors: the game reports them through
//! [`MoveOutcome`](crate::MoveOutcome). The types here cover broken board
//! invariants and text that does not name a position.

use crate::position::Position;
use crate::types::Player;
use derive_more::{Display, Error};

/// A board that does not hold exactly one cell per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Cell lookup for a position the board does not contain.
    #[display("Position {} not found on board", _0)]
    PositionNotFound(#[error(not(source))] Position),

    /// Two cells share a position.
    #[display("Position {} appears more than once on board", _0)]
    DuplicatePosition(#[error(not(source))] Position),

    /// The board holds the wrong number of cells.
    #[display("Board has {} cells, expected 9", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

/// Text that is neither a position label nor a grid number 1-9.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Not a board position: {:?}", input)]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

impl ParsePositionError {
    /// Creates a parse error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A deserialized [`GameOutcomeState`](crate::GameOutcomeState) whose phase
/// does not match its board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StateError {
    /// The legal positions are not exactly the empty cells.
    #[display("Legal positions {:?} do not match the empty cells", _0)]
    LegalMismatch(#[error(not(source))] Vec<Position>),

    /// A game still in progress whose board is already decided.
    #[display("Board is already decided but a move is expected")]
    AlreadyDecided,

    /// A win claimed by a player who holds no line, or a board both players won.
    #[display("Board is not won by {} alone", _0)]
    NotWonBy(#[error(not(source))] Player),

    /// A tie on a board that is not full or has a winner.
    #[display("Board is not a tie")]
    NotTied,
}
