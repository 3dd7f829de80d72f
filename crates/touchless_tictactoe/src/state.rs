//! The move-result state machine.
//!
//! [`GameOutcomeState`] is the single value the rest of an application
//! renders and reacts to. [`GameOutcomeState::advance`] is the pure
//! transition function; [`Game`](crate::Game) wraps it with history,
//! configuration and observer notification.

use crate::error::StateError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Phase of a game together with the board it applies to.
///
/// Deserialization checks that the phase agrees with the board: `legal` is
/// exactly the empty cells of an undecided board, a win belongs to the only
/// player holding a line, and a tie is a full board with no line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedState")]
pub enum GameOutcomeState {
    /// Waiting for `player` to take one of `legal` positions.
    ToMove {
        /// Player whose turn it is.
        player: Player,
        /// Current board.
        board: Board,
        /// Empty positions, in board order.
        legal: Vec<Position>,
    },
    /// `player` completed a line. Terminal.
    Won {
        /// The winner.
        player: Player,
        /// Final board.
        board: Board,
    },
    /// The board filled up with no line completed. Terminal.
    Tied {
        /// Final board.
        board: Board,
    },
}

/// Wire shape of [`GameOutcomeState`] before its board is checked.
#[derive(Deserialize)]
enum UncheckedState {
    ToMove {
        player: Player,
        board: Board,
        legal: Vec<Position>,
    },
    Won {
        player: Player,
        board: Board,
    },
    Tied {
        board: Board,
    },
}

impl TryFrom<UncheckedState> for GameOutcomeState {
    type Error = StateError;

    fn try_from(state: UncheckedState) -> Result<Self, Self::Error> {
        match state {
            UncheckedState::ToMove {
                player,
                board,
                legal,
            } => {
                if rules::winner(&board).is_some() || board.is_full() {
                    return Err(StateError::AlreadyDecided);
                }
                if legal != board.remaining_positions() {
                    return Err(StateError::LegalMismatch(legal));
                }
                Ok(Self::ToMove {
                    player,
                    board,
                    legal,
                })
            }
            UncheckedState::Won { player, board } => {
                if !rules::is_won_by(&board, player) || rules::is_won_by(&board, player.opponent())
                {
                    return Err(StateError::NotWonBy(player));
                }
                Ok(Self::Won { player, board })
            }
            UncheckedState::Tied { board } => {
                if !rules::is_tied(&board) || rules::winner(&board).is_some() {
                    return Err(StateError::NotTied);
                }
                Ok(Self::Tied { board })
            }
        }
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The game is won or tied.
    #[display("Game is already over")]
    GameOver,

    /// It is someone else's turn.
    #[display("It's not {}'s turn ({} to move)", player, active)]
    WrongPlayer {
        /// Player who tried to move.
        player: Player,
        /// Player whose turn it is.
        active: Player,
    },

    /// The position is taken.
    #[display("{} is not available", _0)]
    IllegalPosition(Position),
}

impl GameOutcomeState {
    /// Fresh round: `first` to move on an empty board, every position legal.
    #[instrument]
    pub fn start(first: Player) -> Self {
        let board = Board::empty();
        Self::ToMove {
            player: first,
            legal: board.remaining_positions(),
            board,
        }
    }

    /// The board carried by every phase.
    pub fn board(&self) -> &Board {
        match self {
            Self::ToMove { board, .. } => board,
            Self::Won { board, .. } => board,
            Self::Tied { board } => board,
        }
    }

    /// Player to move, if the game is still going.
    pub fn active_player(&self) -> Option<Player> {
        match self {
            Self::ToMove { player, .. } => Some(*player),
            Self::Won { .. } => None,
            Self::Tied { .. } => None,
        }
    }

    /// Winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::ToMove { .. } => None,
            Self::Won { player, .. } => Some(*player),
            Self::Tied { .. } => None,
        }
    }

    /// Returns true once the game is won or tied.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::ToMove { .. } => false,
            Self::Won { .. } => true,
            Self::Tied { .. } => true,
        }
    }

    /// Positions `player` may take now.
    ///
    /// Empty unless `player` is the one to move.
    pub fn legal_positions(&self, player: Player) -> &[Position] {
        match self {
            Self::ToMove {
                player: active,
                legal,
                ..
            } if *active == player => legal.as_slice(),
            Self::ToMove { .. } => &[],
            Self::Won { .. } => &[],
            Self::Tied { .. } => &[],
        }
    }

    /// Applies `player` taking `position`, returning the next state.
    ///
    /// A completed line wins even when the move also fills the board.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] if the game is over, it is not `player`'s
    /// turn, or `position` is not legal. `self` is left unchanged.
    #[instrument(skip(self))]
    pub fn advance(&self, player: Player, position: Position) -> Result<Self, Rejection> {
        let (active, board, legal) = match self {
            Self::ToMove {
                player,
                board,
                legal,
            } => (*player, board, legal),
            Self::Won { .. } => return Err(Rejection::GameOver),
            Self::Tied { .. } => return Err(Rejection::GameOver),
        };

        if player != active {
            return Err(Rejection::WrongPlayer { player, active });
        }
        if !legal.contains(&position) {
            return Err(Rejection::IllegalPosition(position));
        }

        let board = board.with_move(position, player);

        if rules::is_won_by(&board, player) {
            debug!(%player, "Line completed");
            return Ok(Self::Won { player, board });
        }

        if rules::is_tied(&board) {
            debug!("Board full without a line");
            return Ok(Self::Tied { board });
        }

        Ok(Self::ToMove {
            player: player.opponent(),
            legal: board.remaining_positions(),
            board,
        })
    }
}

impl std::fmt::Display for GameOutcomeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToMove { player, .. } => write!(f, "{} to move", player),
            Self::Won { player, .. } => write!(f, "{} wins!", player),
            Self::Tied { .. } => write!(f, "It's a tie!"),
        }
    }
}
