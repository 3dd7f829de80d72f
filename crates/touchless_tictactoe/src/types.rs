//! Core domain types: players, cells and the board.

use crate::error::BoardError;
use crate::position::{Horizontal, Position, Vertical};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, Default,
)]
pub enum Player {
    /// The human player (moves first by default).
    #[default]
    First,
    /// The machine opponent.
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Name shown in status lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Player::First => "User",
            Player::Second => "AI",
        }
    }

    /// Mark drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    /// Nobody has played here.
    Empty,
    /// Taken by a player.
    Played(Player),
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    occupancy: Occupancy,
}

impl Cell {
    /// An empty cell at the given position.
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            occupancy: Occupancy::Empty,
        }
    }

    /// A cell taken by `player`.
    pub fn played(position: Position, player: Player) -> Self {
        Self {
            position,
            occupancy: Occupancy::Played(player),
        }
    }

    /// Where the cell sits.
    pub fn position(&self) -> Position {
        self.position
    }

    /// What the cell holds.
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Returns true if `player` has played here.
    pub fn is_played_by(&self, player: Player) -> bool {
        self.occupancy == Occupancy::Played(player)
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(&self) -> bool {
        self.occupancy == Occupancy::Empty
    }
}

/// 3x3 board: exactly one cell per position, in [`Position::all`] order.
///
/// Boards are values. Playing a move produces a new board and leaves the
/// old one untouched. Deserialization checks the one-cell-per-position
/// invariant and restores the canonical cell order, so every `Board` in
/// memory is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// The canonical start state: nine empty cells.
    #[instrument]
    pub fn empty() -> Self {
        Self {
            cells: Position::all().into_iter().map(Cell::empty).collect(),
        }
    }

    /// All cells in stored order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PositionNotFound`] if the board lacks the
    /// position. Unreachable in practice: [`Board::empty`], [`Board::with_move`]
    /// and deserialization all produce exactly one cell per position.
    pub fn cell_at(&self, position: Position) -> Result<Cell, BoardError> {
        self.cells
            .iter()
            .find(|cell| cell.position == position)
            .copied()
            .ok_or(BoardError::PositionNotFound(position))
    }

    /// Returns a copy of this board with `player` at `position`.
    ///
    /// Legality is not checked here; an occupied cell is overwritten.
    #[instrument(skip(self))]
    pub fn with_move(&self, position: Position, player: Player) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|cell| {
                if cell.position == position {
                    Cell::played(position, player)
                } else {
                    *cell
                }
            })
            .collect();
        Self { cells }
    }

    /// Positions still empty, in stored order.
    pub fn remaining_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(|cell| cell.position)
            .collect()
    }

    /// Number of played cells.
    pub fn played_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Formats the board as a 3x3 text grid.
    ///
    /// Played cells show the player's symbol, empty cells their grid number.
    pub fn render(&self) -> String {
        let rows: Vec<String> = Vertical::iter()
            .map(|vertical| {
                Horizontal::iter()
                    .map(|horizontal| {
                        let position = Position::new(horizontal, vertical);
                        match self.cell_at(position).map(|cell| cell.occupancy) {
                            Ok(Occupancy::Played(player)) => player.symbol().to_string(),
                            Ok(Occupancy::Empty) => position.grid_number().to_string(),
                            Err(_) => "?".to_string(),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n-+-+-\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        if cells.len() != 9 {
            return Err(BoardError::WrongCellCount(cells.len()));
        }
        let mut seen = HashSet::new();
        for cell in &cells {
            if !seen.insert(cell.position) {
                return Err(BoardError::DuplicatePosition(cell.position));
            }
        }
        let cells = Position::all()
            .into_iter()
            .map(|position| {
                cells
                    .iter()
                    .find(|cell| cell.position == position)
                    .copied()
                    .ok_or(BoardError::PositionNotFound(position))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}
