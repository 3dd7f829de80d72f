//! Board geometry: axis coordinates and the nine positions they span.

use crate::error::ParsePositionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Column of a position, left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Horizontal {
    /// Left column.
    Left,
    /// Middle column.
    Center,
    /// Right column.
    Right,
}

/// Row of a position, top to bottom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Vertical {
    /// Top row.
    Top,
    /// Middle row.
    Center,
    /// Bottom row.
    Bottom,
}

impl Horizontal {
    fn offset(self) -> usize {
        match self {
            Horizontal::Left => 0,
            Horizontal::Center => 1,
            Horizontal::Right => 2,
        }
    }
}

impl Vertical {
    fn offset(self) -> usize {
        match self {
            Vertical::Top => 0,
            Vertical::Center => 1,
            Vertical::Bottom => 2,
        }
    }
}

/// A position on the board: one column crossed with one row.
///
/// Equality is structural, so two positions are the same square exactly
/// when both axes agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    horizontal: Horizontal,
    vertical: Vertical,
}

impl Position {
    /// Top-left corner.
    pub const TOP_LEFT: Position = Position::new(Horizontal::Left, Vertical::Top);
    /// Top edge, middle column.
    pub const TOP_CENTER: Position = Position::new(Horizontal::Center, Vertical::Top);
    /// Top-right corner.
    pub const TOP_RIGHT: Position = Position::new(Horizontal::Right, Vertical::Top);
    /// Left edge, middle row.
    pub const CENTER_LEFT: Position = Position::new(Horizontal::Left, Vertical::Center);
    /// The center square.
    pub const CENTER: Position = Position::new(Horizontal::Center, Vertical::Center);
    /// Right edge, middle row.
    pub const CENTER_RIGHT: Position = Position::new(Horizontal::Right, Vertical::Center);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Position = Position::new(Horizontal::Left, Vertical::Bottom);
    /// Bottom edge, middle column.
    pub const BOTTOM_CENTER: Position = Position::new(Horizontal::Center, Vertical::Bottom);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Position = Position::new(Horizontal::Right, Vertical::Bottom);

    /// Creates a position from its two axis coordinates.
    pub const fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns the column.
    pub fn horizontal(self) -> Horizontal {
        self.horizontal
    }

    /// Returns the row.
    pub fn vertical(self) -> Vertical {
        self.vertical
    }

    /// All nine positions, row by row from the top-left corner.
    ///
    /// The order is fixed and identical on every call; boards store their
    /// cells in this order.
    #[instrument]
    pub fn all() -> Vec<Position> {
        Vertical::iter()
            .flat_map(|vertical| {
                Horizontal::iter().map(move |horizontal| Position::new(horizontal, vertical))
            })
            .collect()
    }

    /// Grid number 1-9, counted row by row from the top-left corner.
    pub fn grid_number(self) -> usize {
        self.vertical.offset() * 3 + self.horizontal.offset() + 1
    }

    /// Looks up a position by its grid number (1-9).
    pub fn from_grid_number(number: usize) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|position| position.grid_number() == number)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match (self.vertical, self.horizontal) {
            (Vertical::Top, Horizontal::Left) => "Top-left",
            (Vertical::Top, Horizontal::Center) => "Top-center",
            (Vertical::Top, Horizontal::Right) => "Top-right",
            (Vertical::Center, Horizontal::Left) => "Center-left",
            (Vertical::Center, Horizontal::Center) => "Center",
            (Vertical::Center, Horizontal::Right) => "Center-right",
            (Vertical::Bottom, Horizontal::Left) => "Bottom-left",
            (Vertical::Bottom, Horizontal::Center) => "Bottom-center",
            (Vertical::Bottom, Horizontal::Right) => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses a grid number (1-9) or a label.
    ///
    /// Labels match case-insensitively, and spaces or underscores may stand
    /// in for the hyphen ("top left", "BOTTOM_RIGHT").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<usize>() {
            return Self::from_grid_number(number)
                .ok_or_else(|| ParsePositionError::new(trimmed));
        }

        let wanted = trimmed.to_lowercase().replace([' ', '_'], "-");
        Self::all()
            .into_iter()
            .find(|position| position.label().to_lowercase() == wanted)
            .ok_or_else(|| ParsePositionError::new(trimmed))
    }
}
