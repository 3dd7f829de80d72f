//! Winning lines: three rows, three columns and two diagonals.

use crate::position::{Horizontal, Position, Vertical};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::IntoEnumIterator;

/// Three positions that win the game when one player holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

static LINES: LazyLock<Vec<Line>> = LazyLock::new(|| {
    let rows = Vertical::iter().filter_map(|vertical| {
        Line::through(Horizontal::iter().map(move |horizontal| Position::new(horizontal, vertical)))
    });
    let columns = Horizontal::iter().filter_map(|horizontal| {
        Line::through(Vertical::iter().map(move |vertical| Position::new(horizontal, vertical)))
    });
    let diagonals = [
        Line::through(
            Horizontal::iter()
                .zip(Vertical::iter())
                .map(|(horizontal, vertical)| Position::new(horizontal, vertical)),
        ),
        Line::through(
            Horizontal::iter()
                .rev()
                .zip(Vertical::iter())
                .map(|(horizontal, vertical)| Position::new(horizontal, vertical)),
        ),
    ];

    rows.chain(columns).chain(diagonals.into_iter().flatten()).collect()
});

impl Line {
    /// Takes the first three positions of an axis walk.
    fn through(mut positions: impl Iterator<Item = Position>) -> Option<Self> {
        Some(Self([positions.next()?, positions.next()?, positions.next()?]))
    }

    /// The three positions, in walk order.
    pub fn positions(&self) -> &[Position; 3] {
        &self.0
    }

    /// All eight winning lines. Computed once on first use.
    pub fn all() -> &'static [Line] {
        &LINES
    }
}
