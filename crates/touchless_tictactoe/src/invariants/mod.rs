//! First-class invariants for a running game.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. [`Game`](crate::Game) checks them in debug builds; they are also
//! usable on their own, e.g. against a game rebuilt with
//! [`Game::replay`](crate::Game::replay).

pub mod alternating_turn;
pub mod history_consistent;
pub mod single_winner;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use single_winner::SingleWinnerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ];

        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game invariants as a composable set.
pub type TicTacToeInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    SingleWinnerInvariant,
);
