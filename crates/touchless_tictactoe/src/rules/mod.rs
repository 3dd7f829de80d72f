//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing about
//! turns or history, which keeps them usable from the state machine and
//! from the invariant checks alike.

pub mod tie;
pub mod win;

pub use tie::is_tied;
pub use win::{is_won_by, winner};
