//! Non-owning observer registry.
//!
//! The game never keeps an observer alive. Observers are registered through
//! an `Rc` handle, stored as `Weak`, and forgotten the first time a
//! notification finds them dropped.

use crate::game::Game;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use tracing::{instrument, trace};

/// Receives a call after every state change of a [`Game`].
///
/// Implementations re-read whatever they need from the game
/// ([`Game::current_state`], [`Game::current_board`]). The game is borrowed
/// immutably for the duration of the call, so observers cannot move.
pub trait GameObserver {
    /// Called once per accepted move or reset.
    fn game_state_changed(&self, game: &Game);
}

/// Identity of a registered observer.
///
/// Derived from the allocation an `Rc` points to, so registering the same
/// handle (or a clone of it) twice yields the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(usize);

impl ObserverId {
    /// Identity of the allocation behind `observer`.
    pub fn of<O: ?Sized>(observer: &Rc<O>) -> Self {
        Self(Rc::as_ptr(observer).cast::<()>() as usize)
    }
}

/// Observer identities mapped to weak handles.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: BTreeMap<ObserverId, Weak<dyn GameObserver>>,
}

impl ObserverRegistry {
    /// Registers `observer`, replacing any entry with the same identity.
    #[instrument(skip_all)]
    pub(crate) fn add<O: GameObserver + 'static>(&mut self, observer: &Rc<O>) -> ObserverId {
        let id = ObserverId::of(observer);
        let handle: Weak<O> = Rc::downgrade(observer);
        self.observers.insert(id, handle);
        trace!(?id, count = self.observers.len(), "Observer registered");
        id
    }

    /// Unregisters by identity. Returns false if it was not registered.
    #[instrument(skip(self))]
    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Notifies every live observer and returns the ids of dead ones.
    pub(crate) fn notify(&self, game: &Game) -> Vec<ObserverId> {
        let mut dead = Vec::new();
        for (id, handle) in &self.observers {
            match handle.upgrade() {
                Some(observer) => observer.game_state_changed(game),
                None => dead.push(*id),
            }
        }
        dead
    }

    /// Drops entries found dead by [`notify`](Self::notify).
    pub(crate) fn prune(&mut self, dead: &[ObserverId]) {
        for id in dead {
            self.observers.remove(id);
        }
        if !dead.is_empty() {
            trace!(pruned = dead.len(), "Dropped observers pruned");
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("count", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Tally(Cell<usize>);

    impl GameObserver for Tally {
        fn game_state_changed(&self, _game: &Game) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_concrete_observer_stored_weakly() {
        let mut registry = ObserverRegistry::default();
        let tally = Rc::new(Tally::default());
        let id = registry.add(&tally);

        assert_eq!(id, ObserverId::of(&tally));
        assert_eq!(Rc::strong_count(&tally), 1);
        assert_eq!(Rc::weak_count(&tally), 1);

        let game = Game::new_game();
        assert!(registry.notify(&game).is_empty());
        assert_eq!(tally.0.get(), 1);

        drop(tally);
        let dead = registry.notify(&game);
        assert_eq!(dead, vec![id]);
        registry.prune(&dead);
        assert_eq!(registry.len(), 0);
    }
}
