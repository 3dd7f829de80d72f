//! The game: current state, round history and observers.

use crate::action::Move;
use crate::config::{GameConfig, TerminalInput};
use crate::observer::{GameObserver, ObserverId, ObserverRegistry};
use crate::position::Position;
use crate::state::{GameOutcomeState, Rejection};
use crate::types::{Board, Player};
use derive_more::{Display, Error};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// What [`Game::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played and observers were notified.
    Accepted,
    /// The game was over, so a new round started. Observers were notified.
    Reset,
    /// Nothing changed and nobody was notified.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the game state changed.
    pub fn changed_state(&self) -> bool {
        match self {
            MoveOutcome::Accepted => true,
            MoveOutcome::Reset => true,
            MoveOutcome::Ignored(_) => false,
        }
    }
}

/// A recorded move that [`Game::replay`] could not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move {} ({}) rejected: {}", index, action, rejection)]
pub struct ReplayError {
    /// Index of the move within the replayed list.
    pub index: usize,
    /// The move itself.
    pub action: Move,
    /// Why it was rejected.
    pub rejection: Rejection,
}

/// Tic-tac-toe game engine.
///
/// Owns the current [`GameOutcomeState`] and changes it only through
/// [`apply_move`](Self::apply_move) and [`reset`](Self::reset). Every change
/// is announced synchronously to the registered observers before the
/// mutating call returns.
///
/// The game is single-threaded; observers are held through `Rc`/`Weak`, so
/// a `Game` cannot be sent across threads.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    state: GameOutcomeState,
    history: Vec<Move>,
    observers: ObserverRegistry,
}

impl Game {
    /// Creates a game with the default configuration.
    #[instrument]
    pub fn new_game() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a game with the given configuration.
    #[instrument]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameOutcomeState::start(*config.first_player()),
            config,
            history: Vec::new(),
            observers: ObserverRegistry::default(),
        }
    }

    /// Rebuilds a game by applying `moves` to a fresh board.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplayError`] for the first move that would be rejected,
    /// including any move after the game has ended.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(config: GameConfig, moves: &[Move]) -> Result<Self, ReplayError> {
        let mut game = Self::with_config(config);
        for (index, action) in moves.iter().enumerate() {
            game.state = game
                .state
                .advance(action.player, action.position)
                .map_err(|rejection| ReplayError {
                    index,
                    action: *action,
                    rejection,
                })?;
            game.history.push(*action);
        }
        debug!(state = %game.state, "Replay complete");
        Ok(game)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the current board.
    pub fn current_board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the current state.
    pub fn current_state(&self) -> &GameOutcomeState {
        &self.state
    }

    /// Moves accepted since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Positions `player` may take now; empty when it is not their turn or
    /// the game is over.
    #[instrument(skip(self))]
    pub fn available_moves(&self, player: Player) -> Vec<Position> {
        self.state.legal_positions(player).to_vec()
    }

    /// Plays `player` at `position`.
    ///
    /// Illegal input is ignored rather than treated as an error: a move out
    /// of turn, or onto a position that is not available, leaves the game
    /// untouched. While the game is won or tied the configured
    /// [`TerminalInput`] decides between starting a new round and ignoring
    /// the input.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn apply_move(&mut self, player: Player, position: Position) -> MoveOutcome {
        match self.state.advance(player, position) {
            Ok(next) => {
                self.history.push(Move::new(player, position));
                self.set_state(next);
                match &self.state {
                    GameOutcomeState::ToMove { .. } => debug!("Move accepted"),
                    GameOutcomeState::Won { player, .. } => info!(winner = %player, "Game won"),
                    GameOutcomeState::Tied { .. } => info!("Game tied"),
                }
                #[cfg(debug_assertions)]
                self.check_invariants();
                MoveOutcome::Accepted
            }
            Err(Rejection::GameOver) => match self.config.terminal_input() {
                TerminalInput::Reset => {
                    debug!("Input after game over, starting new round");
                    self.reset();
                    MoveOutcome::Reset
                }
                TerminalInput::Ignore => {
                    debug!("Input after game over ignored");
                    MoveOutcome::Ignored(Rejection::GameOver)
                }
            },
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                MoveOutcome::Ignored(rejection)
            }
        }
    }

    /// Starts a new round on an empty board and notifies observers.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.clear();
        self.set_state(GameOutcomeState::start(*self.config.first_player()));
    }

    /// Registers `observer` without taking ownership of it.
    ///
    /// Registering the same observer again is a no-op that returns the same
    /// id.
    pub fn add_observer<O: GameObserver + 'static>(&mut self, observer: &Rc<O>) -> ObserverId {
        self.observers.add(observer)
    }

    /// Unregisters `observer`. Returns false if it was not registered.
    pub fn remove_observer<O: GameObserver + ?Sized>(&mut self, observer: &Rc<O>) -> bool {
        self.observers.remove(ObserverId::of(observer))
    }

    /// Unregisters the observer with the given id.
    pub fn remove_observer_by_id(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Number of registered observers, including dropped ones not yet pruned.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn set_state(&mut self, state: GameOutcomeState) {
        self.state = state;
        let dead = self.observers.notify(self);
        self.observers.prune(&dead);
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::invariants::{InvariantSet, TicTacToeInvariants};

        if let Err(violations) = TicTacToeInvariants::check_all(self) {
            for violation in &violations {
                tracing::error!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Invariants violated: {:?}", violations);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new_game()
    }
}
