//! Line-oriented game loop and text renderer.

use crate::config::AppConfig;
use crate::opponent::pick_move;
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::rc::Rc;
use touchless_tictactoe::{
    Game, GameObserver, GameOutcomeState, MoveOutcome, ParsePositionError, Player, Position,
    Rejection,
};
use tracing::{debug, info, instrument, warn};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Take a position.
    Play(Position),
    /// Start a new round.
    NewRound,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses `new`, `quit`/`exit`, or a position (label or grid number).
    pub fn parse(line: &str) -> Result<Self, ParsePositionError> {
        match line.trim().to_lowercase().as_str() {
            "new" | "reset" => Ok(Command::NewRound),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => line.parse::<Position>().map(Command::Play),
        }
    }
}

/// Text renderer. Redraws the board whenever the game changes.
pub struct ConsoleView<W: Write> {
    output: RefCell<W>,
    names: [String; 2],
}

impl<W: Write> ConsoleView<W> {
    /// Creates a view writing to `output`, naming players per `config`.
    pub fn new(output: W, config: &AppConfig) -> Self {
        Self {
            output: RefCell::new(output),
            names: [
                config.name_of(Player::First).to_string(),
                config.name_of(Player::Second).to_string(),
            ],
        }
    }

    fn name(&self, player: Player) -> &str {
        match player {
            Player::First => &self.names[0],
            Player::Second => &self.names[1],
        }
    }

    /// Status line for a state.
    pub fn status(&self, state: &GameOutcomeState) -> String {
        match state {
            GameOutcomeState::ToMove { player, .. } => format!("{} to move", self.name(*player)),
            GameOutcomeState::Won { player, .. } => format!("{} wins!", self.name(*player)),
            GameOutcomeState::Tied { .. } => "It's a tie!".to_string(),
        }
    }

    /// Why a move was refused, using the configured names.
    pub fn explain(&self, rejection: Rejection) -> String {
        match rejection {
            Rejection::GameOver => rejection.to_string(),
            Rejection::WrongPlayer { player, active } => format!(
                "It's not {}'s turn ({} to move)",
                self.name(player),
                self.name(active)
            ),
            Rejection::IllegalPosition(position) => format!("{} is not available", position),
        }
    }

    /// Writes one line of text.
    pub fn say(&self, message: impl Display) {
        let mut output = self.output.borrow_mut();
        if let Err(e) = writeln!(output, "{}", message).and_then(|_| output.flush()) {
            warn!(error = %e, "Failed to write to console");
        }
    }

    /// Draws the board and the status line.
    pub fn draw(&self, game: &Game) {
        self.say(format!(
            "\n{}\n{}",
            game.current_board().render(),
            self.status(game.current_state())
        ));
    }

    /// Returns the underlying writer.
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<W: Write> GameObserver for ConsoleView<W> {
    fn game_state_changed(&self, game: &Game) {
        self.draw(game);
    }
}

/// A human at the keyboard against the first-legal-move opponent.
///
/// The human always plays [`Player::First`]; the configured first player
/// decides who opens each round.
pub struct ConsoleSession<W: Write + 'static> {
    game: Game,
    view: Rc<ConsoleView<W>>,
}

impl<W: Write + 'static> ConsoleSession<W> {
    /// Creates a session rendering to `output`.
    #[instrument(skip(output))]
    pub fn new(config: &AppConfig, output: W) -> Self {
        let mut game = Game::with_config(*config.game());
        let view = Rc::new(ConsoleView::new(output, config));
        game.add_observer(&view);
        Self { game, view }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns any error from reading `input`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead>(&mut self, input: R) -> std::io::Result<()> {
        self.view.draw(&self.game);
        self.machine_turn();

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::NewRound) => {
                    self.game.reset();
                    self.machine_turn();
                }
                Ok(Command::Play(position)) => self.human_turn(position),
                Err(e) => self.view.say(e),
            }
        }

        info!(moves = self.game.history().len(), "Session ended");
        Ok(())
    }

    fn human_turn(&mut self, position: Position) {
        match self.game.apply_move(Player::First, position) {
            MoveOutcome::Accepted => self.machine_turn(),
            MoveOutcome::Reset => {
                debug!("Round restarted by input after game over");
                self.machine_turn();
            }
            MoveOutcome::Ignored(rejection) => self.view.say(self.view.explain(rejection)),
        }
    }

    fn machine_turn(&mut self) {
        if let Some(position) = pick_move(&self.game, Player::Second) {
            self.view
                .say(format!("{} plays {}", self.view.name(Player::Second), position));
            self.game.apply_move(Player::Second, position);
        }
    }

    /// Ends the session and returns the writer.
    ///
    /// The game only holds a weak handle to the view, so the writer can be
    /// recovered once the session is dropped.
    pub fn into_output(self) -> Option<W> {
        let Self { game, view } = self;
        drop(game);
        Rc::try_unwrap(view).ok().map(ConsoleView::into_output)
    }
}
