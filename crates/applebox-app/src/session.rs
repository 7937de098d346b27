use applebox_core::{Board, GameConfig, Point};
use applebox_game::{Clear, Game, GameError, GameEvent, GameOverReason, GameSnapshot, GridLayout};
use applebox_generator::BoardSeed;

/// Pointer and clock input forwarded by a front end.
///
/// Pointer positions are in board coordinates, with the board's top-left
/// corner at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// The player asked for a new game.
    StartGame {
        /// Seed to generate the board from, or `None` for a random one.
        seed: Option<BoardSeed>,
    },
    /// A button was pressed over the board.
    PointerDown(Point),
    /// The pointer moved.
    PointerMove(Point),
    /// The button was released.
    PointerUp,
    /// The pointer left the board.
    PointerLeave,
    /// One second elapsed on the armed timer.
    Tick,
}

/// Work a front end must do after an input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Effect {
    /// Start the background music, rewinding it if it already played.
    PlayMusic {
        /// The music played before and must start from the beginning.
        restart: bool,
    },
    /// Pause the background music.
    StopMusic,
    /// Start (or restart) the one-second timer.
    ArmTimer,
    /// Stop the one-second timer.
    DisarmTimer,
    /// A selection matched; animate its cells away.
    Cleared(Clear),
}

/// Message shown when a game ends.
#[must_use]
pub fn game_over_message(reason: GameOverReason) -> &'static str {
    match reason {
        GameOverReason::TimeUp => "Time's up!",
        GameOverReason::BoardCleared => "Game Over! All apples cleared!",
    }
}

/// A game as a front end sees it.
///
/// The session owns the engine and the board layout, and reduces each
/// [`Input`] the same way: forward it to the engine, check whether the game
/// ended, then translate what happened into [`Effect`]s.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    layout: GridLayout,
    music_started: bool,
}

impl Session {
    /// Creates a session with the default board layout for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if `config` cannot be played.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let layout = GridLayout::for_config(&config);
        Self::with_layout(config, layout)
    }

    /// Creates a session that draws the board with `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if `config` cannot be played, or
    /// [`GameError::LayoutShapeMismatch`] if `layout` draws a different grid.
    pub fn with_layout(config: GameConfig, layout: GridLayout) -> Result<Self, GameError> {
        if layout.cols() != config.cols || layout.rows() != config.rows {
            return Err(GameError::LayoutShapeMismatch {
                cols: layout.cols(),
                rows: layout.rows(),
                expected_cols: config.cols,
                expected_rows: config.rows,
            });
        }
        Ok(Self {
            game: Game::new(config)?,
            layout,
            music_started: false,
        })
    }

    /// Returns the engine.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the board layout.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Returns the state to render.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        self.game.snapshot()
    }

    /// Applies one input and returns the effects it causes, in order.
    pub fn handle(&mut self, input: Input) -> Vec<Effect> {
        let was_armed = self.game.timer_armed();
        let event = match input {
            Input::StartGame { seed: Some(seed) } => Some(self.game.start_game_with_seed(seed)),
            Input::StartGame { seed: None } => Some(self.game.start_game()),
            Input::PointerDown(point) => {
                self.game.update_selection(point, point, &self.layout);
                None
            }
            Input::PointerMove(point) => {
                if let Some(selection) = self.game.snapshot().selection {
                    self.game
                        .update_selection(selection.start, point, &self.layout);
                }
                None
            }
            Input::PointerUp | Input::PointerLeave => self.game.end_selection(),
            Input::Tick => self.game.tick(),
        };
        self.effects(was_armed, event)
    }

    /// Starts a new game on a supplied board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardShapeMismatch`] if `board` does not fit the
    /// configured grid.
    pub fn start_with_board(&mut self, board: Board) -> Result<Vec<Effect>, GameError> {
        let was_armed = self.game.timer_armed();
        let event = self.game.start_with_board(board)?;
        Ok(self.effects(was_armed, Some(event)))
    }

    fn effects(&mut self, was_armed: bool, event: Option<GameEvent>) -> Vec<Effect> {
        let restarted = event.as_ref().is_some_and(GameEvent::is_started);
        let mut effects = Vec::new();

        for event in event.into_iter().chain(self.game.check_game_over()) {
            match event {
                GameEvent::Started { .. } => {
                    effects.push(Effect::PlayMusic {
                        restart: self.music_started,
                    });
                    self.music_started = true;
                }
                GameEvent::Cleared(clear) => effects.push(Effect::Cleared(clear)),
                GameEvent::GameOver(reason) => {
                    log::info!(
                        "{} score={}",
                        game_over_message(reason),
                        self.game.score()
                    );
                    effects.push(Effect::StopMusic);
                }
            }
        }

        match (was_armed, self.game.timer_armed()) {
            (false, true) => effects.push(Effect::ArmTimer),
            (true, true) if restarted => effects.push(Effect::ArmTimer),
            (true, false) => effects.push(Effect::DisarmTimer),
            _ => {}
        }
        effects
    }
}
