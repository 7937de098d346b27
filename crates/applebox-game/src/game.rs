use applebox_core::{Board, ConfigError, GameConfig, Point, Rect};
use applebox_generator::{BoardGenerator, BoardSeed};

use crate::{CellLayout, Clear, GameEvent, GameOverReason, GameSnapshot, Phase};

/// Errors returned when creating or seeding a [`Game`].
///
/// Play itself never fails: events that make no sense in the current state are
/// ignored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The configuration cannot be played.
    #[display("invalid configuration: {_0}")]
    #[from]
    Config(ConfigError),
    /// A supplied board does not have the configured shape.
    #[display("board is {cols}x{rows}, expected {expected_cols}x{expected_rows}")]
    BoardShapeMismatch {
        /// Columns of the supplied board.
        cols: usize,
        /// Rows of the supplied board.
        rows: usize,
        /// Configured columns.
        expected_cols: usize,
        /// Configured rows.
        expected_rows: usize,
    },
    /// A layout draws a different grid than the configured one.
    #[display("layout is {cols}x{rows}, expected {expected_cols}x{expected_rows}")]
    LayoutShapeMismatch {
        /// Columns drawn by the layout.
        cols: usize,
        /// Rows drawn by the layout.
        rows: usize,
        /// Configured columns.
        expected_cols: usize,
        /// Configured rows.
        expected_rows: usize,
    },
}

/// The two screen-space points of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Where the drag started.
    pub start: Point,
    /// Where the pointer is now.
    pub end: Point,
}

impl Selection {
    /// Normalized rectangle spanned by the drag.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}

/// An applebox game session.
///
/// The game is a state machine driven by the collaborator that owns input and
/// time:
///
/// - [`start_game`](Self::start_game) generates a fresh board and starts the
///   countdown, replacing any previous game.
/// - [`update_selection`](Self::update_selection) is called on pointer down and
///   every pointer move with the drag's corners.
/// - [`end_selection`](Self::end_selection) is called on pointer up (or when
///   the pointer leaves the board) and clears the selected cells if their sum
///   hits the target.
/// - [`tick`](Self::tick) is called once per second while
///   [`timer_armed`](Self::timer_armed) holds.
/// - [`check_game_over`](Self::check_game_over) is called after state changes.
///
/// # Example
///
/// ```
/// use applebox_core::{GameConfig, Point};
/// use applebox_game::{Game, GridLayout};
///
/// let config = GameConfig {
///     cols: 2,
///     rows: 2,
///     total_cells: 4,
///     ..GameConfig::DEFAULT
/// };
/// let layout = GridLayout::new(2, 2, 22.0, 22.0, 2.0);
/// let mut game = Game::new(config)?;
/// game.start_with_board("46/35".parse().unwrap())?;
///
/// // Drag across the top row: 4 + 6 = 10
/// game.update_selection(Point::new(2.0, 2.0), Point::new(20.0, 8.0), &layout);
/// assert_eq!(game.snapshot().selected_sum, 10);
///
/// let event = game.end_selection();
/// assert!(event.is_some());
/// assert_eq!(game.score(), 1);
/// # Ok::<(), applebox_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    generator: BoardGenerator,
    board: Option<Board>,
    seed: Option<BoardSeed>,
    selected: Vec<bool>,
    selection: Option<Selection>,
    selected_sum: u32,
    score: u32,
    time_remaining: u32,
    game_over: Option<GameOverReason>,
}

impl Game {
    /// Creates an engine for `config` with no game started.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if the configuration is invalid or cannot
    /// produce a clearable board.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let generator = BoardGenerator::new(config)?;
        Ok(Self {
            config,
            generator,
            board: None,
            seed: None,
            selected: Vec::new(),
            selection: None,
            selected_sum: 0,
            score: 0,
            time_remaining: 0,
            game_over: None,
        })
    }

    /// Returns the configuration of this engine.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Starts a new game on a freshly generated random board.
    pub fn start_game(&mut self) -> GameEvent {
        self.start_game_with_seed(BoardSeed::random())
    }

    /// Starts a new game on the board generated from `seed`.
    pub fn start_game_with_seed(&mut self, seed: BoardSeed) -> GameEvent {
        let generated = self.generator.generate_with_seed(seed);
        self.reset(generated.board, Some(seed))
    }

    /// Starts a new game on a supplied board.
    ///
    /// Cells already cleared on `board` stay cleared.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardShapeMismatch`] if `board` does not have the
    /// configured number of columns and rows.
    pub fn start_with_board(&mut self, board: Board) -> Result<GameEvent, GameError> {
        if board.cols() != self.config.cols || board.rows() != self.config.rows {
            return Err(GameError::BoardShapeMismatch {
                cols: board.cols(),
                rows: board.rows(),
                expected_cols: self.config.cols,
                expected_rows: self.config.rows,
            });
        }
        Ok(self.reset(board, None))
    }

    fn reset(&mut self, board: Board, seed: Option<BoardSeed>) -> GameEvent {
        log::debug!(
            "starting game: seed={}, duration={}s",
            seed.map_or_else(|| "-".to_owned(), |seed| seed.to_string()),
            self.config.duration_secs
        );
        self.selected = vec![false; board.len()];
        self.board = Some(board);
        self.seed = seed;
        self.selection = None;
        self.selected_sum = 0;
        self.score = 0;
        self.time_remaining = self.config.duration_secs;
        self.game_over = None;
        GameEvent::Started { seed }
    }

    /// Returns the current board, `None` before the first game.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Returns the number of matches cleared this game.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the seconds left on the countdown.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Returns `true` once a game has been started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.board.is_some()
    }

    /// Returns why the game ended, if it has.
    #[must_use]
    pub fn game_over(&self) -> Option<GameOverReason> {
        self.game_over
    }

    /// Returns `true` while the game accepts selections.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_started() && self.game_over.is_none() && self.time_remaining > 0
    }

    /// Returns `true` while the collaborator should keep its one-second timer
    /// running.
    #[must_use]
    pub fn timer_armed(&self) -> bool {
        self.is_playing()
    }

    /// Returns the coarse phase of the game.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.snapshot().phase()
    }

    /// Returns a read-only view of the whole state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            board: self.board.as_ref(),
            selected: &self.selected,
            selection: self.selection,
            selected_sum: self.selected_sum,
            target_sum: self.config.target_sum,
            score: self.score,
            time_remaining: self.time_remaining,
            is_started: self.is_started(),
            game_over: self.game_over,
            seed: self.seed,
        }
    }

    /// Updates the drag to span `start`..`end` and recomputes which cells it
    /// selects.
    ///
    /// A present cell is selected when its rectangle in `layout` intersects the
    /// drag rectangle. All highlight flags are recomputed from scratch, so
    /// repeating a call with the same arguments changes nothing.
    ///
    /// Ignored unless a game is being played.
    pub fn update_selection<L>(&mut self, start: Point, end: Point, layout: &L)
    where
        L: CellLayout + ?Sized,
    {
        if !self.is_playing() {
            return;
        }
        let Some(board) = &self.board else {
            return;
        };

        let selection = Selection { start, end };
        let rect = selection.rect();
        let mut sum = 0;
        self.selected.fill(false);
        for (index, cell) in board.cells().iter().enumerate() {
            let Some(value) = cell.present_value() else {
                continue;
            };
            if layout
                .cell_rect(index)
                .is_some_and(|cell_rect| cell_rect.intersects(&rect))
            {
                self.selected[index] = true;
                sum += u32::from(value);
            }
        }
        self.selection = Some(selection);
        self.selected_sum = sum;
        log::trace!("selection {rect:?}: sum={sum}");
    }

    /// Ends the current drag.
    ///
    /// If the selected cells sum exactly to the target, they are cleared and the
    /// score goes up by one, however many cells matched. The selection is
    /// dropped either way.
    pub fn end_selection(&mut self) -> Option<GameEvent> {
        let event = self.resolve_selection();
        self.clear_selection();
        event
    }

    fn resolve_selection(&mut self) -> Option<GameEvent> {
        if !self.is_playing() || self.selected_sum != self.config.target_sum {
            return None;
        }
        let board = self.board.as_mut()?;
        let cells = self
            .selected
            .iter()
            .enumerate()
            .filter(|&(index, &selected)| selected && board[index].is_present())
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        if cells.is_empty() {
            return None;
        }
        for &index in &cells {
            board.clear(index);
        }
        self.score += 1;
        log::debug!(
            "cleared {} cells, score={}, remaining={}",
            cells.len(),
            self.score,
            board.present_count()
        );
        Some(GameEvent::Cleared(Clear {
            cells,
            score: self.score,
        }))
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.selected.fill(false);
        self.selected_sum = 0;
    }

    /// Advances the countdown by one second.
    ///
    /// Reaching zero ends the game with [`GameOverReason::TimeUp`]. Ignored
    /// unless the timer is armed.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if !self.timer_armed() {
            return None;
        }
        self.time_remaining -= 1;
        (self.time_remaining == 0).then(|| self.finish(GameOverReason::TimeUp))
    }

    /// Ends the game if the countdown ran out, or if every cell has been
    /// cleared by at least one match.
    pub fn check_game_over(&mut self) -> Option<GameEvent> {
        if self.game_over.is_some() {
            return None;
        }
        let cleared = self.board.as_ref()?.is_cleared();
        if self.time_remaining == 0 {
            Some(self.finish(GameOverReason::TimeUp))
        } else if cleared && self.score > 0 {
            Some(self.finish(GameOverReason::BoardCleared))
        } else {
            None
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> GameEvent {
        log::debug!("game over: {reason:?}, score={}", self.score);
        self.game_over = Some(reason);
        self.clear_selection();
        GameEvent::GameOver(reason)
    }
}
