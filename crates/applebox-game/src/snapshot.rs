use applebox_core::{Board, Rect};
use applebox_generator::BoardSeed;

use crate::{GameOverReason, Phase, Selection};

/// Read-only view of the whole game state, borrowed from a [`Game`].
///
/// This is everything a renderer needs: cells and their transient selection
/// highlight, the drag rectangle with its running sum, score and countdown.
///
/// [`Game`]: crate::Game
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    /// Current board, `None` before the first game.
    pub board: Option<&'a Board>,
    /// Per-cell highlight flags, parallel to the board's cells.
    pub selected: &'a [bool],
    /// Drag in progress, if any.
    pub selection: Option<Selection>,
    /// Sum of the highlighted cells.
    pub selected_sum: u32,
    /// Sum that clears a selection.
    pub target_sum: u32,
    /// Matches cleared this game.
    pub score: u32,
    /// Seconds left on the countdown.
    pub time_remaining: u32,
    /// A game has been started.
    pub is_started: bool,
    /// Why the game ended, once it has.
    pub game_over: Option<GameOverReason>,
    /// Seed the current board was generated from.
    pub seed: Option<BoardSeed>,
}

impl GameSnapshot<'_> {
    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.selection.is_some()
    }

    /// Returns `true` if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Returns `true` if releasing the drag now would clear cells.
    ///
    /// Renderers use this to color the running-sum indicator.
    #[must_use]
    pub fn selection_matches(&self) -> bool {
        self.is_selecting()
            && self.selected_sum == self.target_sum
            && self.selected.iter().any(|&selected| selected)
    }

    /// Normalized drag rectangle, if a drag is in progress.
    #[must_use]
    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection.map(|selection| selection.rect())
    }

    /// Coarse phase of the game.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.game_over {
            Some(reason) => reason.into(),
            None if !self.is_started => Phase::NotStarted,
            None if self.time_remaining == 0 => Phase::TimeUp,
            None => Phase::Playing {
                selecting: self.is_selecting(),
            },
        }
    }

    /// Countdown formatted as `m:ss`.
    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.time_remaining)
    }
}

/// Formats a number of seconds as `m:ss`.
///
/// # Examples
///
/// ```
/// use applebox_game::format_clock;
///
/// assert_eq!(format_clock(120), "2:00");
/// assert_eq!(format_clock(65), "1:05");
/// assert_eq!(format_clock(9), "0:09");
/// ```
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
