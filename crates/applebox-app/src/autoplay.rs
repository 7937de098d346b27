use applebox_core::CellRange;
use applebox_game::GameOverReason;
use applebox_generator::BoardSeed;
use applebox_solver::MatchFinder;

use crate::{Effect, Input, Session};

/// Outcome of a game played by an [`Autoplayer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    /// Seed of the board, `None` for a supplied board.
    pub seed: Option<BoardSeed>,
    /// Matches cleared.
    pub score: u32,
    /// Rectangles dragged, in play order.
    pub clears: Vec<CellRange>,
    /// Cells still on the board at the end.
    pub cells_left: usize,
    /// Seconds left on the countdown at the end.
    pub time_remaining: u32,
    /// Why the game ended, `None` if it never started.
    pub outcome: Option<GameOverReason>,
}

/// Plays a game through a [`Session`] without a human.
///
/// Each turn the autoplayer drags over the first rectangle the
/// [`MatchFinder`] reports, then lets `think_secs` seconds pass. Once no
/// rectangle matches it waits out the clock.
#[derive(Debug, Clone, Copy)]
pub struct Autoplayer {
    think_secs: u32,
}

impl Autoplayer {
    /// Creates an autoplayer that spends `think_secs` seconds per move.
    #[must_use]
    pub fn new(think_secs: u32) -> Self {
        Self { think_secs }
    }

    /// Plays the session's current game to the end.
    pub fn play(&self, session: &mut Session) -> PlayReport {
        let finder = MatchFinder::new(session.game().config().target_sum);
        let mut clears = Vec::new();

        while session.game().is_playing() {
            let Some(range) = session.game().board().and_then(|board| finder.find(board)) else {
                log::debug!("no match left, waiting for the clock");
                break;
            };
            if !Self::drag(session, range) {
                log::warn!("drag over {range:?} did not clear, giving up");
                break;
            }
            clears.push(range);
            for _ in 0..self.think_secs {
                if !session.game().timer_armed() {
                    break;
                }
                session.handle(Input::Tick);
            }
        }
        while session.game().timer_armed() {
            session.handle(Input::Tick);
        }

        let game = session.game();
        let report = PlayReport {
            seed: session.snapshot().seed,
            score: game.score(),
            clears,
            cells_left: game.board().map_or(0, |board| board.present_count()),
            time_remaining: game.time_remaining(),
            outcome: game.game_over(),
        };
        log::info!(
            "autoplay finished: score={}, cells_left={}, outcome={:?}",
            report.score,
            report.cells_left,
            report.outcome
        );
        report
    }

    /// Drags over `range` and returns whether the drag cleared it.
    fn drag(session: &mut Session, range: CellRange) -> bool {
        let Some((start, end)) = session.layout().drag_for(range) else {
            return false;
        };
        session.handle(Input::PointerDown(start));
        session.handle(Input::PointerMove(end));
        session
            .handle(Input::PointerUp)
            .iter()
            .any(Effect::is_cleared)
    }
}
