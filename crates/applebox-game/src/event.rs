use applebox_generator::BoardSeed;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameOverReason {
    /// The countdown reached zero.
    TimeUp,
    /// Every cell was cleared.
    BoardCleared,
}

/// Coarse state of the engine, as a renderer would branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// No game has been started yet.
    NotStarted,
    /// A game is running.
    Playing {
        /// A drag is in progress.
        selecting: bool,
    },
    /// The countdown ran out.
    TimeUp,
    /// The player cleared every cell.
    BoardCleared,
}

impl From<GameOverReason> for Phase {
    fn from(reason: GameOverReason) -> Self {
        match reason {
            GameOverReason::TimeUp => Phase::TimeUp,
            GameOverReason::BoardCleared => Phase::BoardCleared,
        }
    }
}

/// A successful match removed from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clear {
    /// Row-major indices of the cleared cells.
    pub cells: Vec<usize>,
    /// Score after the clear.
    pub score: u32,
}

/// State transitions a collaborator may react to (play a sound, stop music,
/// re-arm its timer).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// A new game started.
    Started {
        /// Seed of the generated board, `None` for a supplied board.
        seed: Option<BoardSeed>,
    },
    /// A selection matched and its cells were cleared.
    Cleared(Clear),
    /// The game ended.
    GameOver(GameOverReason),
}
