//! The applebox selection and game engine.
//!
//! This crate turns pointer drags into cleared cells. A [`Game`] owns the board
//! for one session and is driven by a collaborator that forwards drag corners,
//! one-second ticks and game starts; the collaborator reads a
//! [`GameSnapshot`] back to render.
//!
//! Cell geometry is injected through [`CellLayout`], so the engine never knows
//! how the board is drawn. [`GridLayout`] covers the usual uniform grid.
//!
//! # Examples
//!
//! ```
//! use applebox_core::GameConfig;
//! use applebox_game::{Game, Phase};
//!
//! let config = GameConfig::DEFAULT;
//! let mut game = Game::new(config)?;
//!
//! game.start_game();
//! assert_eq!(game.phase(), Phase::Playing { selecting: false });
//!
//! // The collaborator ticks once per second while the timer is armed
//! while game.timer_armed() {
//!     game.tick();
//! }
//! assert_eq!(game.phase(), Phase::TimeUp);
//! # Ok::<(), applebox_game::GameError>(())
//! ```

pub use self::{
    event::{Clear, GameEvent, GameOverReason, Phase},
    game::{Game, GameError, Selection},
    layout::{CellLayout, GridLayout},
    snapshot::{GameSnapshot, format_clock},
};

mod event;
mod game;
mod layout;
mod snapshot;
