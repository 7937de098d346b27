//! Headless front end for applebox.
//!
//! [`Session`] plays the part of the UI: it turns pointer and clock [`Input`]s
//! into engine calls and reports the [`Effect`]s a front end must carry out
//! (music, the one-second timer, clear animations). [`Autoplayer`] drives a
//! session on its own, and the [`dto`] module serializes boards, snapshots
//! and reports for the `applebox` binary.
//!
//! # Examples
//!
//! ```
//! use applebox_app::{Effect, Input, Session};
//! use applebox_core::GameConfig;
//!
//! let mut session = Session::new(GameConfig::DEFAULT)?;
//! let effects = session.handle(Input::StartGame { seed: None });
//! assert_eq!(effects, [Effect::PlayMusic { restart: false }, Effect::ArmTimer]);
//! # Ok::<(), applebox_game::GameError>(())
//! ```

pub use self::{
    autoplay::{Autoplayer, PlayReport},
    session::{Effect, Input, Session, game_over_message},
};

mod autoplay;
pub mod dto;
mod session;
