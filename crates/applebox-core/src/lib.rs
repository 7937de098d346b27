//! Core data structures for the applebox puzzle.
//!
//! This crate provides the types shared by board generation, the game engine and
//! the match finder.
//!
//! # Overview
//!
//! 1. **Board types**
//!    - [`cell`]: a single numbered cell that can be cleared
//!    - [`board`]: the row-major grid of cells for one game session
//!
//! 2. **Geometry**
//!    - [`geometry`]: screen-space [`Point`] and [`Rect`] used for hit-testing,
//!      and grid-space [`CellRange`]
//!
//! 3. **Configuration**
//!    - [`config`]: grid dimensions and rule constants with validation
//!
//! # Examples
//!
//! ```
//! use applebox_core::{Board, CellRange};
//!
//! let mut board: Board = "46/35".parse()?;
//! assert_eq!(board.present_sum(), 18);
//!
//! board.clear_range(CellRange::new(0, 0, 1, 0));
//! assert_eq!(board.present_sum(), 8);
//! assert_eq!(board.to_string(), "../35");
//! # Ok::<(), applebox_core::BoardParseError>(())
//! ```

pub mod board;
pub mod cell;
pub mod config;
pub mod geometry;

pub use self::{
    board::{Board, BoardParseError},
    cell::Cell,
    config::{ConfigError, GameConfig},
    geometry::{CellRange, Point, Rect},
};
