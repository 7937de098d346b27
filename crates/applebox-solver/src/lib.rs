//! Match finding for applebox boards.
//!
//! [`MatchFinder`] looks for rectangles of cells that a player could drag to
//! clear. It backs hints and the headless autoplayer; it has no say in when a
//! game ends.
//!
//! # Examples
//!
//! ```
//! use applebox_core::Board;
//! use applebox_solver::MatchFinder;
//!
//! let board: Board = "1234/5678".parse()?;
//! let finder = MatchFinder::new(10);
//!
//! if let Some(range) = finder.find(&board) {
//!     println!("drag over {} cells", range.len());
//! }
//! assert!(finder.has_match(&board)); // 1+2+3+4
//! # Ok::<(), applebox_core::BoardParseError>(())
//! ```

pub use self::match_finder::MatchFinder;

mod match_finder;
mod prefix_sums;
