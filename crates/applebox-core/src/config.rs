//! Grid dimensions and rule constants.

use crate::Cell;

/// Errors reported for configurations the game cannot be played with.
///
/// These are startup preconditions: they are checked once when a generator or
/// game is created, never during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The grid has no columns or no rows.
    #[display("grid must have at least one column and one row, got {cols}x{rows}")]
    EmptyGrid {
        /// Configured column count.
        cols: usize,
        /// Configured row count.
        rows: usize,
    },
    /// The total cell count does not fill the grid exactly.
    #[display("total cell count {total_cells} does not match a {cols}x{rows} grid")]
    CellCountMismatch {
        /// Configured column count.
        cols: usize,
        /// Configured row count.
        rows: usize,
        /// Configured total cell count.
        total_cells: usize,
    },
    /// The target sum is zero.
    #[display("target sum must be at least 1")]
    ZeroTargetSum,
    /// The maximum cell value is outside `1..=9`.
    #[display("max cell value must be in 1..=9, got {_0}")]
    MaxValueOutOfRange(#[error(not(source))] u8),
    /// The cells cannot be split into whole partitions summing to the target.
    #[display(
        "{total_cells} cells with values up to {max_value} cannot be split into runs summing to {target_sum}"
    )]
    Unpartitionable {
        /// Configured total cell count.
        total_cells: usize,
        /// Configured target sum.
        target_sum: u32,
        /// Configured maximum cell value.
        max_value: u8,
    },
}

/// Grid dimensions and rule constants for one game.
///
/// [`GameConfig::DEFAULT`] is the classic 17x10 board where runs of cells sum
/// to 10.
///
/// # Examples
///
/// ```
/// use applebox_core::{ConfigError, GameConfig};
///
/// assert!(GameConfig::DEFAULT.validate().is_ok());
///
/// let config = GameConfig {
///     target_sum: 0,
///     ..GameConfig::DEFAULT
/// };
/// assert_eq!(config.validate(), Err(ConfigError::ZeroTargetSum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
    /// Sum a selection must reach to be cleared.
    pub target_sum: u32,
    /// Largest value a generated cell may hold.
    pub max_value: u8,
    /// Number of cells on the board.
    pub total_cells: usize,
    /// Length of a game in seconds.
    pub duration_secs: u32,
}

impl GameConfig {
    /// The classic board: 17 columns, 10 rows, target 10, values 1-9, two minutes.
    pub const DEFAULT: Self = Self {
        cols: 17,
        rows: 10,
        target_sum: 10,
        max_value: 9,
        total_cells: 170,
        duration_secs: 120,
    };

    /// Checks the constants that do not depend on board generation.
    ///
    /// Whether the cell count can be split into whole partitions is checked by
    /// the board generator, which owns that table.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.cols * self.rows != self.total_cells {
            return Err(ConfigError::CellCountMismatch {
                cols: self.cols,
                rows: self.rows,
                total_cells: self.total_cells,
            });
        }
        if self.target_sum == 0 {
            return Err(ConfigError::ZeroTargetSum);
        }
        if !(1..=Cell::MAX_VALUE).contains(&self.max_value) {
            return Err(ConfigError::MaxValueOutOfRange(self.max_value));
        }
        Ok(())
    }

    /// Largest value that may be drawn while `budget` remains in the current
    /// partition.
    #[must_use]
    pub fn value_cap(&self, budget: u32) -> u8 {
        u8::try_from(budget).map_or(self.max_value, |budget| budget.min(self.max_value))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
