//! Board cell representation.

use std::fmt::{self, Display};

/// A numbered cell on the board.
///
/// A cell starts out present and becomes absent once it is cleared by a match.
/// Absent cells keep their value for bookkeeping but never contribute to sums
/// or hit-testing, and are never made present again.
///
/// # Examples
///
/// ```
/// use applebox_core::Cell;
///
/// let mut cell = Cell::new(7);
/// assert_eq!(cell.present_value(), Some(7));
///
/// cell.clear();
/// assert!(!cell.is_present());
/// assert_eq!(cell.present_value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    value: u8,
    present: bool,
}

impl Cell {
    /// Largest value a cell can hold.
    pub const MAX_VALUE: u8 = 9;

    /// Creates a present cell holding `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=9`.
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(
            (1..=Self::MAX_VALUE).contains(&value),
            "Invalid cell value: {value}"
        );
        Self {
            value,
            present: true,
        }
    }

    /// Returns the value printed on the cell, whether or not it is present.
    #[must_use]
    pub fn value(self) -> u8 {
        self.value
    }

    /// Returns `true` if the cell has not been cleared.
    #[must_use]
    pub fn is_present(self) -> bool {
        self.present
    }

    /// Returns the value if the cell is present.
    #[must_use]
    pub fn present_value(self) -> Option<u8> {
        self.present.then_some(self.value)
    }

    /// Marks the cell as cleared.
    pub fn clear(&mut self) {
        self.present = false;
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.present {
            write!(f, "{}", self.value)
        } else {
            f.write_str(".")
        }
    }
}
