//! The grid of cells for one game session.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, CellRange};

/// Errors produced when building a [`Board`] from text or raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// No cells were given.
    #[display("board has no cells")]
    Empty,
    /// A row's length differs from the first row.
    #[display("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Cells found in that row.
        len: usize,
        /// Cells in the first row.
        expected: usize,
    },
    /// A character other than `1`-`9` or `.` was found.
    #[display("invalid cell character {ch:?} at row {row}, column {col}")]
    InvalidChar {
        /// Offending character.
        ch: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
    /// A raw value outside `1..=9` was given.
    #[display("invalid cell value {value} at index {index}")]
    InvalidValue {
        /// Offending value.
        value: u8,
        /// Row-major index.
        index: usize,
    },
}

/// A rectangular grid of cells stored in row-major order.
///
/// The board never changes shape. Cells are only ever cleared.
///
/// # Text format
///
/// One line per row, `1`-`9` for a present cell and `.` for a cleared one.
/// Rows are separated by `/` when displayed; parsing accepts `/` or newlines.
///
/// ```
/// use applebox_core::Board;
///
/// let board: Board = "123/4.6".parse()?;
/// assert_eq!(board.cols(), 3);
/// assert_eq!(board.rows(), 2);
/// assert_eq!(board.present_count(), 5);
/// assert_eq!(board.to_string(), "123/4.6");
/// # Ok::<(), applebox_core::BoardParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds a board of present cells from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`BoardParseError::Empty`] if there are no values or `cols` is 0,
    /// [`BoardParseError::RaggedRow`] if the values do not fill whole rows, and
    /// [`BoardParseError::InvalidValue`] for values outside `1..=9`.
    pub fn from_values<I>(cols: usize, values: I) -> Result<Self, BoardParseError>
    where
        I: IntoIterator<Item = u8>,
    {
        let cells = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                if (1..=Cell::MAX_VALUE).contains(&value) {
                    Ok(Cell::new(value))
                } else {
                    Err(BoardParseError::InvalidValue { value, index })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        if cols == 0 || cells.is_empty() {
            return Err(BoardParseError::Empty);
        }
        if cells.len() % cols != 0 {
            return Err(BoardParseError::RaggedRow {
                row: cells.len() / cols,
                len: cells.len() % cols,
                expected: cols,
            });
        }
        Ok(Self { cols, cells })
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    /// Number of cells, present or not.
    #[must_use]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at (`col`, `row`), if inside the board.
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows() {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Returns the (`col`, `row`) position of a row-major index.
    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.cols, index / self.cols)
    }

    /// Sum of the values of all present cells.
    #[must_use]
    pub fn present_sum(&self) -> u32 {
        self.cells
            .iter()
            .filter_map(|cell| cell.present_value())
            .map(u32::from)
            .sum()
    }

    /// Number of present cells.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_present()).count()
    }

    /// Returns `true` once every cell has been cleared.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_present())
    }

    /// Clears the cell at `index`. Out-of-range indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.clear();
        }
    }

    /// Clears every cell covered by `range` that lies on the board.
    pub fn clear_range(&mut self, range: CellRange) {
        if range.right() >= self.cols || range.bottom() >= self.rows() {
            return;
        }
        for index in range.indices(self.cols) {
            self.clear(index);
        }
    }

    /// Iterates over the present cells covered by `range` together with their
    /// indices.
    pub fn present_in(&self, range: CellRange) -> impl Iterator<Item = (usize, Cell)> + '_ {
        let in_bounds = range.right() < self.cols && range.bottom() < self.rows();
        range
            .indices(self.cols)
            .take_while(move |_| in_bounds)
            .map(move |index| (index, self.cells[index]))
            .filter(|(_, cell)| cell.is_present())
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.cols).enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }
            for cell in cells {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cols = None;
        let mut cells = Vec::new();
        let lines = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty());
        for (row, line) in lines.enumerate() {
            let mut len = 0;
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => {
                        let mut cell = Cell::new(1);
                        cell.clear();
                        cell
                    }
                    '1'..='9' => Cell::new(ch as u8 - b'0'),
                    _ => return Err(BoardParseError::InvalidChar { ch, row, col }),
                };
                cells.push(cell);
                len += 1;
            }
            let expected = *cols.get_or_insert(len);
            if len != expected {
                return Err(BoardParseError::RaggedRow { row, len, expected });
            }
        }
        match cols {
            Some(cols) if cols > 0 => Ok(Self { cols, cells }),
            _ => Err(BoardParseError::Empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board: Board = "46.\n355".parse().unwrap();
        assert_eq!(board.cols(), 3);
        assert_eq!(board.rows(), 2);
        assert_eq!(board.len(), 6);
        assert_eq!(board.present_count(), 5);
        assert_eq!(board.present_sum(), 23);
        assert_eq!(board.to_string(), "46./355");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Board>(), Err(BoardParseError::Empty));
        assert_eq!(" / ".parse::<Board>(), Err(BoardParseError::Empty));
        assert_eq!(
            "12/345".parse::<Board>(),
            Err(BoardParseError::RaggedRow {
                row: 1,
                len: 3,
                expected: 2
            })
        );
        assert_eq!(
            "12/30".parse::<Board>(),
            Err(BoardParseError::InvalidChar {
                ch: '0',
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn test_from_values() {
        let board = Board::from_values(2, [4, 6, 3, 5]).unwrap();
        assert_eq!(board.to_string(), "46/35");
        assert_eq!(board.get(1, 1), Some(&Cell::new(5)));
        assert_eq!(board.get(2, 0), None);
        assert_eq!(board.position(3), (1, 1));

        assert_eq!(
            Board::from_values(2, [4, 6, 3]),
            Err(BoardParseError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Board::from_values(2, [4, 10]),
            Err(BoardParseError::InvalidValue { value: 10, index: 1 })
        );
        assert_eq!(Board::from_values(0, [1]), Err(BoardParseError::Empty));
        assert_eq!(
            Board::from_values(3, std::iter::empty()),
            Err(BoardParseError::Empty)
        );
    }

    #[test]
    fn test_get_outside_board() {
        let board: Board = "46/35".parse().unwrap();
        assert_eq!(board.get(0, 2), None);
        assert_eq!(board.get(0, usize::MAX), None);
        assert_eq!(board.get(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_clear_range_and_is_cleared() {
        let mut board: Board = "19/28".parse().unwrap();
        board.clear_range(CellRange::new(0, 0, 1, 0));
        assert_eq!(board.to_string(), "../28");
        assert!(!board.is_cleared());

        // Out of bounds ranges are ignored
        board.clear_range(CellRange::new(0, 1, 2, 1));
        assert_eq!(board.to_string(), "../28");

        board.clear(2);
        board.clear(3);
        board.clear(99);
        assert!(board.is_cleared());
        assert_eq!(board.present_sum(), 0);
    }

    #[test]
    fn test_present_in_skips_cleared_cells() {
        let board: Board = "1.3/456".parse().unwrap();
        let found: Vec<_> = board
            .present_in(CellRange::new(0, 0, 1, 1))
            .map(|(index, cell)| (index, cell.value()))
            .collect();
        assert_eq!(found, [(0, 1), (3, 4), (4, 5)]);
        assert_eq!(board.present_in(CellRange::new(0, 0, 3, 0)).count(), 0);
    }
}
