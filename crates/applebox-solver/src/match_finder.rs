use applebox_core::{Board, CellRange};

use crate::prefix_sums::PrefixSums;

/// Finds grid-aligned rectangles whose present cells sum to the target.
///
/// Rectangles are visited row-major by their top-left cell, then by bottom row
/// and right column. Because present values are positive, a rectangle whose
/// sum already exceeds the target stops the search in that direction.
///
/// A board whose values sum to a multiple of the target is clearable in
/// principle but not necessarily by rectangles, so finding nothing is normal
/// late in a game.
///
/// # Examples
///
/// ```
/// use applebox_core::{Board, CellRange};
/// use applebox_solver::MatchFinder;
///
/// let board: Board = "19/55".parse()?;
/// let finder = MatchFinder::new(10);
///
/// assert_eq!(finder.find(&board), Some(CellRange::new(0, 0, 1, 0)));
/// assert_eq!(finder.count(&board), 2); // top row and bottom row
/// # Ok::<(), applebox_core::BoardParseError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatchFinder {
    target: u32,
}

impl MatchFinder {
    /// Creates a finder for selections summing to `target`.
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self { target }
    }

    /// Returns the first matching rectangle, if any.
    #[must_use]
    pub fn find(&self, board: &Board) -> Option<CellRange> {
        let sums = PrefixSums::new(board);
        let mut found = None;
        self.visit(board, &sums, |range| {
            found = Some(range);
            false
        });
        found
    }

    /// Returns every matching rectangle in search order.
    #[must_use]
    pub fn find_all(&self, board: &Board) -> Vec<CellRange> {
        let sums = PrefixSums::new(board);
        let mut found = Vec::new();
        self.visit(board, &sums, |range| {
            found.push(range);
            true
        });
        found
    }

    /// Counts matching rectangles.
    ///
    /// Rectangles that differ only by cleared cells along their edges count
    /// separately.
    #[must_use]
    pub fn count(&self, board: &Board) -> usize {
        let sums = PrefixSums::new(board);
        let mut count = 0;
        self.visit(board, &sums, |_| {
            count += 1;
            true
        });
        count
    }

    /// Returns `true` if at least one rectangle matches.
    #[must_use]
    pub fn has_match(&self, board: &Board) -> bool {
        self.find(board).is_some()
    }

    /// Calls `on_match` for each match until it returns `false`.
    fn visit<F>(&self, board: &Board, sums: &PrefixSums, mut on_match: F)
    where
        F: FnMut(CellRange) -> bool,
    {
        let (cols, rows) = (board.cols(), board.rows());
        for top in 0..rows {
            for left in 0..cols {
                for bottom in top..rows {
                    if sums.sum(CellRange::new(left, top, left, bottom)) > self.target {
                        break;
                    }
                    for right in left..cols {
                        let range = CellRange::new(left, top, right, bottom);
                        let sum = sums.sum(range);
                        if sum > self.target {
                            break;
                        }
                        if sum == self.target && sums.count(range) > 0 && !on_match(range) {
                            return;
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use applebox_core::GameConfig;
    use applebox_generator::{BoardGenerator, BoardSeed};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_find_first_in_search_order() {
        let board: Board = "37/73".parse().unwrap();
        let finder = MatchFinder::new(10);
        assert_eq!(finder.find(&board), Some(CellRange::new(0, 0, 1, 0)));
        assert_eq!(
            finder.find_all(&board),
            [
                CellRange::new(0, 0, 1, 0),
                CellRange::new(0, 0, 0, 1),
                CellRange::new(1, 0, 1, 1),
                CellRange::new(0, 1, 1, 1),
            ]
        );
    }

    #[test]
    fn test_match_spans_cleared_cells() {
        let board: Board = "2.8/555".parse().unwrap();
        let finder = MatchFinder::new(10);
        assert_eq!(finder.find(&board), Some(CellRange::new(0, 0, 2, 0)));
    }

    #[test]
    fn test_fully_cleared_range_never_matches() {
        let board: Board = "../..".parse().unwrap();
        assert_eq!(MatchFinder::new(10).find(&board), None);
        assert_eq!(MatchFinder::new(10).count(&board), 0);
    }

    #[test]
    fn test_no_match() {
        let board: Board = "99/99".parse().unwrap();
        let finder = MatchFinder::new(10);
        assert!(!finder.has_match(&board));
        assert!(finder.find_all(&board).is_empty());
    }

    #[test]
    fn test_count_includes_cleared_borders() {
        let board: Board = "19/..".parse().unwrap();
        let finder = MatchFinder::new(10);
        // Top row alone, and top row extended over the cleared bottom row
        assert_eq!(finder.count(&board), 2);
    }

    proptest! {
        #[test]
        fn found_ranges_sum_to_target(phrase in "[a-z]{1,12}") {
            let generator = BoardGenerator::new(GameConfig::DEFAULT).unwrap();
            let board = generator.generate_with_seed(BoardSeed::from_phrase(&phrase)).board;
            let finder = MatchFinder::new(10);
            for range in finder.find_all(&board) {
                let present: Vec<_> = board.present_in(range).collect();
                prop_assert!(!present.is_empty());
                let sum: u32 = present.iter().map(|(_, cell)| u32::from(cell.value())).sum();
                prop_assert_eq!(sum, 10);
            }
        }
    }
}
