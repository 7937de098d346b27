use applebox_core::{Board, CellRange};

/// Summed-area tables of present values and present counts.
///
/// Entry `(row, col)` holds the total over all cells above and to the left of
/// it, so any rectangle's total takes four lookups.
#[derive(Debug, Clone)]
pub(crate) struct PrefixSums {
    stride: usize,
    values: Vec<u32>,
    counts: Vec<u32>,
}

impl PrefixSums {
    pub(crate) fn new(board: &Board) -> Self {
        let stride = board.cols() + 1;
        let size = stride * (board.rows() + 1);
        let mut values = vec![0; size];
        let mut counts = vec![0; size];

        for (index, cell) in board.cells().iter().enumerate() {
            let (col, row) = board.position(index);
            let here = (row + 1) * stride + col + 1;
            let up = row * stride + col + 1;
            let left = here - 1;
            let diag = up - 1;
            let (value, count) = cell
                .present_value()
                .map_or((0, 0), |value| (u32::from(value), 1));
            values[here] = value + values[up] + values[left] - values[diag];
            counts[here] = count + counts[up] + counts[left] - counts[diag];
        }
        Self {
            stride,
            values,
            counts,
        }
    }

    fn total(&self, table: &[u32], range: CellRange) -> u32 {
        let top = range.top() * self.stride;
        let bottom = (range.bottom() + 1) * self.stride;
        let left = range.left();
        let right = range.right() + 1;
        table[bottom + right] + table[top + left] - table[top + right] - table[bottom + left]
    }

    /// Sum of present values inside `range`.
    pub(crate) fn sum(&self, range: CellRange) -> u32 {
        self.total(&self.values, range)
    }

    /// Number of present cells inside `range`.
    pub(crate) fn count(&self, range: CellRange) -> u32 {
        self.total(&self.counts, range)
    }
}
