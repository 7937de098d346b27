use applebox_core::GameConfig;

/// Answers whether a number of remaining cells can still close every
/// partition exactly.
///
/// A partition of length `len` summing to `target` with values in `1..=max`
/// exists iff `len <= target <= len * max`, so lengths range over
/// `min_len..=target` where `min_len = ceil(target / max)`. `k` whole
/// partitions therefore span any length in `k * min_len..=k * target`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Partitioning {
    target: usize,
    max: usize,
    min_len: usize,
}

impl Partitioning {
    pub(crate) fn new(config: &GameConfig) -> Self {
        let target = usize::try_from(config.target_sum).unwrap_or(usize::MAX);
        let max = usize::from(config.max_value);
        Self {
            target,
            max,
            min_len: target.div_ceil(max),
        }
    }

    /// Returns `true` if `cells` cells can form whole partitions only.
    pub(crate) fn fills_whole(&self, cells: usize) -> bool {
        if cells == 0 {
            return true;
        }
        // Some k with k * min_len <= cells <= k * target.
        cells.div_ceil(self.target) <= cells / self.min_len
    }

    /// Returns `true` if `cells` cells can first spend `budget` and then form
    /// whole partitions.
    pub(crate) fn can_finish(&self, cells: usize, budget: u32) -> bool {
        let budget = usize::try_from(budget).unwrap_or(usize::MAX);
        if budget == 0 {
            return self.fills_whole(cells);
        }
        let shortest = budget.div_ceil(self.max);
        let longest = budget.min(cells);
        (shortest..=longest).any(|len| self.fills_whole(cells - len))
    }
}
