use applebox_core::{Board, ConfigError, GameConfig};
use rand::{Rng as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{BoardSeed, partition::Partitioning};

/// A generated board together with the seed it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// Seed that reproduces this board with the same configuration.
    pub seed: BoardSeed,
    /// The shuffled board, every cell present.
    pub board: Board,
}

/// Generates boards whose cells split into runs summing to the target.
///
/// Values are drawn one partition at a time: a budget starts at the target sum,
/// each value is drawn uniformly from `1..=min(budget, max_value)` and
/// subtracted, and the budget is re-armed when it reaches zero. The finished
/// sequence is shuffled so partition boundaries are not contiguous.
///
/// The last partition is always closed exactly: values that would leave the
/// remaining cells unable to finish their partitions are never drawn. As a
/// result the board sum is always a multiple of the target sum.
///
/// # Examples
///
/// ```
/// use applebox_core::GameConfig;
/// use applebox_generator::{BoardGenerator, BoardSeed};
///
/// let config = GameConfig::DEFAULT;
/// let generator = BoardGenerator::new(config)?;
///
/// let generated = generator.generate_with_seed(BoardSeed::from_phrase("example"));
/// assert_eq!(generated.board.len(), config.total_cells);
/// assert_eq!(generated.board.present_sum() % config.target_sum, 0);
/// # Ok::<(), applebox_core::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    config: GameConfig,
    partitioning: Partitioning,
}

impl BoardGenerator {
    /// Creates a generator for `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`GameConfig::validate`], or
    /// [`ConfigError::Unpartitionable`] if the cell count cannot be split into
    /// whole partitions.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let partitioning = Partitioning::new(&config);
        if !partitioning.fills_whole(config.total_cells) {
            return Err(ConfigError::Unpartitionable {
                total_cells: config.total_cells,
                target_sum: config.target_sum,
                max_value: config.max_value,
            });
        }
        Ok(Self {
            config,
            partitioning,
        })
    }

    /// Returns the configuration boards are generated for.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = Pcg64::from_seed(seed.bytes());
        let mut values = self.draw_values(&mut rng);
        values.shuffle(&mut rng);

        let board = match Board::from_values(self.config.cols, values) {
            Ok(board) => board,
            Err(e) => unreachable!("generated values always fill the grid: {e}"),
        };
        log::debug!(
            "generated board: seed={seed}, sum={}, cells={}",
            board.present_sum(),
            board.len()
        );
        GeneratedBoard { seed, board }
    }

    fn draw_values(&self, rng: &mut Pcg64) -> Vec<u8> {
        let GameConfig {
            total_cells,
            target_sum,
            ..
        } = self.config;
        let mut values = Vec::with_capacity(total_cells);
        let mut budget = target_sum;

        while values.len() < total_cells {
            let cells_after = total_cells - values.len() - 1;
            let feasible = |value: &u8| {
                self.partitioning
                    .can_finish(cells_after, budget - u32::from(*value))
            };
            let candidates = 1..=self.config.value_cap(budget);
            let count = candidates.clone().filter(feasible).count();
            debug_assert!(count > 0, "no value keeps the board finishable");
            let pick = rng.random_range(0..count.max(1));
            let value = candidates.filter(feasible).nth(pick).unwrap_or(1);

            values.push(value);
            budget -= u32::from(value);
            if budget == 0 && values.len() < total_cells {
                budget = target_sum;
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn config(cols: usize, rows: usize, target_sum: u32, max_value: u8) -> GameConfig {
        GameConfig {
            cols,
            rows,
            target_sum,
            max_value,
            total_cells: cols * rows,
            duration_secs: 60,
        }
    }

    fn config_strategy() -> impl Strategy<Value = GameConfig> {
        (1usize..=20, 1usize..=12, 1u32..=30, 1u8..=9)
            .prop_map(|(cols, rows, target, max)| config(cols, rows, target, max))
            .prop_filter("partitionable", |config| BoardGenerator::new(*config).is_ok())
    }

    fn seed_strategy() -> impl Strategy<Value = BoardSeed> {
        any::<[u8; 32]>().prop_map(BoardSeed::from_bytes)
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert_eq!(
            BoardGenerator::new(config(3, 0, 10, 9)).unwrap_err(),
            ConfigError::EmptyGrid { cols: 3, rows: 0 }
        );
        assert_eq!(
            BoardGenerator::new(config(5, 3, 10, 1)).unwrap_err(),
            ConfigError::Unpartitionable {
                total_cells: 15,
                target_sum: 10,
                max_value: 1
            }
        );
        assert_eq!(
            BoardGenerator::new(config(1, 1, 10, 9)).unwrap_err(),
            ConfigError::Unpartitionable {
                total_cells: 1,
                target_sum: 10,
                max_value: 9
            }
        );
    }

    #[test]
    fn test_single_cell_board_holds_target() {
        let generator = BoardGenerator::new(config(1, 1, 5, 9)).unwrap();
        let generated = generator.generate_with_seed(BoardSeed::from_phrase("one"));
        assert_eq!(generated.board.to_string(), "5");
    }

    #[test]
    fn test_unit_values_fill_exact_partitions() {
        let generator = BoardGenerator::new(config(5, 4, 10, 1)).unwrap();
        let generated = generator.generate();
        assert!(generated.board.cells().iter().all(|cell| cell.value() == 1));
        assert_eq!(generated.board.present_sum(), 20);
    }

    #[test]
    fn test_default_board_shape() {
        let generator = BoardGenerator::new(GameConfig::DEFAULT).unwrap();
        let generated = generator.generate();
        assert_eq!(generated.board.cols(), 17);
        assert_eq!(generated.board.rows(), 10);
        assert_eq!(generated.board.present_count(), 170);
        assert!(generated.board.present_sum() >= 170);
        assert_eq!(generated.board.present_sum() % 10, 0);
    }

    #[test]
    fn test_same_seed_same_board() {
        let generator = BoardGenerator::new(GameConfig::DEFAULT).unwrap();
        let seed = BoardSeed::from_phrase("repeat");
        let a = generator.generate_with_seed(seed);
        let b = generator.generate_with_seed(seed);
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);

        let c = generator.generate_with_seed(BoardSeed::from_phrase("other"));
        assert_ne!(a.board, c.board);
    }

    proptest! {
        #[test]
        fn board_sum_is_multiple_of_target(config in config_strategy(), seed in seed_strategy()) {
            let generator = BoardGenerator::new(config).unwrap();
            let board = generator.generate_with_seed(seed).board;
            prop_assert_eq!(board.present_sum() % config.target_sum, 0);
        }

        #[test]
        fn board_values_and_length_in_range(config in config_strategy(), seed in seed_strategy()) {
            let generator = BoardGenerator::new(config).unwrap();
            let board = generator.generate_with_seed(seed).board;
            prop_assert_eq!(board.len(), config.total_cells);
            prop_assert_eq!(board.cols(), config.cols);
            for cell in board.cells() {
                prop_assert!(cell.is_present());
                prop_assert!((1..=config.max_value).contains(&cell.value()));
            }
        }

        #[test]
        fn classic_board_is_reproducible(seed in seed_strategy()) {
            let generator = BoardGenerator::new(GameConfig::DEFAULT).unwrap();
            prop_assert_eq!(
                generator.generate_with_seed(seed),
                generator.generate_with_seed(seed)
            );
        }
    }
}
