//! Board generation for applebox.
//!
//! A [`BoardGenerator`] builds boards whose cell values can be split into runs
//! that each sum exactly to the target, so clearing the whole board is always
//! possible in principle. Generation is deterministic for a given
//! [`BoardSeed`], which makes boards reproducible and shareable.
//!
//! # Examples
//!
//! ```
//! use applebox_core::GameConfig;
//! use applebox_generator::{BoardGenerator, BoardSeed};
//!
//! let generator = BoardGenerator::new(GameConfig::DEFAULT)?;
//!
//! // Random board
//! let generated = generator.generate();
//! println!("seed: {}", generated.seed);
//! println!("board: {}", generated.board);
//!
//! // Reproduce it later from the seed
//! let again = generator.generate_with_seed(generated.seed);
//! assert_eq!(again.board, generated.board);
//! # Ok::<(), applebox_core::ConfigError>(())
//! ```

pub use self::{
    generator::{BoardGenerator, GeneratedBoard},
    seed::{BoardSeed, SeedParseError},
};

mod generator;
mod partition;
mod seed;
