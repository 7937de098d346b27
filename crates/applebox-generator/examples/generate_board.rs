//! Example demonstrating board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` for a configuration
//! - Generate a random or seeded board
//! - Display the board and its seed
//! - Sample many boards to inspect the value distribution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Reproduce a board from a seed or derive one from a phrase:
//!
//! ```sh
//! cargo run --example generate_board -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! cargo run --example generate_board -- --phrase daily-2026-10-16
//! ```
//!
//! Sample boards and print how often each value appears (default: 0, no sampling):
//!
//! ```sh
//! cargo run --example generate_board -- --samples 10000
//! ```

use std::process;

use applebox_core::GameConfig;
use applebox_generator::{BoardGenerator, BoardSeed, GeneratedBoard};
use clap::Parser;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Hex seed to reproduce.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<BoardSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Number of random boards to sample for the value histogram.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    let config = GameConfig::DEFAULT;
    let generator = match BoardGenerator::new(config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    let seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(BoardSeed::from_phrase))
        .unwrap_or_else(BoardSeed::random);
    let generated = generator.generate_with_seed(seed);
    print_board(&generated, &config);

    if args.samples > 0 {
        let histogram = (0..args.samples)
            .into_par_iter()
            .map(|_| value_counts(&generator.generate()))
            .reduce(
                || [0; 10],
                |mut acc, counts| {
                    for (total, count) in acc.iter_mut().zip(counts) {
                        *total += count;
                    }
                    acc
                },
            );
        print_histogram(&histogram, args.samples);
    }
}

fn value_counts(generated: &GeneratedBoard) -> [usize; 10] {
    let mut counts = [0; 10];
    for cell in generated.board.cells() {
        counts[usize::from(cell.value())] += 1;
    }
    counts
}

fn print_board(generated: &GeneratedBoard, config: &GameConfig) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Board:");
    for row in generated.board.to_string().split('/') {
        println!("  {row}");
    }
    println!();

    let sum = generated.board.present_sum();
    println!("Stats:");
    println!("  sum: {sum}");
    println!("  partitions: {}", sum / config.target_sum);
}

fn print_histogram(histogram: &[usize; 10], samples: usize) {
    let total: usize = histogram.iter().sum();
    println!();
    println!("Values over {samples} boards:");
    for (value, count) in histogram.iter().enumerate().skip(1) {
        #[expect(clippy::cast_precision_loss)]
        let share = *count as f64 / total as f64 * 100.0;
        println!("  {value}: {count} ({share:.2}%)");
    }
}
