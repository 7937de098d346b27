//! Benchmarks for board generation.
//!
//! # Benchmarks
//!
//! - **`generator_classic`**: Generates the classic 17x10 board. Measures value
//!   drawing with the partition feasibility checks plus the final shuffle.
//! - **`generator_large`**: Generates a 60x40 board to show how generation
//!   scales with the cell count.
//!
//! # Test Data
//!
//! Seeds are derived from fixed phrases so every run measures the same boards.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use applebox_core::GameConfig;
use applebox_generator::{BoardGenerator, BoardSeed};
use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};

const PHRASES: [&str; 3] = ["bench-0", "bench-1", "bench-2"];

fn bench_with_config(c: &mut Criterion, name: &str, config: GameConfig) {
    let generator = BoardGenerator::new(config).unwrap();

    for (i, phrase) in PHRASES.into_iter().enumerate() {
        let seed = BoardSeed::from_phrase(phrase);
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_classic(c: &mut Criterion) {
    bench_with_config(c, "generator_classic", GameConfig::DEFAULT);
}

fn bench_generator_large(c: &mut Criterion) {
    let config = GameConfig {
        cols: 60,
        rows: 40,
        total_cells: 2400,
        ..GameConfig::DEFAULT
    };
    bench_with_config(c, "generator_large", config);
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_generator_classic,
        bench_generator_large
);
criterion_main!(benches);
