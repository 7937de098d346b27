//! Command line front end for applebox.
//!
//! ```sh
//! applebox generate --phrase daily-2026-10-16
//! applebox autoplay --seed <HEX> --think-secs 2 --json
//! ```

use std::process;

use applebox_app::{
    Autoplayer, Input, Session,
    dto::{BoardDto, PlayReportDto},
    game_over_message,
};
use applebox_core::GameConfig;
use applebox_game::GameError;
use applebox_generator::{BoardGenerator, BoardSeed, GeneratedBoard};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a board and print it.
    Generate {
        #[command(flatten)]
        seed: SeedArgs,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Play a whole game without a human and print the result.
    Autoplay {
        #[command(flatten)]
        seed: SeedArgs,

        /// Seconds spent on each move.
        #[arg(long, value_name = "SECS", default_value_t = 1)]
        think_secs: u32,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// Hex seed to reproduce.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<BoardSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,
}

impl SeedArgs {
    fn resolve(&self) -> BoardSeed {
        self.seed
            .or_else(|| self.phrase.as_deref().map(BoardSeed::from_phrase))
            .unwrap_or_else(BoardSeed::random)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("invalid configuration: {_0}")]
    Game(GameError),
    #[display("failed to write JSON: {_0}")]
    Json(serde_json::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = GameConfig::DEFAULT;
    match cli.command {
        Command::Generate { seed, json } => {
            let generator = BoardGenerator::new(config).map_err(GameError::from)?;
            let generated = generator.generate_with_seed(seed.resolve());
            if json {
                println!("{}", serde_json::to_string_pretty(&BoardDto::from(&generated))?);
            } else {
                print_board(&generated);
            }
        }
        Command::Autoplay {
            seed,
            think_secs,
            json,
        } => {
            let mut session = Session::new(config)?;
            session.handle(Input::StartGame {
                seed: Some(seed.resolve()),
            });
            let report = Autoplayer::new(think_secs).play(&mut session);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&PlayReportDto::from(&report))?
                );
            } else {
                if let Some(seed) = report.seed {
                    println!("Seed: {seed}");
                }
                if let Some(reason) = report.outcome {
                    println!("{}", game_over_message(reason));
                }
                println!("Score: {}", report.score);
                println!("Cells left: {}", report.cells_left);
                println!("Time left: {}", applebox_game::format_clock(report.time_remaining));
            }
        }
    }
    Ok(())
}

fn print_board(generated: &GeneratedBoard) {
    println!("Seed: {}", generated.seed);
    println!();
    for row in generated.board.to_string().split('/') {
        let spaced = row.chars().map(String::from).collect::<Vec<_>>().join(" ");
        println!("  {spaced}");
    }
    println!();
    println!(
        "Sum: {} ({} cells)",
        generated.board.present_sum(),
        generated.board.len()
    );
}
