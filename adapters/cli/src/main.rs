#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates word search puzzles.

mod config;
mod seed;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use wordsearch_rendering::{render_grid, render_key, PuzzleSnapshot};
use wordsearch_system_fill::fill_background;
use wordsearch_system_placement::{Engine, PlacementConfig};
use wordsearch_system_validation::validate;

use crate::config::{FileConfig, Settings};

/// Command-line arguments accepted by the generator.
#[derive(Debug, Parser)]
#[command(name = "wordsearch", about = "Hide words in a square letter grid")]
struct CliArgs {
    /// Words to hide; appended to any words listed in the config file.
    words: Vec<String>,

    /// Width and height of the board.
    #[arg(short, long)]
    size: Option<u32>,

    /// TOML file providing defaults for every option.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Explicit seed for reproducible output.
    #[arg(long, conflicts_with = "seeded")]
    seed: Option<u64>,

    /// Seed from the system clock so every run differs.
    #[arg(long)]
    seeded: bool,

    /// Probability of crossing an existing word when a crossing is possible.
    #[arg(long, value_name = "PROBABILITY")]
    intersection_bias: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the answer key after the grid in text mode.
    #[arg(long)]
    key: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the word search command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(file, &args);
    info!(
        "generating a {size}x{size} puzzle for {} words ({:?})",
        settings.words.len(),
        settings.seed,
        size = settings.size
    );

    validate(&settings.words, settings.size).context("word list rejected")?;
    let config = PlacementConfig::new(settings.intersection_bias)?;
    let mut rng = settings.seed.rng();

    let placement = Engine::new(config)
        .place(&settings.words, settings.size, &mut rng)
        .context("failed to generate puzzle; try a larger size, another seed, or fewer words")?;
    let (mut grid, words) = placement.into_parts();
    let filled = fill_background(&mut grid, &mut rng);
    debug!("filled {filled} background cells");

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_grid(&grid));
            if args.key {
                println!();
                print!("{}", render_key(&words));
            }
        }
        OutputFormat::Json => {
            let json = PuzzleSnapshot::capture(&grid, &words)
                .to_json()
                .context("failed to encode puzzle as json")?;
            println!("{json}");
        }
    }

    Ok(())
}
