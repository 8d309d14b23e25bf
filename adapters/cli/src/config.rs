use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use wordsearch_core::DEFAULT_BOARD_SIZE;
use wordsearch_system_placement::DEFAULT_INTERSECTION_BIAS;

use crate::{seed::SeedPolicy, CliArgs};

/// Options read from a TOML config file. Every field is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    size: Option<u32>,
    seeded: Option<bool>,
    seed: Option<u64>,
    intersection_bias: Option<f64>,
    words: Vec<String>,
}

impl FileConfig {
    /// Loads the config file located at the provided path.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid config file at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse config toml contents")
    }
}

/// Effective options after layering command-line arguments over the file.
#[derive(Debug, PartialEq)]
pub(crate) struct Settings {
    pub(crate) words: Vec<String>,
    pub(crate) size: u32,
    pub(crate) seed: SeedPolicy,
    pub(crate) intersection_bias: f64,
}

impl Settings {
    /// Command-line values win; positional words are appended to file words.
    pub(crate) fn resolve(file: FileConfig, args: &CliArgs) -> Self {
        let mut words = file.words;
        words.extend(args.words.iter().cloned());

        let seed = if let Some(seed) = args.seed {
            SeedPolicy::Explicit(seed)
        } else if args.seeded {
            SeedPolicy::Clock
        } else if let Some(seed) = file.seed {
            SeedPolicy::Explicit(seed)
        } else if file.seeded.unwrap_or(false) {
            SeedPolicy::Clock
        } else {
            SeedPolicy::Fixed
        };

        Self {
            words,
            size: args.size.or(file.size).unwrap_or(DEFAULT_BOARD_SIZE),
            seed,
            intersection_bias: args
                .intersection_bias
                .or(file.intersection_bias)
                .unwrap_or(DEFAULT_INTERSECTION_BIAS),
        }
    }
}
