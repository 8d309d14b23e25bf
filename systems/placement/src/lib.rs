#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Word placement engine.
//!
//! Words are ordered longest first and placed one at a time. For every word
//! the engine gathers candidates that cross an already placed word at a
//! shared letter together with every conflict-free run on the board, lets the
//! [`PlacementChooser`] pick one, and commits it to the [`Grid`]. Placements
//! are never revisited; the first word without any candidate aborts the run
//! with [`GenerationError::CannotFit`].
//!
//! The engine owns no random state. Callers inject the source, so a seeded
//! generator reproduces the same puzzle.

pub mod candidates;
pub mod chooser;

use log::{debug, warn};
use rand::Rng;
use wordsearch_core::{GenerationError, PlacedWord};
use wordsearch_system_ordering::order_words;
use wordsearch_world::Grid;

pub use candidates::{find_free, find_intersections, Candidate};
pub use chooser::{CandidateSource, Choice, PlacementChooser};

/// Probability of preferring an intersecting candidate when one exists.
pub const DEFAULT_INTERSECTION_BIAS: f64 = 0.5;

/// Tuning knobs for the placement engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementConfig {
    intersection_bias: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            intersection_bias: DEFAULT_INTERSECTION_BIAS,
        }
    }
}

impl PlacementConfig {
    /// Creates a configuration with the provided intersection bias.
    ///
    /// The bias must lie within `0.0..=1.0`.
    pub fn new(intersection_bias: f64) -> Result<Self, GenerationError> {
        if !(0.0..=1.0).contains(&intersection_bias) {
            return Err(GenerationError::InvalidBias {
                bias: intersection_bias,
            });
        }
        Ok(Self { intersection_bias })
    }

    /// Probability of preferring an intersecting candidate when one exists.
    #[must_use]
    pub const fn intersection_bias(&self) -> f64 {
        self.intersection_bias
    }
}

/// Grid and placement records produced by a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    grid: Grid,
    words: Vec<PlacedWord>,
}

impl Placement {
    /// Grid holding every placed letter; untouched cells are empty.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placed words in the order they were committed.
    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Consumes the placement, yielding the grid and the placed words.
    #[must_use]
    pub fn into_parts(self) -> (Grid, Vec<PlacedWord>) {
        (self.grid, self.words)
    }
}

/// Sequential placement engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine {
    chooser: PlacementChooser,
}

impl Engine {
    /// Creates an engine using the provided configuration.
    #[must_use]
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            chooser: PlacementChooser::new(config),
        }
    }

    /// Places every word on a fresh `size`×`size` grid.
    ///
    /// Words must already be validated: non-empty, letters only, no longer
    /// than `size`. They are uppercased and ordered longest first before
    /// placement.
    pub fn place<S, R>(
        &self,
        words: &[S],
        size: u32,
        rng: &mut R,
    ) -> Result<Placement, GenerationError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let ordered = order_words(words);
        let mut grid = Grid::new(size);
        let mut placed: Vec<PlacedWord> = Vec::with_capacity(ordered.len());

        for word in &ordered {
            let intersecting = find_intersections(word, &placed, &grid);
            let free = find_free(word, &grid);
            debug!(
                "placing {word}: {} intersecting, {} free candidates",
                intersecting.len(),
                free.len()
            );

            let Some(choice) = self.chooser.choose(&intersecting, &free, rng) else {
                warn!("no legal placement for {word} on a {size}x{size} board");
                return Err(GenerationError::CannotFit { word: word.clone() });
            };

            let committed = commit(&mut grid, choice.candidate);
            debug!(
                "placed {} at {} heading {} ({:?})",
                committed.text(),
                committed.anchor(),
                committed.direction(),
                choice.source
            );
            placed.push(committed);
        }

        Ok(Placement {
            grid,
            words: placed,
        })
    }
}

/// Places `words` with the default configuration.
///
/// See [`Engine::place`].
pub fn place<S, R>(words: &[S], size: u32, rng: &mut R) -> Result<Placement, GenerationError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    Engine::default().place(words, size, rng)
}

/// Writes the candidate's letters and records the placement.
fn commit(grid: &mut Grid, candidate: Candidate<'_>) -> PlacedWord {
    grid.commit(candidate.word(), candidate.anchor(), candidate.direction());
    PlacedWord::new(candidate.word(), candidate.anchor(), candidate.direction())
}
