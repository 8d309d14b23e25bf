//! Candidate generation against the current grid state.

use wordsearch_core::{CellCoord, Direction, PlacedWord};
use wordsearch_world::Grid;

/// Legal placement option for one word during a single placement round.
///
/// Candidates borrow the word they describe and never outlive the round that
/// produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Candidate<'w> {
    word: &'w str,
    anchor: CellCoord,
    direction: Direction,
}

impl<'w> Candidate<'w> {
    /// Creates a candidate descriptor.
    #[must_use]
    pub const fn new(word: &'w str, anchor: CellCoord, direction: Direction) -> Self {
        Self {
            word,
            anchor,
            direction,
        }
    }

    /// Word the candidate would write.
    #[must_use]
    pub const fn word(&self) -> &'w str {
        self.word
    }

    /// Cell that would hold the first letter.
    #[must_use]
    pub const fn anchor(&self) -> CellCoord {
        self.anchor
    }

    /// Direction the word would be written in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

/// Enumerates placements that cross an already placed word at a shared letter.
///
/// For every cell of every placed word whose letter also occurs in `word`,
/// the word is pivoted through that cell at each matching index and tried in
/// the six directions that are not collinear with the placed word. Runs that
/// leave the board or conflict with an occupied cell are dropped. The same
/// anchor and direction may be produced more than once.
#[must_use]
pub fn find_intersections<'w>(
    word: &'w str,
    placed: &[PlacedWord],
    grid: &Grid,
) -> Vec<Candidate<'w>> {
    let letters: Vec<char> = word.chars().collect();
    let Some(last) = letters.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    for existing in placed {
        let collisions = existing
            .cells()
            .filter(|(_, letter)| letters.contains(letter));
        for (collision, shared) in collisions {
            let pivots = letters
                .iter()
                .enumerate()
                .filter(|(_, letter)| **letter == shared)
                .map(|(index, _)| index);
            for before in pivots {
                let after = last - before;
                candidates.extend(
                    Direction::ALL
                        .into_iter()
                        .filter(|direction| !direction.is_collinear_with(existing.direction()))
                        .filter_map(|direction| {
                            let anchor = collision.step(direction, -(before as i64))?;
                            let terminal = collision.step(direction, after as i64)?;
                            (grid.contains(anchor) && grid.contains(terminal))
                                .then_some(Candidate::new(word, anchor, direction))
                        })
                        .filter(|candidate| {
                            grid.can_place(word, candidate.anchor, candidate.direction)
                        }),
                );
            }
        }
    }
    candidates
}

/// Enumerates every anchor and direction where `word` fits on the grid.
///
/// Directions are scanned in [`Direction::ALL`] order, then rows, then
/// columns. A candidate is kept when its terminal cell is on the board and
/// every covered cell is empty or already holds the matching letter.
#[must_use]
pub fn find_free<'w>(word: &'w str, grid: &Grid) -> Vec<Candidate<'w>> {
    let Some(end) = word.chars().count().checked_sub(1) else {
        return Vec::new();
    };
    let size = grid.size();

    Direction::ALL
        .into_iter()
        .flat_map(|direction| {
            (0..size).flat_map(move |row| {
                (0..size).map(move |column| (CellCoord::new(column, row), direction))
            })
        })
        .filter(|(anchor, direction)| {
            anchor
                .step(*direction, end as i64)
                .map_or(false, |terminal| grid.contains(terminal))
        })
        .filter(|(anchor, direction)| grid.can_place(word, *anchor, *direction))
        .map(|(anchor, direction)| Candidate::new(word, anchor, direction))
        .collect()
}
