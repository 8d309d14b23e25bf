#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the word search generator.
//!
//! This crate defines the vocabulary that connects the adapters, the letter
//! grid, and the pure systems. Geometry lives here as constant lookup data,
//! [`PlacedWord`] records describe committed placements, and every failure
//! the pipeline can surface is a variant of [`GenerationError`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phrase hashed into the reproducible default seed.
pub const DEFAULT_SEED_PHRASE: &str = "Hello, WordSearch!";

/// Board size used when the caller does not provide one.
pub const DEFAULT_BOARD_SIZE: u32 = 8;

/// One of the eight unit directions a word can be written in.
///
/// Rows grow downwards, so `North` decreases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing column, constant row.
    East,
    /// Increasing column, decreasing row.
    NorthEast,
    /// Decreasing row, constant column.
    North,
    /// Decreasing column, decreasing row.
    NorthWest,
    /// Decreasing column, constant row.
    West,
    /// Decreasing column, increasing row.
    SouthWest,
    /// Increasing row, constant column.
    South,
    /// Increasing column, increasing row.
    SouthEast,
}

const VECTORS: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const OPPOSITES: [Direction; 8] = [
    Direction::West,
    Direction::SouthWest,
    Direction::South,
    Direction::SouthEast,
    Direction::East,
    Direction::NorthEast,
    Direction::North,
    Direction::NorthWest,
];

impl Direction {
    /// Every direction in canonical scan order.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Position of the direction within [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column delta of a single step.
    #[must_use]
    pub const fn dx(self) -> i32 {
        VECTORS[self.index()].0
    }

    /// Row delta of a single step.
    #[must_use]
    pub const fn dy(self) -> i32 {
        VECTORS[self.index()].1
    }

    /// Direction pointing the exact opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        OPPOSITES[self.index()]
    }

    /// Reports whether `other` runs along the same line, either way.
    #[must_use]
    pub fn is_collinear_with(self, other: Direction) -> bool {
        self == other || self.opposite() == other
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::East => "east",
            Self::NorthEast => "north-east",
            Self::North => "north",
            Self::NorthWest => "north-west",
            Self::West => "west",
            Self::SouthWest => "south-west",
            Self::South => "south",
            Self::SouthEast => "south-east",
        };
        f.write_str(name)
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Moves `distance` cells along `direction`; negative distances walk backwards.
    ///
    /// Returns `None` when either component would leave the non-negative
    /// quadrant. Upper bounds are the grid's concern.
    #[must_use]
    pub fn step(self, direction: Direction, distance: i64) -> Option<Self> {
        let column = i64::from(self.column) + distance * i64::from(direction.dx());
        let row = i64::from(self.row) + distance * i64::from(direction.dy());
        Some(Self::new(
            u32::try_from(column).ok()?,
            u32::try_from(row).ok()?,
        ))
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Word committed to the grid together with its anchor and direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedWord {
    text: String,
    anchor: CellCoord,
    direction: Direction,
}

impl PlacedWord {
    /// Records a placement. `text` is expected to be uppercase already.
    #[must_use]
    pub fn new(text: impl Into<String>, anchor: CellCoord, direction: Direction) -> Self {
        Self {
            text: text.into(),
            anchor,
            direction,
        }
    }

    /// Normalised word text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cell holding the first letter.
    #[must_use]
    pub const fn anchor(&self) -> CellCoord {
        self.anchor
    }

    /// Direction the word is written in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates the cells covered by the word paired with the letter stored there.
    pub fn cells(&self) -> impl Iterator<Item = (CellCoord, char)> + '_ {
        self.text.chars().enumerate().filter_map(move |(index, letter)| {
            self.anchor
                .step(self.direction, index as i64)
                .map(|cell| (cell, letter))
        })
    }
}

/// Every failure surfaced by validation or placement.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GenerationError {
    /// More words were supplied than the board has rows.
    #[error("too many words were provided: {count} words for a {size}x{size} board")]
    TooManyWords {
        /// Number of words supplied.
        count: usize,
        /// Requested board size.
        size: u32,
    },
    /// Words contained characters outside `A-Z` and `a-z`.
    #[error("the following words contain characters other than a-z and A-Z: {words:?}")]
    IllegalCharacter {
        /// Offending words in input order.
        words: Vec<String>,
    },
    /// Words were longer than the board is wide.
    #[error("the following words are longer than the board size {size}: {words:?}")]
    WordTooLong {
        /// Offending words in input order.
        words: Vec<String>,
        /// Requested board size.
        size: u32,
    },
    /// A word had no letters at all.
    #[error("empty words cannot be hidden in the puzzle")]
    EmptyWord,
    /// No legal placement exists for a word given the grid so far.
    #[error("could not fit word `{word}` into the puzzle")]
    CannotFit {
        /// Word that failed to fit.
        word: String,
    },
    /// Intersection bias outside the unit interval.
    #[error("intersection bias {bias} must lie within 0.0..=1.0")]
    InvalidBias {
        /// Rejected bias value.
        bias: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::{CellCoord, Direction, GenerationError, PlacedWord};
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn opposites_negate_every_vector() {
        for direction in Direction::ALL {
            let opposite = direction.opposite();
            assert_eq!(opposite.dx(), -direction.dx(), "{direction:?}");
            assert_eq!(opposite.dy(), -direction.dy(), "{direction:?}");
            assert_eq!(opposite.opposite(), direction);
        }
    }

    #[test]
    fn directions_cover_every_non_zero_vector_once() {
        let mut vectors: Vec<(i32, i32)> = Direction::ALL
            .iter()
            .map(|direction| (direction.dx(), direction.dy()))
            .collect();
        vectors.sort_unstable();
        vectors.dedup();
        assert_eq!(vectors.len(), 8);
        assert!(!vectors.contains(&(0, 0)));
    }

    #[test]
    fn index_matches_position_in_scan_order() {
        for (position, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), position);
        }
    }

    #[test]
    fn collinear_covers_direction_and_opposite_only() {
        let collinear: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|candidate| Direction::East.is_collinear_with(*candidate))
            .collect();
        assert_eq!(collinear, vec![Direction::East, Direction::West]);
    }

    #[test]
    fn step_rejects_negative_components() {
        let origin = CellCoord::new(1, 0);
        assert_eq!(origin.step(Direction::East, 2), Some(CellCoord::new(3, 0)));
        assert_eq!(origin.step(Direction::West, 1), Some(CellCoord::new(0, 0)));
        assert_eq!(origin.step(Direction::West, 2), None);
        assert_eq!(origin.step(Direction::North, 1), None);
        assert_eq!(origin.step(Direction::North, -3), Some(CellCoord::new(1, 3)));
    }

    #[test]
    fn placed_word_cells_follow_direction() {
        let word = PlacedWord::new("CAT", CellCoord::new(2, 2), Direction::NorthWest);
        let cells: Vec<(CellCoord, char)> = word.cells().collect();
        assert_eq!(
            cells,
            vec![
                (CellCoord::new(2, 2), 'C'),
                (CellCoord::new(1, 1), 'A'),
                (CellCoord::new(0, 0), 'T'),
            ]
        );
    }

    #[test]
    fn cannot_fit_names_the_word() {
        let error = GenerationError::CannotFit {
            word: String::from("DOG"),
        };
        assert_eq!(error.to_string(), "could not fit word `DOG` into the puzzle");
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn placed_word_round_trips_through_bincode() {
        let word = PlacedWord::new("HELLO", CellCoord::new(0, 4), Direction::NorthEast);
        assert_round_trip(&word);
    }
}
