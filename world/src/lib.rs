#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative letter grid for the word search generator.
//!
//! The grid is the only mutable state touched during placement. It performs
//! no locking; callers drive it from a single thread and check
//! [`Grid::can_place`] before every [`Grid::commit`].

use wordsearch_core::{CellCoord, Direction};

/// Square board of optional uppercase letters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: u32,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates an empty `size`×`size` grid.
    #[must_use]
    pub fn new(size: u32) -> Self {
        let capacity_u64 = u64::from(size) * u64::from(size);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            size,
            cells: vec![None; capacity],
        }
    }

    /// Width and height of the board.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Reports whether the cell lies on the board.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.size && cell.row() < self.size
    }

    /// Letter stored at `cell`; `None` for empty or off-board cells.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<char> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Checks whether `word` can be written from `anchor` along `direction`.
    ///
    /// Every covered cell must be on the board and either empty or already
    /// holding the matching letter.
    #[must_use]
    pub fn can_place(&self, word: &str, anchor: CellCoord, direction: Direction) -> bool {
        word.chars().enumerate().all(|(offset, letter)| {
            anchor
                .step(direction, offset as i64)
                .filter(|cell| self.contains(*cell))
                .map_or(false, |cell| {
                    self.get(cell).map_or(true, |existing| existing == letter)
                })
        })
    }

    /// Writes `word` from `anchor` along `direction`.
    ///
    /// Callers must have confirmed [`Grid::can_place`] for the same arguments.
    pub fn commit(&mut self, word: &str, anchor: CellCoord, direction: Direction) {
        debug_assert!(
            self.can_place(word, anchor, direction),
            "commit requires a conflict-free placement"
        );
        for (offset, letter) in word.chars().enumerate() {
            let Some(cell) = anchor.step(direction, offset as i64) else {
                continue;
            };
            self.set(cell, letter);
        }
    }

    /// Reads `length` letters from `anchor` along `direction`.
    ///
    /// Returns `None` when the run leaves the board or crosses an empty cell.
    #[must_use]
    pub fn read(&self, anchor: CellCoord, direction: Direction, length: usize) -> Option<String> {
        (0..length)
            .map(|offset| {
                anchor
                    .step(direction, offset as i64)
                    .and_then(|cell| self.get(cell))
            })
            .collect()
    }

    /// Writes a single letter, ignoring off-board cells.
    ///
    /// Intended for background fill; placement goes through [`Grid::commit`].
    pub fn set(&mut self, cell: CellCoord, letter: char) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = Some(letter);
            }
        }
    }

    /// Cells that hold no letter yet, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.coords().filter(|cell| self.get(*cell).is_none())
    }

    /// Number of cells that already hold a letter.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> + '_ {
        let width = usize::try_from(self.size).unwrap_or(0).max(1);
        self.cells.chunks(width)
    }

    fn coords(&self) -> impl Iterator<Item = CellCoord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |column| CellCoord::new(column, row)))
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.contains(cell) {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.size).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}
