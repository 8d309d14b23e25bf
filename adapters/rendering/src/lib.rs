#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text and JSON presentations of a generated puzzle.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use wordsearch_core::{Direction, PlacedWord};
use wordsearch_world::Grid;

/// Placeholder drawn for cells that hold no letter.
pub const EMPTY_CELL: char = '.';

/// Renders the grid one row per line with cells separated by a space.
#[must_use]
pub fn render_grid(grid: &Grid) -> String {
    grid.rows()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the answer key, one placed word per line.
#[must_use]
pub fn render_key(words: &[PlacedWord]) -> String {
    let mut key = String::new();
    for word in words {
        let _ = writeln!(
            key,
            "{} {} {}",
            word.text(),
            word.anchor(),
            word.direction()
        );
    }
    key
}

fn render_row(row: &[Option<char>]) -> String {
    row.iter()
        .map(|cell| cell.unwrap_or(EMPTY_CELL).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialisable snapshot of a finished puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSnapshot {
    /// Width and height of the board.
    pub size: u32,
    /// Rows of the board; each character is one cell.
    pub rows: Vec<String>,
    /// Answer key in placement order.
    pub words: Vec<WordEntry>,
}

/// Answer key entry captured within a [`PuzzleSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Hidden word.
    pub word: String,
    /// Column of the first letter.
    pub column: u32,
    /// Row of the first letter.
    pub row: u32,
    /// Direction the word is written in.
    pub direction: Direction,
}

impl PuzzleSnapshot {
    /// Captures the grid and answer key.
    #[must_use]
    pub fn capture(grid: &Grid, words: &[PlacedWord]) -> Self {
        Self {
            size: grid.size(),
            rows: grid
                .rows()
                .map(|row| row.iter().map(|cell| cell.unwrap_or(EMPTY_CELL)).collect())
                .collect(),
            words: words
                .iter()
                .map(|word| WordEntry {
                    word: word.text().to_owned(),
                    column: word.anchor().column(),
                    row: word.anchor().row(),
                    direction: word.direction(),
                })
                .collect(),
        }
    }

    /// Encodes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsearch_core::CellCoord;

    fn sample() -> (Grid, Vec<PlacedWord>) {
        let mut grid = Grid::new(3);
        grid.commit("CAT", CellCoord::new(0, 0), Direction::East);
        grid.commit("AXE", CellCoord::new(1, 0), Direction::South);
        let words = vec![
            PlacedWord::new("CAT", CellCoord::new(0, 0), Direction::East),
            PlacedWord::new("AXE", CellCoord::new(1, 0), Direction::South),
        ];
        (grid, words)
    }

    #[test]
    fn grid_renders_space_separated_rows() {
        let (grid, _) = sample();
        assert_eq!(render_grid(&grid), "C A T\n. X .\n. E .");
    }

    #[test]
    fn key_lists_anchor_and_direction() {
        let (_, words) = sample();
        assert_eq!(
            render_key(&words),
            "CAT (0, 0) east\nAXE (1, 0) south\n"
        );
    }

    #[test]
    fn snapshot_serialises_rows_and_words() {
        let (grid, words) = sample();
        let snapshot = PuzzleSnapshot::capture(&grid, &words);

        assert_eq!(snapshot.rows, vec!["CAT", ".X.", ".E."]);
        let json = snapshot.to_json().expect("snapshot serialises");
        let restored: PuzzleSnapshot = serde_json::from_str(&json).expect("snapshot parses");
        assert_eq!(restored, snapshot);
        assert!(json.contains("\"direction\": \"South\""));
    }

    #[test]
    fn empty_grid_renders_nothing() {
        assert_eq!(render_grid(&Grid::new(0)), "");
        assert_eq!(render_key(&[]), "");
    }
}
