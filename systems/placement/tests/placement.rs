use std::collections::HashMap;

use rand::{rngs::mock::StepRng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordsearch_core::{CellCoord, Direction, GenerationError, PlacedWord};
use wordsearch_system_placement::{
    find_intersections, place, Engine, Placement, PlacementConfig,
};
use wordsearch_world::Grid;

fn zero_source() -> StepRng {
    StepRng::new(0, 0)
}

fn assert_words_read_back(placement: &Placement) {
    for word in placement.words() {
        let read = placement.grid().read(
            word.anchor(),
            word.direction(),
            word.text().chars().count(),
        );
        assert_eq!(
            read.as_deref(),
            Some(word.text()),
            "{} should read back from {} heading {}",
            word.text(),
            word.anchor(),
            word.direction(),
        );
    }
}

fn assert_no_conflicts(placement: &Placement) {
    let mut claimed: HashMap<CellCoord, (char, &str)> = HashMap::new();
    for word in placement.words() {
        for (cell, letter) in word.cells() {
            if let Some((existing, owner)) = claimed.insert(cell, (letter, word.text())) {
                assert_eq!(
                    existing,
                    letter,
                    "{owner} and {} disagree at {cell}",
                    word.text(),
                );
            }
        }
    }
}

#[test]
fn single_word_lands_on_first_row_with_zero_source() {
    let placement = place(&["cat"], 3, &mut zero_source()).expect("CAT fits on a 3x3 board");

    assert_eq!(
        placement.words(),
        &[PlacedWord::new("CAT", CellCoord::new(0, 0), Direction::East)]
    );
    let row: Vec<Option<char>> = placement
        .grid()
        .rows()
        .next()
        .expect("grid has a first row")
        .to_vec();
    assert_eq!(row, vec![Some('C'), Some('A'), Some('T')]);
    assert_eq!(placement.grid().filled_count(), 3);
}

#[test]
fn unrelated_word_takes_next_free_row() {
    let placement =
        place(&["CAT", "DOG"], 3, &mut zero_source()).expect("two rows are available");

    assert_eq!(
        placement.words(),
        &[
            PlacedWord::new("CAT", CellCoord::new(0, 0), Direction::East),
            PlacedWord::new("DOG", CellCoord::new(0, 1), Direction::East),
        ]
    );
    assert_no_conflicts(&placement);
}

#[test]
fn full_board_without_shared_letters_cannot_fit() {
    let result = place(&["ABC", "DEF", "GHI", "XYZ"], 3, &mut zero_source());

    assert_eq!(
        result,
        Err(GenerationError::CannotFit {
            word: String::from("XYZ"),
        })
    );
}

#[test]
fn second_letter_on_single_cell_board_cannot_fit() {
    let result = place(&["A", "B"], 1, &mut zero_source());

    assert_eq!(
        result,
        Err(GenerationError::CannotFit {
            word: String::from("B"),
        })
    );
}

#[test]
fn repeated_letter_can_share_a_single_cell() {
    let placement = place(&["A", "a"], 1, &mut zero_source()).expect("same letter overlaps");

    assert_eq!(
        placement.words(),
        &[
            PlacedWord::new("A", CellCoord::new(0, 0), Direction::East),
            PlacedWord::new("A", CellCoord::new(0, 0), Direction::NorthEast),
        ]
    );
}

#[test]
fn anagram_crosses_through_shared_letter() {
    let mut grid = Grid::new(5);
    grid.commit("CAT", CellCoord::new(0, 0), Direction::East);
    let placed = [PlacedWord::new("CAT", CellCoord::new(0, 0), Direction::East)];
    assert!(
        !find_intersections("ACT", &placed, &grid).is_empty(),
        "ACT shares every letter with CAT"
    );

    let placement = place(&["CAT", "ACT"], 5, &mut zero_source()).expect("ACT fits");

    assert_eq!(
        placement.words()[1],
        PlacedWord::new("ACT", CellCoord::new(1, 0), Direction::South)
    );
    assert_eq!(
        placement
            .grid()
            .read(CellCoord::new(0, 0), Direction::East, 3)
            .as_deref(),
        Some("CAT"),
        "crossing must not overwrite CAT"
    );
    assert_eq!(placement.grid().filled_count(), 5);
    assert_no_conflicts(&placement);
}

#[test]
fn empty_word_list_yields_empty_grid() {
    let words: [&str; 0] = [];
    let placement = place(&words, 5, &mut zero_source()).expect("nothing to place");

    assert!(placement.words().is_empty());
    assert_eq!(placement.grid().size(), 5);
    assert_eq!(placement.grid().filled_count(), 0);
}

#[test]
fn longest_words_are_placed_first() {
    let placement = place(&["ox", "zebra", "cat", "emu"], 6, &mut zero_source())
        .expect("small words fit on a 6x6 board");

    let order: Vec<&str> = placement.words().iter().map(PlacedWord::text).collect();
    assert_eq!(order, vec!["ZEBRA", "CAT", "EMU", "OX"]);
}

#[test]
fn seeded_runs_keep_every_word_readable() {
    let words = ["hello", "world", "rust", "grid", "word", "puzzle"];

    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let placement = place(&words, 10, &mut rng)
            .unwrap_or_else(|error| panic!("seed {seed} failed: {error}"));

        assert_eq!(placement.words().len(), words.len(), "seed {seed}");
        assert_words_read_back(&placement);
        assert_no_conflicts(&placement);
    }
}

#[test]
fn full_intersection_bias_crosses_whenever_possible() {
    let engine = Engine::new(PlacementConfig::new(1.0).expect("bias within range"));

    let placement = engine
        .place(&["CAT", "ACT"], 5, &mut zero_source())
        .expect("ACT fits");

    let cat_cells: Vec<CellCoord> = placement.words()[0].cells().map(|(cell, _)| cell).collect();
    assert!(
        placement.words()[1]
            .cells()
            .any(|(cell, _)| cat_cells.contains(&cell)),
        "ACT should cross CAT"
    );
}

#[test]
fn zero_intersection_bias_ignores_crossings_when_free_runs_exist() {
    let engine = Engine::new(PlacementConfig::new(0.0).expect("bias within range"));

    let placement = engine
        .place(&["CAT", "ACT"], 5, &mut zero_source())
        .expect("ACT fits");

    assert_eq!(
        placement.words()[1],
        PlacedWord::new("ACT", CellCoord::new(0, 1), Direction::East)
    );
}
