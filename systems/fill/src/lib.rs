#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Background fill for cells the placement engine left empty.

use rand::Rng;
use wordsearch_world::Grid;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Writes a uniformly random uppercase letter into every empty cell.
///
/// Cells are visited in row-major order and placed letters are left
/// untouched. Returns the number of cells that were filled.
pub fn fill_background<R>(grid: &mut Grid, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let empty: Vec<_> = grid.empty_cells().collect();
    for cell in &empty {
        let letter = char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
        grid.set(*cell, letter);
    }
    empty.len()
}
