#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Input checks performed before the placement engine runs.
//!
//! The placement engine trusts its input: every word non-empty, made of
//! English letters only, no longer than the board, and no more words than
//! the board is wide. [`validate`] establishes exactly those guarantees.

use log::debug;
use wordsearch_core::GenerationError;

/// Checks a word list against the board size.
///
/// Checks run in a fixed order: word count, illegal characters, word length,
/// empty words. The first failing check is reported; the character and
/// length checks list every offending word.
pub fn validate<S: AsRef<str>>(words: &[S], size: u32) -> Result<(), GenerationError> {
    let size_limit = usize::try_from(size).unwrap_or(usize::MAX);
    if words.len() > size_limit {
        return Err(GenerationError::TooManyWords {
            count: words.len(),
            size,
        });
    }

    let illegal: Vec<String> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| !word.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_owned)
        .collect();
    if !illegal.is_empty() {
        return Err(GenerationError::IllegalCharacter { words: illegal });
    }

    let too_long: Vec<String> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| word.len() > size_limit)
        .map(str::to_owned)
        .collect();
    if !too_long.is_empty() {
        return Err(GenerationError::WordTooLong {
            words: too_long,
            size,
        });
    }

    if words.iter().any(|word| word.as_ref().is_empty()) {
        return Err(GenerationError::EmptyWord);
    }

    debug!("validated {} words for a {size}x{size} board", words.len());
    Ok(())
}
