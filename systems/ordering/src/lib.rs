#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Orders words so the most constraining ones are placed first.

/// Uppercases `words` and sorts them by descending length.
///
/// The sort is stable: words of equal length keep their input order.
#[must_use]
pub fn order_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut ordered: Vec<String> = words
        .iter()
        .map(|word| word.as_ref().to_uppercase())
        .collect();
    ordered.sort_by(|left, right| right.chars().count().cmp(&left.chars().count()));
    ordered
}
