//! Default grid size from the word set.

use wordgrid_core::DirectionSet;

/// Side length below which no derived size goes (before clamping).
pub const MIN_DERIVED_LONGEST: usize = 10;

/// Word count above which the direction term starts to grow.
pub const WORDS_PER_STEP: usize = 15;

/// Derive a grid size for `word_count` words whose longest has
/// `longest` letters, placed along `directions`, clamped to
/// `[min_size, max_size]`.
///
/// The base is the longest word (at least
/// [`MIN_DERIVED_LONGEST`]), widened by `2 · log2(|directions|)` per
/// [`WORDS_PER_STEP`] words. Halves round to even.
pub fn calculate_size(
    word_count: usize,
    longest: usize,
    directions: DirectionSet,
    min_size: usize,
    max_size: usize,
) -> usize {
    let base = longest.max(MIN_DERIVED_LONGEST) as f64;
    let multiplier = if word_count > WORDS_PER_STEP {
        word_count as f64 / WORDS_PER_STEP as f64
    } else {
        1.0
    };
    let breadth = if directions.is_empty() {
        1.0
    } else {
        (directions.len() as f64).log2()
    };
    let size = (base + breadth * 2.0 * multiplier).round_ties_even() as usize;
    size.clamp(min_size, max_size.max(min_size))
}
