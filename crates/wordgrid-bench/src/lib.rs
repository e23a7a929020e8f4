//! Benchmark profiles and utilities for the wordgrid puzzle generator.
//!
//! Provides pre-built [`PuzzleConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 20x20 grid, 25 words, all eight directions
//! - [`stress_profile`]: 50x50 grid, 100 words, all eight directions
//! - [`synthetic_words`]: deterministic word lists via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wordgrid_core::DirectionSet;
use wordgrid_engine::PuzzleConfig;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Build a reference benchmark profile: 20x20 grid, 25 words.
pub fn reference_profile(seed: u64) -> PuzzleConfig {
    PuzzleConfig::default()
        .with_words(synthetic_words(25, 4, 9, seed))
        .with_directions(DirectionSet::ALL)
        .with_size(20)
        .with_seed(seed)
}

/// Build a stress benchmark profile: 50x50 grid, 100 words (the default
/// word cap).
pub fn stress_profile(seed: u64) -> PuzzleConfig {
    PuzzleConfig::default()
        .with_words(synthetic_words(100, 5, 14, seed))
        .with_directions(DirectionSet::ALL)
        .with_size(50)
        .with_seed(seed)
}

/// `count` distinct random uppercase words of `min_len..=max_len`
/// letters.
///
/// Deterministic for a given seed. Words are not screened for
/// sub-words, so some may be refused by the default validators.
pub fn synthetic_words(count: usize, min_len: usize, max_len: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut words: Vec<String> = Vec::with_capacity(count);
    while words.len() < count {
        let len = rng.random_range(min_len..=max_len);
        let word: String = (0..len)
            .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
            .collect();
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}
