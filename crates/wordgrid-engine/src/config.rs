//! Puzzle configuration and validation.

use wordgrid_core::{Alphabet, ConfigError, DirectionSet};
use wordgrid_gen::GenerationLimits;

/// Complete configuration for constructing a [`Puzzle`](crate::Puzzle).
///
/// `validate()` checks every structural invariant; the puzzle calls it
/// on construction and whenever a setter changes a bound.
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleConfig {
    /// Pinned grid size. `None` derives one from the words.
    pub size: Option<usize>,
    /// Smallest allowed size. Default: 5.
    pub min_size: usize,
    /// Largest allowed size. Default: 50.
    pub max_size: usize,
    /// Maximum words placed per generation. Default: 100.
    pub max_puzzle_words: usize,
    /// Candidate positions tried per word. Default: 1000.
    pub max_fit_tries: usize,
    /// Letter draws per filler cell. Default: 100.
    pub max_fill_tries: usize,
    /// Directions for hidden words. Default: level 2 (NE, E, SE, S).
    pub directions: DirectionSet,
    /// Directions for secret words. `None` follows `directions`.
    pub secret_directions: Option<DirectionSet>,
    /// Fail generation when a hidden word cannot be placed.
    pub require_all_words: bool,
    /// Filler letters. Default: A-Z.
    pub alphabet: Alphabet,
    /// Hidden words, raw.
    pub words: Vec<String>,
    /// Secret words, raw.
    pub secret_words: Vec<String>,
    /// RNG seed. `None` draws one at construction.
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        let limits = GenerationLimits::default();
        Self {
            size: None,
            min_size: 5,
            max_size: 50,
            max_puzzle_words: limits.max_puzzle_words,
            max_fit_tries: limits.max_fit_tries,
            max_fill_tries: limits.max_fill_tries,
            directions: DirectionSet::level(2).unwrap_or(DirectionSet::ALL),
            secret_directions: None,
            require_all_words: false,
            alphabet: Alphabet::latin(),
            words: Vec::new(),
            secret_words: Vec::new(),
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Size bounds are ordered and non-zero.
        if self.min_size == 0 || self.min_size > self.max_size {
            return Err(ConfigError::InvalidSizeBounds {
                min: self.min_size,
                max: self.max_size,
            });
        }
        // 2. A pinned size sits inside them.
        if let Some(size) = self.size {
            self.check_size(size)?;
        }
        // 3. Direction sets are non-empty.
        if self.directions.is_empty() || self.secret_directions.is_some_and(|d| d.is_empty()) {
            return Err(ConfigError::EmptyDirectionSet);
        }
        // 4. The alphabet can vary.
        match self.alphabet.len() {
            0 => return Err(ConfigError::EmptyAlphabet),
            1 => return Err(ConfigError::AlphabetTooSmall { len: 1 }),
            _ => {}
        }
        // 5. Effort limits allow at least one try.
        for (name, value) in [
            ("max_puzzle_words", self.max_puzzle_words),
            ("max_fit_tries", self.max_fit_tries),
            ("max_fill_tries", self.max_fill_tries),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidLimit { name });
            }
        }
        Ok(())
    }

    /// Check `size` against `[min_size, max_size]`.
    pub fn check_size(&self, size: usize) -> Result<(), ConfigError> {
        if size < self.min_size || size > self.max_size {
            return Err(ConfigError::SizeOutOfRange {
                size,
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }

    /// Directions used for secret words.
    pub fn resolved_secret_directions(&self) -> DirectionSet {
        self.secret_directions.unwrap_or(self.directions)
    }

    /// Effort limits handed to the generator.
    pub fn limits(&self) -> GenerationLimits {
        GenerationLimits {
            max_puzzle_words: self.max_puzzle_words,
            max_fit_tries: self.max_fit_tries,
            max_fill_tries: self.max_fill_tries,
        }
    }

    /// Pin the size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set size bounds.
    pub fn with_size_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Set hidden-word directions.
    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    /// Set secret-word directions.
    pub fn with_secret_directions(mut self, directions: DirectionSet) -> Self {
        self.secret_directions = Some(directions);
        self
    }

    /// Add hidden words.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add secret words.
    pub fn with_secret_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secret_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Require every hidden word to be placed.
    pub fn with_require_all_words(mut self, require: bool) -> Self {
        self.require_all_words = require;
        self
    }

    /// Set the filler alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the per-word placement try cap.
    pub fn with_max_fit_tries(mut self, tries: usize) -> Self {
        self.max_fit_tries = tries;
        self
    }

    /// Set the per-cell filler draw cap.
    pub fn with_max_fill_tries(mut self, tries: usize) -> Self {
        self.max_fill_tries = tries;
        self
    }

    /// Set the word cap.
    pub fn with_max_puzzle_words(mut self, words: usize) -> Self {
        self.max_puzzle_words = words;
        self
    }

    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
