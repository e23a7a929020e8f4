//! Error types for the wordgrid puzzle engine.
//!
//! Organized by the stage that raises them: configuration checks,
//! generation, word construction, and per-word validation.

use std::error::Error;
use std::fmt;

/// Invalid puzzle configuration.
///
/// Raised fail-fast before any grid is allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_size` is zero or greater than `max_size`.
    InvalidSizeBounds {
        /// Configured lower bound.
        min: usize,
        /// Configured upper bound.
        max: usize,
    },
    /// A pinned size lies outside `[min, max]`.
    SizeOutOfRange {
        /// The offending size.
        size: usize,
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },
    /// A direction token could not be parsed.
    InvalidDirection {
        /// The token as supplied.
        token: String,
    },
    /// A difficulty level outside `1..=8`.
    InvalidLevel {
        /// The level as supplied.
        level: u8,
    },
    /// A direction set with no directions.
    EmptyDirectionSet,
    /// An alphabet with no alphabetic characters.
    EmptyAlphabet,
    /// An alphabet with fewer than two distinct letters.
    AlphabetTooSmall {
        /// Number of distinct letters found.
        len: usize,
    },
    /// A retry or word limit set to zero.
    InvalidLimit {
        /// Name of the limit.
        name: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSizeBounds { min, max } => {
                write!(f, "invalid size bounds: min {min}, max {max}")
            }
            Self::SizeOutOfRange { size, min, max } => {
                write!(f, "size {size} outside allowed range [{min}, {max}]")
            }
            Self::InvalidDirection { token } => write!(f, "invalid direction '{token}'"),
            Self::InvalidLevel { level } => {
                write!(f, "invalid difficulty level {level}, expected 1..=8")
            }
            Self::EmptyDirectionSet => write!(f, "direction set is empty"),
            Self::EmptyAlphabet => write!(f, "alphabet contains no letters"),
            Self::AlphabetTooSmall { len } => {
                write!(f, "alphabet needs at least 2 distinct letters, got {len}")
            }
            Self::InvalidLimit { name } => write!(f, "{name} must be greater than zero"),
        }
    }
}

impl Error for ConfigError {}

/// Errors raised while generating a puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The grid cannot hold the longest required word.
    SizeTooSmall {
        /// Grid size in use.
        size: usize,
        /// The word that does not fit.
        word: String,
        /// Its length in letters.
        len: usize,
    },
    /// `require_all_words` is set and some hidden words were not placed.
    MissingWords {
        /// Every required word left unplaced.
        words: Vec<String>,
    },
    /// An operation needs a size or words that do not exist yet.
    NotGenerated {
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// Generation was requested with no words at all.
    EmptyWordList,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeTooSmall { size, word, len } => {
                write!(f, "puzzle size {size} is too small for '{word}' ({len} letters)")
            }
            Self::MissingWords { words } => {
                write!(f, "could not place required words: {}", words.join(", "))
            }
            Self::NotGenerated { operation } => {
                write!(f, "puzzle not generated; '{operation}' needs a size and words")
            }
            Self::EmptyWordList => write!(f, "no words to place"),
        }
    }
}

impl Error for GenerateError {}

/// A word could not be constructed from its input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordError {
    /// The text was empty after trimming.
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "word text is empty"),
        }
    }
}

impl Error for WordError {}

/// A word rejected by a configured validator.
///
/// These are collected per generation and never abort placement of the
/// remaining words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordValidationError {
    /// The rejected word.
    pub word: String,
    /// Name of the validator that rejected it.
    pub validator: String,
    /// Human-readable reason.
    pub reason: String,
}

impl fmt::Display for WordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "word '{}' rejected by {}: {}",
            self.word, self.validator, self.reason
        )
    }
}

impl Error for WordValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_words_lists_every_word() {
        let e = GenerateError::MissingWords {
            words: vec!["CAT".into(), "DOG".into()],
        };
        assert_eq!(e.to_string(), "could not place required words: CAT, DOG");
    }

    #[test]
    fn size_error_names_the_word() {
        let e = GenerateError::SizeTooSmall {
            size: 5,
            word: "ELEPHANT".into(),
            len: 8,
        };
        assert!(e.to_string().contains("ELEPHANT"));
    }
}
