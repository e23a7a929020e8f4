//! Filler alphabet.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The set of characters used for filler cells.
///
/// Built from arbitrary text: non-alphabetic characters are dropped,
/// letters are upper-cased, and duplicates are removed keeping first
/// occurrence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from `text`.
    ///
    /// Returns `Err(ConfigError::EmptyAlphabet)` if no letters remain, or
    /// `Err(ConfigError::AlphabetTooSmall)` if only one does.
    pub fn new(text: &str) -> Result<Self, ConfigError> {
        let mut letters: Vec<char> = Vec::new();
        for c in text
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase)
        {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }
        match letters.len() {
            0 => Err(ConfigError::EmptyAlphabet),
            1 => Err(ConfigError::AlphabetTooSmall { len: 1 }),
            _ => Ok(Self { letters }),
        }
    }

    /// The upper-case Latin alphabet `A..=Z`.
    pub fn latin() -> Self {
        Self {
            letters: ('A'..='Z').collect(),
        }
    }

    /// Letters in insertion order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of distinct letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `c` is one of the letters.
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

impl FromStr for Alphabet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
