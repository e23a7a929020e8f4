//! Built-in word validators.

use wordgrid_core::Validator;

/// The four built-in validators, in the order they run.
pub fn default_validators() -> Vec<Box<dyn Validator>> {
    vec![
        Box::new(NoSingleLetterWords),
        Box::new(NoPunctuation),
        Box::new(NoPalindromes),
        Box::new(NoSubwords),
    ]
}

/// Rejects words of one letter.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSingleLetterWords;

impl Validator for NoSingleLetterWords {
    fn name(&self) -> &str {
        "NoSingleLetterWords"
    }

    fn validate(&self, word: &str, _accepted: &[&str]) -> Result<(), String> {
        if word.chars().count() > 1 {
            Ok(())
        } else {
            Err("single-letter word".into())
        }
    }
}

/// Rejects words containing ASCII punctuation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPunctuation;

impl Validator for NoPunctuation {
    fn name(&self) -> &str {
        "NoPunctuation"
    }

    fn validate(&self, word: &str, _accepted: &[&str]) -> Result<(), String> {
        match word.chars().find(char::is_ascii_punctuation) {
            Some(c) => Err(format!("contains punctuation '{c}'")),
            None => Ok(()),
        }
    }
}

/// Rejects words that read the same backwards.
///
/// A palindrome placed in the grid always has two readings, so it can
/// never be unique.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPalindromes;

impl Validator for NoPalindromes {
    fn name(&self) -> &str {
        "NoPalindromes"
    }

    fn validate(&self, word: &str, _accepted: &[&str]) -> Result<(), String> {
        let lower = word.to_lowercase();
        if lower.chars().eq(lower.chars().rev()) {
            Err("palindrome".into())
        } else {
            Ok(())
        }
    }
}

/// Rejects a word that contains, or is contained by, an accepted word or
/// its reversal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSubwords;

impl Validator for NoSubwords {
    fn name(&self) -> &str {
        "NoSubwords"
    }

    fn validate(&self, word: &str, accepted: &[&str]) -> Result<(), String> {
        let value = word.to_lowercase();
        let value_rev: String = value.chars().rev().collect();
        for existing in accepted.iter().filter(|w| !w.is_empty()) {
            let other = existing.to_lowercase();
            let other_rev: String = other.chars().rev().collect();
            if other.contains(&value)
                || other.contains(&value_rev)
                || value.contains(&other)
                || value.contains(&other_rev)
            {
                return Err(format!("overlaps with '{existing}'"));
            }
        }
        Ok(())
    }
}
