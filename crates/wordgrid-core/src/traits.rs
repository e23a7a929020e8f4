//! Extension points.

use std::fmt;

/// A pluggable word check run before placement.
///
/// Validators see each candidate word together with the words already
/// accepted in this generation, so set-level rules (such as rejecting
/// sub-words) can be expressed alongside per-word ones.
///
/// # Object safety
///
/// The trait is object-safe; puzzles hold `Box<dyn Validator>`.
pub trait Validator: fmt::Debug {
    /// Name reported in [`WordValidationError`](crate::WordValidationError).
    fn name(&self) -> &str;

    /// Check `word` against the words accepted so far.
    ///
    /// Returns `Err(reason)` to reject it.
    fn validate(&self, word: &str, accepted: &[&str]) -> Result<(), String>;
}
