//! Reusable word lists, validators and generators for tests.
//!
//! - [`ANIMALS`] and [`VOCAB`]: word lists free of sub-word overlaps.
//! - [`CountingValidator`]: accepts everything, counting calls.
//! - [`RejectContaining`]: rejects words holding a given letter.
//! - [`FailingGenerator`]: always fails with a chosen error.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::RngCore;
use wordgrid_core::{GenerateError, Validator};
use wordgrid_gen::{GenerateOutcome, GenerateRequest, Generator};

/// Short animal names; no entry contains another, forwards or reversed.
pub const ANIMALS: &[&str] = &[
    "CAT", "DOG", "PIG", "COW", "HEN", "FOX", "OWL", "EMU", "YAK", "BEE",
];

/// Longer vocabulary with no sub-words and no palindromes.
pub const VOCAB: &[&str] = &[
    "ANCHOR", "BRIDGE", "CANDLE", "DESERT", "EMPIRE", "FOREST", "GARDEN", "HARBOR", "ISLAND",
    "JUNGLE", "KETTLE", "LANTERN", "MEADOW", "NEEDLE", "ORCHID", "PLANET", "QUIVER", "RIBBON",
    "SADDLE", "TUNDRA",
];

/// Accepts every word and counts how often it was asked.
#[derive(Debug, Default)]
pub struct CountingValidator {
    calls: AtomicUsize,
}

impl CountingValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `validate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Validator for CountingValidator {
    fn name(&self) -> &str {
        "Counting"
    }

    fn validate(&self, _word: &str, _accepted: &[&str]) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Rejects any word containing `letter`.
#[derive(Clone, Copy, Debug)]
pub struct RejectContaining(pub char);

impl Validator for RejectContaining {
    fn name(&self) -> &str {
        "RejectContaining"
    }

    fn validate(&self, word: &str, _accepted: &[&str]) -> Result<(), String> {
        if word.contains(self.0) {
            Err(format!("contains '{}'", self.0))
        } else {
            Ok(())
        }
    }
}

/// A generator that fails every call with the same error.
#[derive(Debug)]
pub struct FailingGenerator {
    error: GenerateError,
    calls: AtomicUsize,
}

impl FailingGenerator {
    pub fn new(error: GenerateError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Generator for FailingGenerator {
    fn name(&self) -> &str {
        "Failing"
    }

    fn generate(
        &self,
        _request: GenerateRequest<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<GenerateOutcome, GenerateError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Err(self.error.clone())
    }
}
