//! The puzzle orchestrator.
//!
//! [`Puzzle`] is the user-facing API. It owns the word set, masks and
//! configuration, and keeps the most recent generation (grid, placements,
//! rejections and metrics).
//!
//! # Regeneration model
//!
//! Every mutator rebuilds the puzzle from scratch: words lose their
//! placements, the grid is discarded and the configured generator runs
//! again with a fresh `ChaCha8Rng` seeded from [`Puzzle::seed`]. Nothing
//! is patched incrementally, so identical configuration and seed always
//! give identical output.
//!
//! # Sizing
//!
//! Until a size is pinned with [`set_size`](Puzzle::set_size) (or through
//! [`PuzzleConfig::size`]), every generation derives one with
//! [`calculate_size`]. A pin persists across word edits until
//! [`recalculate_size`](Puzzle::recalculate_size).
//!
//! # Masks
//!
//! Masks composite in the order applied onto an all-active matrix. When
//! the size changes the matrix is rebuilt: non-static masks are rendered
//! again at the new size, static masks are only re-applied if they were
//! rendered at that size and are skipped otherwise. Whole-matrix
//! operations (invert, flips, transpose) act on the accumulated matrix
//! and are lost when it is rebuilt.

use std::time::Instant;

use indexmap::IndexMap;
use log::{debug, trace, warn};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordgrid_core::{
    normalize, split_words, Alphabet, BoundingBox, ConfigError, DirectionSet, GenerateError,
    Grid, Key, MaskGrid, Validator, Word, WordColor, WordValidationError,
};
use wordgrid_gen::{GenerateRequest, Generator, WordSearchGenerator};
use wordgrid_mask::Mask;

use crate::config::PuzzleConfig;
use crate::error::PuzzleError;
use crate::metrics::GenerationMetrics;
use crate::size::calculate_size;
use crate::validators::default_validators;

/// Salt mixed into the seed when sampling random words.
const RANDOM_WORDS_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

// ── Puzzle ─────────────────────────────────────────────────────────

/// A word-search puzzle and its most recent generation.
///
/// Not reentrant: all mutators take `&mut self`. Use separate instances
/// for concurrent generation.
///
/// # Example
///
/// ```ignore
/// let mut puzzle = Puzzle::new(PuzzleConfig::default().with_words(["cat", "dog"]))?;
/// puzzle.apply_mask(Mask::new(Circle::new()))?;
/// for row in puzzle.cropped_grid()? {
///     // render
/// }
/// ```
#[derive(Debug)]
pub struct Puzzle {
    config: PuzzleConfig,
    words: IndexMap<String, Word>,
    size: Option<usize>,
    masks: Vec<Mask>,
    mask: Option<MaskGrid>,
    validators: Vec<Box<dyn Validator>>,
    generator: Box<dyn Generator>,
    seed: u64,
    grid: Option<Grid>,
    rejected: Vec<WordValidationError>,
    metrics: GenerationMetrics,
}

impl Puzzle {
    /// Build a puzzle with the default validators and generator, and
    /// generate it if `config` lists any words.
    pub fn new(config: PuzzleConfig) -> Result<Self, PuzzleError> {
        Self::with_parts(
            config,
            default_validators(),
            Box::new(WordSearchGenerator::new()),
        )
    }

    /// Build a puzzle with explicit validators and generator.
    pub fn with_parts(
        config: PuzzleConfig,
        validators: Vec<Box<dyn Validator>>,
        generator: Box<dyn Generator>,
    ) -> Result<Self, PuzzleError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let hidden = config.words.clone();
        let secret = config.secret_words.clone();
        let pinned = config.size;

        let mut puzzle = Self {
            config,
            words: IndexMap::new(),
            size: None,
            masks: Vec::new(),
            mask: None,
            validators,
            generator,
            seed,
            grid: None,
            rejected: Vec::new(),
            metrics: GenerationMetrics::default(),
        };
        for text in hidden.iter().flat_map(|w| split_words(w)) {
            puzzle.insert_word(&text, false)?;
        }
        for text in secret.iter().flat_map(|w| split_words(w)) {
            puzzle.insert_word(&text, true)?;
        }
        if let Some(size) = pinned {
            puzzle.resize(size)?;
        }
        puzzle.regenerate()?;
        Ok(puzzle)
    }

    // ── Generation ─────────────────────────────────────────────────

    /// Regenerate from the current state.
    ///
    /// # Errors
    ///
    /// [`GenerateError::EmptyWordList`] with no words,
    /// [`GenerateError::SizeTooSmall`] when the longest hidden word does
    /// not fit, and [`GenerateError::MissingWords`] when
    /// `require_all_words` is set and a hidden word was not placed. On
    /// any error the previous grid is discarded and every word is
    /// unplaced.
    pub fn generate(&mut self) -> Result<(), PuzzleError> {
        if self.words.is_empty() {
            self.clear_output();
            return Err(GenerateError::EmptyWordList.into());
        }
        if self.config.size.is_none() {
            let derived = self.derived_size();
            self.resize(derived)?;
        }
        let (Some(size), Some(mask)) = (self.size, self.mask.as_ref()) else {
            return Err(GenerateError::NotGenerated {
                operation: "generate",
            }
            .into());
        };

        let started = Instant::now();
        let active_cells = mask.active_count();
        let mut words: Vec<Word> = self.words.values().cloned().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let result = self.generator.generate(
            GenerateRequest {
                size,
                mask,
                words: &mut words,
                directions: self.config.directions,
                secret_directions: self.config.resolved_secret_directions(),
                alphabet: &self.config.alphabet,
                validators: &self.validators,
                limits: self.config.limits(),
            },
            &mut rng,
        );
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("generation failed: {e}");
                self.clear_output();
                return Err(e.into());
            }
        };

        for (slot, word) in self.words.values_mut().zip(words) {
            *slot = word;
        }
        self.metrics = GenerationMetrics::from_outcome(
            &outcome,
            active_cells,
            started.elapsed().as_micros() as u64,
        );
        self.rejected = outcome.placement.rejected;

        if self.config.require_all_words {
            let missing: Vec<String> = self
                .words
                .values()
                .filter(|w| !w.is_secret() && !w.is_placed())
                .filter(|w| !self.rejected.iter().any(|r| r.word == w.text()))
                .map(|w| w.text().to_string())
                .collect();
            if !missing.is_empty() {
                self.clear_output();
                return Err(GenerateError::MissingWords { words: missing }.into());
            }
        }

        debug!(
            "puzzle size {size}, seed {}: {} placed, {} unplaced, {} rejected in {}us",
            self.seed,
            self.metrics.words_placed,
            self.metrics.words_unplaced,
            self.metrics.words_rejected,
            self.metrics.total_us
        );
        self.grid = Some(outcome.grid);
        Ok(())
    }

    /// Generate if there are words; otherwise just drop stale output.
    fn regenerate(&mut self) -> Result<(), PuzzleError> {
        if self.words.is_empty() {
            self.clear_output();
            return Ok(());
        }
        self.generate()
    }

    fn clear_output(&mut self) {
        self.grid = None;
        self.rejected.clear();
        self.metrics = GenerationMetrics::default();
        for word in self.words.values_mut() {
            word.clear_placement();
        }
    }

    fn derived_size(&self) -> usize {
        let longest = self.words.values().map(Word::len).max().unwrap_or(0);
        calculate_size(
            self.words.len(),
            longest,
            self.config.directions,
            self.config.min_size,
            self.config.max_size,
        )
    }

    // ── Words ──────────────────────────────────────────────────────

    fn insert_word(&mut self, text: &str, secret: bool) -> Result<(), PuzzleError> {
        let word = Word::new(text, secret)?;
        match self.words.get_mut(word.text()) {
            Some(existing) => existing.set_secret(secret),
            None => {
                let mut word = word;
                word.set_color(word_color(self.seed, word.text()));
                self.words.insert(word.text().to_string(), word);
            }
        }
        Ok(())
    }

    fn add(&mut self, input: &str, secret: bool) -> Result<(), PuzzleError> {
        for text in split_words(input) {
            self.insert_word(&text, secret)?;
        }
        self.regenerate()
    }

    /// Add hidden words from free text (split on commas and whitespace).
    ///
    /// Re-adding an existing word makes it hidden.
    pub fn add_words(&mut self, input: &str) -> Result<(), PuzzleError> {
        self.add(input, false)
    }

    /// Add secret words. Re-adding an existing word makes it secret.
    pub fn add_secret_words(&mut self, input: &str) -> Result<(), PuzzleError> {
        self.add(input, true)
    }

    /// Remove words. Unknown words are ignored.
    pub fn remove_words(&mut self, input: &str) -> Result<(), PuzzleError> {
        for text in split_words(input) {
            self.words.shift_remove(&text);
        }
        self.regenerate()
    }

    /// Replace the whole word set.
    pub fn replace_words(&mut self, input: &str, secret: bool) -> Result<(), PuzzleError> {
        self.words.clear();
        self.add(input, secret)
    }

    /// Add up to `count` words drawn from `pool`, skipping words already
    /// present and words longer than the current size.
    ///
    /// Returns the number added.
    pub fn add_random_words(&mut self, pool: &[&str], count: usize) -> Result<usize, PuzzleError> {
        let size = self.size.ok_or(GenerateError::NotGenerated {
            operation: "add_random_words",
        })?;
        let mut candidates: Vec<String> = Vec::new();
        for text in pool.iter().map(|w| normalize(w)) {
            if !text.is_empty()
                && text.chars().count() <= size
                && !self.words.contains_key(&text)
                && !candidates.contains(&text)
            {
                candidates.push(text);
            }
        }
        let mut rng =
            ChaCha8Rng::seed_from_u64(self.seed ^ RANDOM_WORDS_SALT ^ self.words.len() as u64);
        let picked: Vec<String> = candidates.choose_multiple(&mut rng, count).cloned().collect();
        for text in &picked {
            self.insert_word(text, false)?;
        }
        trace!("added {} random words", picked.len());
        self.regenerate()?;
        Ok(picked.len())
    }

    // ── Configuration ──────────────────────────────────────────────

    /// Pin the grid size.
    pub fn set_size(&mut self, size: usize) -> Result<(), PuzzleError> {
        self.config.check_size(size)?;
        self.config.size = Some(size);
        self.resize(size)?;
        self.regenerate()
    }

    /// Unpin the size and derive it from the words again.
    pub fn recalculate_size(&mut self) -> Result<(), PuzzleError> {
        self.config.size = None;
        self.regenerate()
    }

    /// Set hidden-word directions.
    pub fn set_directions(&mut self, directions: DirectionSet) -> Result<(), PuzzleError> {
        if directions.is_empty() {
            return Err(ConfigError::EmptyDirectionSet.into());
        }
        self.config.directions = directions;
        self.regenerate()
    }

    /// Set secret-word directions.
    pub fn set_secret_directions(&mut self, directions: DirectionSet) -> Result<(), PuzzleError> {
        if directions.is_empty() {
            return Err(ConfigError::EmptyDirectionSet.into());
        }
        self.config.secret_directions = Some(directions);
        self.regenerate()
    }

    /// Require every hidden word to be placed.
    pub fn set_require_all_words(&mut self, require: bool) -> Result<(), PuzzleError> {
        self.config.require_all_words = require;
        self.regenerate()
    }

    /// Replace the filler alphabet.
    pub fn set_alphabet(&mut self, alphabet: Alphabet) -> Result<(), PuzzleError> {
        if alphabet.len() < 2 {
            return Err(ConfigError::AlphabetTooSmall {
                len: alphabet.len(),
            }
            .into());
        }
        self.config.alphabet = alphabet;
        self.regenerate()
    }

    /// Replace the validators.
    pub fn set_validators(&mut self, validators: Vec<Box<dyn Validator>>) -> Result<(), PuzzleError> {
        self.validators = validators;
        self.regenerate()
    }

    /// Replace the generation strategy.
    pub fn set_generator(&mut self, generator: Box<dyn Generator>) -> Result<(), PuzzleError> {
        self.generator = generator;
        self.regenerate()
    }

    // ── Masks ──────────────────────────────────────────────────────

    /// Render `mask` at the current size, composite it and regenerate.
    pub fn apply_mask(&mut self, mask: Mask) -> Result<(), PuzzleError> {
        self.composite(vec![mask])?;
        self.regenerate()
    }

    /// Apply several masks in order, regenerating once.
    ///
    /// All or nothing: if any mask fails to render or apply, the puzzle
    /// keeps its previous mask, mask list and grid.
    pub fn apply_masks(&mut self, masks: impl IntoIterator<Item = Mask>) -> Result<(), PuzzleError> {
        self.composite(masks.into_iter().collect())?;
        self.regenerate()
    }

    fn composite(&mut self, mut masks: Vec<Mask>) -> Result<(), PuzzleError> {
        let (Some(size), Some(current)) = (self.size, self.mask.as_ref()) else {
            return Err(GenerateError::NotGenerated {
                operation: "apply_mask",
            }
            .into());
        };
        let mut acc = current.clone();
        for mask in masks.iter_mut() {
            mask.render(size)?;
            mask.apply_to(&mut acc)?;
            trace!("applied {} ({})", mask.name(), mask.method());
        }
        if acc.is_blank() {
            warn!("masks leave no active cells at size {size}");
        }
        self.mask = Some(acc);
        self.masks.extend(masks);
        Ok(())
    }

    /// Drop every mask.
    pub fn remove_masks(&mut self) -> Result<(), PuzzleError> {
        self.masks.clear();
        if let Some(size) = self.size {
            self.mask = Some(MaskGrid::all_active(size));
        }
        self.regenerate()
    }

    /// Drop static masks and rebuild from the rest.
    pub fn remove_static_masks(&mut self) -> Result<(), PuzzleError> {
        self.masks.retain(|m| !m.is_static());
        self.reapply_masks()?;
        self.regenerate()
    }

    /// Swap active and inactive cells.
    pub fn invert_mask(&mut self) -> Result<(), PuzzleError> {
        self.transform_mask("invert_mask", MaskGrid::invert)
    }

    /// Mirror the mask left to right.
    pub fn flip_mask_horizontal(&mut self) -> Result<(), PuzzleError> {
        self.transform_mask("flip_mask_horizontal", MaskGrid::flip_horizontal)
    }

    /// Mirror the mask top to bottom.
    pub fn flip_mask_vertical(&mut self) -> Result<(), PuzzleError> {
        self.transform_mask("flip_mask_vertical", MaskGrid::flip_vertical)
    }

    /// Transpose the mask across its main diagonal.
    pub fn transpose_mask(&mut self) -> Result<(), PuzzleError> {
        self.transform_mask("transpose_mask", MaskGrid::transpose)
    }

    fn transform_mask(
        &mut self,
        operation: &'static str,
        f: fn(&mut MaskGrid),
    ) -> Result<(), PuzzleError> {
        let mask = self
            .mask
            .as_mut()
            .ok_or(GenerateError::NotGenerated { operation })?;
        f(mask);
        self.regenerate()
    }

    fn resize(&mut self, size: usize) -> Result<(), PuzzleError> {
        if self.size == Some(size) && self.mask.is_some() {
            return Ok(());
        }
        trace!("resizing to {size}");
        self.size = Some(size);
        self.reapply_masks()
    }

    fn reapply_masks(&mut self) -> Result<(), PuzzleError> {
        let Some(size) = self.size else {
            return Ok(());
        };
        let mut acc = MaskGrid::all_active(size);
        for mask in self.masks.iter_mut() {
            if mask.is_static() && mask.rendered_size() != Some(size) {
                trace!("static mask {} skipped at size {size}", mask.name());
                continue;
            }
            mask.ensure_rendered(size)?;
            mask.apply_to(&mut acc)?;
        }
        self.mask = Some(acc);
        Ok(())
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Seed used for every generation of this puzzle.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current size, once known.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// Whether the size is pinned.
    pub fn is_size_pinned(&self) -> bool {
        self.config.size.is_some()
    }

    /// Current configuration.
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Hidden-word directions.
    pub fn directions(&self) -> DirectionSet {
        self.config.directions
    }

    /// Secret-word directions.
    pub fn secret_directions(&self) -> DirectionSet {
        self.config.resolved_secret_directions()
    }

    /// The generated grid.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// The solution key, in word-set order.
    pub fn key(&self) -> Key {
        Key::from_words(self.words.values())
    }

    /// The accumulated activation matrix.
    pub fn mask(&self) -> Option<&MaskGrid> {
        self.mask.as_ref()
    }

    /// Applied masks, in order.
    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }

    /// Whether at least one mask is applied.
    ///
    /// True even when the masks leave every cell active, as an
    /// [`Additive`](wordgrid_mask::MaskMethod::Additive) mask alone does.
    pub fn masked(&self) -> bool {
        !self.masks.is_empty()
    }

    /// Tight box around the active cells. `None` before a size exists or
    /// when no cell is active.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.mask.as_ref().and_then(MaskGrid::bounding_box)
    }

    /// The grid cropped to [`bounding_box`](Self::bounding_box). Empty
    /// when no cell is active.
    pub fn cropped_grid(&self) -> Result<Vec<Vec<Option<char>>>, PuzzleError> {
        let grid = self.grid.as_ref().ok_or(GenerateError::NotGenerated {
            operation: "cropped_grid",
        })?;
        Ok(self
            .bounding_box()
            .map(|bbox| grid.crop(&bbox))
            .unwrap_or_default())
    }

    /// The key with start cells relative to the crop's top-left corner.
    pub fn cropped_key(&self) -> Result<Key, PuzzleError> {
        if self.grid.is_none() {
            return Err(GenerateError::NotGenerated {
                operation: "cropped_key",
            }
            .into());
        }
        let key = self.key();
        Ok(match self.bounding_box() {
            Some(bbox) => key.cropped(&bbox),
            None => key,
        })
    }

    /// Every word, in word-set order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    /// Look up a word by (normalized) text.
    pub fn word(&self, text: &str) -> Option<&Word> {
        self.words.get(&normalize(text))
    }

    /// Words with a placement.
    pub fn placed_words(&self) -> impl Iterator<Item = &Word> {
        self.words().filter(|w| w.is_placed())
    }

    /// Words without a placement.
    pub fn unplaced_words(&self) -> impl Iterator<Item = &Word> {
        self.words().filter(|w| !w.is_placed())
    }

    /// Non-secret words.
    pub fn hidden_words(&self) -> impl Iterator<Item = &Word> {
        self.words().filter(|w| !w.is_secret())
    }

    /// Secret words.
    pub fn secret_words(&self) -> impl Iterator<Item = &Word> {
        self.words().filter(|w| w.is_secret())
    }

    /// Words refused by validators in the last generation.
    pub fn rejected(&self) -> &[WordValidationError] {
        &self.rejected
    }

    /// Metrics from the last generation.
    pub fn metrics(&self) -> &GenerationMetrics {
        &self.metrics
    }

    /// Name of the generation strategy.
    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }
}

/// Stable 64-bit FNV-1a hash.
fn fnv1a(text: &str) -> u64 {
    text.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// A display colour derived from the puzzle seed and the word text.
fn word_color(seed: u64, text: &str) -> WordColor {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ fnv1a(text));
    let h = rng.random::<f64>() * 360.0;
    let s = f64::from(rng.random_range(42u8..=98)) / 100.0;
    let v = f64::from(rng.random_range(40u8..=90)) / 100.0;
    WordColor::from_hsv(h, s, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::Position;
    use wordgrid_mask::shapes::{Circle, Pentagon};
    use wordgrid_mask::{Bitmap, MaskError, MaskMethod};

    fn puzzle(words: &[&str]) -> Puzzle {
        Puzzle::new(PuzzleConfig::default().with_words(words.iter().copied()).with_seed(7)).unwrap()
    }

    #[test]
    fn new_without_words_does_not_generate() {
        let p = Puzzle::new(PuzzleConfig::default().with_seed(1)).unwrap();
        assert!(p.grid().is_none());
        assert!(p.size().is_none());
        assert_eq!(p.seed(), 1);
    }

    #[test]
    fn new_with_words_generates_at_derived_size() {
        let p = puzzle(&["cat", "dog", "pig"]);
        assert_eq!(p.size(), Some(14));
        assert!(!p.is_size_pinned());
        assert_eq!(p.grid().unwrap().size(), 14);
        assert_eq!(p.placed_words().count(), 3);
    }

    #[test]
    fn generate_without_words_is_an_error() {
        let mut p = Puzzle::new(PuzzleConfig::default()).unwrap();
        assert_eq!(
            p.generate(),
            Err(PuzzleError::Generate(GenerateError::EmptyWordList))
        );
    }

    #[test]
    fn words_are_normalized_and_deduplicated() {
        let p = puzzle(&["cat, dog", " Cat", "PIG\nhen"]);
        let texts: Vec<&str> = p.words().map(Word::text).collect();
        assert_eq!(texts, ["CAT", "DOG", "PIG", "HEN"]);
    }

    #[test]
    fn re_adding_a_word_replaces_its_secret_flag() {
        let mut p = puzzle(&["cat", "dog"]);
        p.add_secret_words("cat").unwrap();
        assert!(p.word("cat").unwrap().is_secret());
        assert_eq!(p.hidden_words().count(), 1);
        p.add_words("cat").unwrap();
        assert!(!p.word("CAT").unwrap().is_secret());
    }

    #[test]
    fn remove_and_replace_words() {
        let mut p = puzzle(&["cat", "dog", "pig"]);
        p.remove_words("dog, owl").unwrap();
        assert_eq!(p.words().count(), 2);
        p.replace_words("ant bee", true).unwrap();
        let texts: Vec<&str> = p.secret_words().map(Word::text).collect();
        assert_eq!(texts, ["ANT", "BEE"]);
        p.remove_words("ant bee").unwrap();
        assert!(p.grid().is_none());
    }

    #[test]
    fn pinned_size_survives_word_edits_until_recalculated() {
        let mut p = puzzle(&["cat"]);
        p.set_size(8).unwrap();
        p.add_words("horse zebra").unwrap();
        assert_eq!(p.size(), Some(8));
        p.recalculate_size().unwrap();
        assert_eq!(p.size(), Some(14));
        assert!(!p.is_size_pinned());
    }

    #[test]
    fn set_size_out_of_range_is_a_config_error() {
        let mut p = puzzle(&["cat"]);
        assert_eq!(
            p.set_size(4),
            Err(PuzzleError::Config(ConfigError::SizeOutOfRange {
                size: 4,
                min: 5,
                max: 50
            }))
        );
    }

    #[test]
    fn size_error_discards_previous_grid() {
        let mut p = puzzle(&["cat"]);
        assert!(p.grid().is_some());
        p.set_size(5).unwrap();
        let err = p.add_words("elephant").unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Generate(GenerateError::SizeTooSmall { .. })
        ));
        assert!(p.grid().is_none());
        assert_eq!(p.placed_words().count(), 0);
    }

    #[test]
    fn colours_are_stable_for_a_seed() {
        let a = puzzle(&["cat", "dog"]);
        let b = puzzle(&["dog", "cat"]);
        assert_eq!(a.word("cat").unwrap().color(), b.word("cat").unwrap().color());
        assert_ne!(a.word("cat").unwrap().color(), a.word("dog").unwrap().color());
    }

    #[test]
    fn mask_operations_need_a_size() {
        let mut p = Puzzle::new(PuzzleConfig::default()).unwrap();
        assert_eq!(
            p.apply_mask(Mask::new(Circle::new())),
            Err(PuzzleError::Generate(GenerateError::NotGenerated {
                operation: "apply_mask"
            }))
        );
        assert!(p.invert_mask().is_err());
        assert!(p.add_random_words(&["cat"], 1).is_err());
        assert!(p.cropped_grid().is_err());
    }

    #[test]
    fn static_masks_are_skipped_after_resize() {
        let mut p = puzzle(&["cat", "dog"]);
        p.set_size(10).unwrap();
        p.apply_mask(Mask::new(Circle::new())).unwrap();
        assert!(p.mask().unwrap().active_count() < 100);
        p.set_size(12).unwrap();
        assert_eq!(p.mask().unwrap().active_count(), 144);
        assert_eq!(p.masks().len(), 1);
        assert!(p.masked());
        p.set_size(10).unwrap();
        assert!(p.mask().unwrap().active_count() < 100);
    }

    #[test]
    fn non_static_masks_are_rerendered_after_resize() {
        let mut p = puzzle(&["cat", "dog"]);
        p.set_size(10).unwrap();
        p.apply_mask(Mask::new(Pentagon::new())).unwrap();
        p.set_size(13).unwrap();
        let mask = p.mask().unwrap();
        assert_eq!(mask.size(), 13);
        assert!(p.masked());
        assert_eq!(p.masks()[0].rendered_size(), Some(13));
    }

    #[test]
    fn remove_static_masks_keeps_the_rest() {
        let mut p = puzzle(&["cat", "dog"]);
        p.set_size(12).unwrap();
        p.apply_masks([
            Mask::new(Circle::new()),
            Mask::new(Pentagon::new()),
        ])
        .unwrap();
        p.remove_static_masks().unwrap();
        assert_eq!(p.masks().len(), 1);
        assert_eq!(p.masks()[0].name(), "Pentagon");
        p.remove_masks().unwrap();
        assert!(!p.masked());
    }

    #[test]
    fn mask_too_large_for_the_puzzle_is_reported() {
        let mut p = puzzle(&["cat"]);
        p.set_size(8).unwrap();
        let err = p
            .apply_mask(Mask::new(wordgrid_mask::shapes::Star5::new()))
            .unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Mask(MaskError::PuzzleTooSmall { .. })
        ));
        assert!(p.masks().is_empty());
    }

    #[test]
    fn failed_apply_masks_leaves_state_untouched() {
        let mut p = puzzle(&["cat", "dog", "pig"]);
        p.set_size(8).unwrap();
        let grid_before = p.grid().cloned();
        let err = p
            .apply_masks([
                Mask::new(Bitmap::new((0..8).map(|x| (x, 0)).collect()))
                    .with_method(MaskMethod::Subtractive),
                Mask::new(wordgrid_mask::shapes::Star5::new()),
            ])
            .unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Mask(MaskError::PuzzleTooSmall { .. })
        ));
        assert!(p.masks().is_empty());
        assert!(!p.masked());
        assert_eq!(p.mask().unwrap().active_count(), 64);
        assert!(p.mask().unwrap().is_active(Position::new(0, 0)));
        assert_eq!(p.grid().cloned(), grid_before);
    }

    #[test]
    fn failed_generation_resets_metrics_and_rejections() {
        let mut p = puzzle(&["cat", "cats", "dog"]);
        p.set_size(8).unwrap();
        assert!(!p.rejected().is_empty());
        assert!(p.metrics().words_placed > 0);

        let err = p.add_words("hippopotamuses").unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Generate(GenerateError::SizeTooSmall { .. })
        ));
        assert!(p.rejected().is_empty());
        assert_eq!(p.metrics(), &GenerationMetrics::default());
    }

    #[test]
    fn additive_mask_counts_as_masked() {
        let mut p = puzzle(&["cat", "dog"]);
        p.set_size(6).unwrap();
        let all: Vec<(i64, i64)> = (0..6).flat_map(|x| (0..6).map(move |y| (x, y))).collect();
        p.apply_mask(Mask::new(Bitmap::new(all)).with_method(MaskMethod::Additive))
            .unwrap();
        assert_eq!(p.mask().unwrap().active_count(), 36);
        assert!(p.masked());
    }

    #[test]
    fn invert_then_crop() {
        let mut p = puzzle(&["cat", "dog"]);
        p.set_size(10).unwrap();
        let keep: Vec<(i64, i64)> = (0..10).flat_map(|x| (0..10).map(move |y| (x, y))).collect();
        p.apply_mask(Mask::new(Bitmap::new(keep))).unwrap();
        p.apply_mask(
            Mask::new(Bitmap::new(vec![(0, 0), (9, 9)])).with_method(MaskMethod::Subtractive),
        )
        .unwrap();
        p.invert_mask().unwrap();
        let mask = p.mask().unwrap();
        assert_eq!(mask.active_count(), 2);
        assert!(mask.is_active(Position::new(0, 0)));
        assert_eq!(p.bounding_box().unwrap().width(), 10);
    }

    #[test]
    fn add_random_words_respects_size_and_dedupes() {
        let mut p = puzzle(&["cat"]);
        p.set_size(6).unwrap();
        let added = p
            .add_random_words(&["cat", "dog", "elephants", "owl", "owl", "bee"], 10)
            .unwrap();
        assert_eq!(added, 3);
        assert!(p.word("elephants").is_none());
        assert_eq!(p.words().count(), 4);
    }

    #[test]
    fn validator_rejections_are_reported() {
        let p = puzzle(&["cat", "cats", "noon"]);
        let rejected: Vec<&str> = p.rejected().iter().map(|r| r.word.as_str()).collect();
        assert!(rejected.contains(&"NOON"));
        assert!(rejected.contains(&"CAT"));
        assert!(!p.word("cat").unwrap().is_placed());
        assert!(p.word("cats").unwrap().is_placed());
    }

    #[test]
    fn fnv_is_stable() {
        assert_eq!(fnv1a(""), 0xcbf2_9ce4_8422_2325);
        assert_ne!(fnv1a("CAT"), fnv1a("TAC"));
    }
}
