//! The generation strategy seam and its default implementation.

use std::fmt;

use log::{debug, warn};
use rand::RngCore;
use smallvec::SmallVec;
use wordgrid_core::{
    Alphabet, DirectionSet, GenerateError, Grid, MaskGrid, Validator, Word,
};

use crate::dupes::DuplicateChecker;
use crate::fill::{FillEngine, FillReport};
use crate::placer::{PlacementReport, WordPlacer};

/// Per-generation effort limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationLimits {
    /// Maximum number of words placed.
    pub max_puzzle_words: usize,
    /// Candidate positions tried per word.
    pub max_fit_tries: usize,
    /// Letter draws per filler cell.
    pub max_fill_tries: usize,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_puzzle_words: 100,
            max_fit_tries: 1000,
            max_fill_tries: 100,
        }
    }
}

/// Everything one generation needs.
///
/// `words` is updated in place: each word's placement is set or cleared.
pub struct GenerateRequest<'a> {
    /// Grid side length.
    pub size: usize,
    /// Active cells. Must be `size × size`.
    pub mask: &'a MaskGrid,
    /// Hidden and secret words.
    pub words: &'a mut [Word],
    /// Directions for hidden words.
    pub directions: DirectionSet,
    /// Directions for secret words.
    pub secret_directions: DirectionSet,
    /// Filler letters.
    pub alphabet: &'a Alphabet,
    /// Checks run on each word before placement.
    pub validators: &'a [Box<dyn Validator>],
    /// Effort limits.
    pub limits: GenerationLimits,
}

impl fmt::Debug for GenerateRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateRequest")
            .field("size", &self.size)
            .field("words", &self.words.len())
            .field("directions", &self.directions)
            .field("secret_directions", &self.secret_directions)
            .field("validators", &self.validators.len())
            .field("limits", &self.limits)
            .finish()
    }
}

/// The result of one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// The finished grid.
    pub grid: Grid,
    /// Placement counters and the words left out.
    pub placement: PlacementReport,
    /// Filler counters. Zero when nothing was placed.
    pub fill: FillReport,
}

/// A puzzle generation strategy.
///
/// # Object safety
///
/// The trait is object-safe; puzzles hold `Box<dyn Generator>`, and the
/// random source is passed as `&mut dyn RngCore`.
pub trait Generator: fmt::Debug {
    /// Human-readable strategy name.
    fn name(&self) -> &str;

    /// Generate a grid for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyWordList`] with no words and
    /// [`GenerateError::SizeTooSmall`] when the longest required word
    /// cannot fit. Both are raised before any grid is built.
    fn generate(
        &self,
        request: GenerateRequest<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<GenerateOutcome, GenerateError>;
}

/// Default strategy: backtracking placement followed by filler.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordSearchGenerator {
    checker: DuplicateChecker,
}

impl WordSearchGenerator {
    /// A generator scanning all eight directions for duplicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `checker` for both placement and filler.
    pub fn with_checker(mut self, checker: DuplicateChecker) -> Self {
        self.checker = checker;
        self
    }
}

/// The word that decides whether the grid is big enough: the longest
/// hidden word, or the longest secret word if there are no hidden ones.
fn size_limiting_word(words: &[Word]) -> Option<&Word> {
    let longest = |secret: bool| {
        words
            .iter()
            .filter(|w| w.is_secret() == secret)
            .fold(None, |best: Option<&Word>, w| match best {
                Some(b) if b.len() >= w.len() => Some(b),
                _ => Some(w),
            })
    };
    longest(false).or_else(|| longest(true))
}

impl Generator for WordSearchGenerator {
    fn name(&self) -> &str {
        "WordSearch"
    }

    fn generate(
        &self,
        request: GenerateRequest<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<GenerateOutcome, GenerateError> {
        let GenerateRequest {
            size,
            mask,
            words,
            directions,
            secret_directions,
            alphabet,
            validators,
            limits,
        } = request;

        let limiting = size_limiting_word(words).ok_or(GenerateError::EmptyWordList)?;
        if limiting.len() > size {
            return Err(GenerateError::SizeTooSmall {
                size,
                word: limiting.text().to_string(),
                len: limiting.len(),
            });
        }
        debug_assert_eq!(mask.size(), size, "mask and grid sizes differ");

        let mut grid = Grid::new(size);
        if mask.is_blank() {
            warn!("mask leaves no active cells at size {size}; nothing placed");
            let mut placement = PlacementReport::default();
            for word in words.iter_mut() {
                word.clear_placement();
                placement.unplaced.push(word.text().to_string());
            }
            return Ok(GenerateOutcome {
                grid,
                placement,
                fill: FillReport::default(),
            });
        }

        let placer = WordPlacer::new(directions, secret_directions)
            .with_max_fit_tries(limits.max_fit_tries)
            .with_max_puzzle_words(limits.max_puzzle_words)
            .with_checker(self.checker);
        let placement = placer.place_all(&mut grid, mask, words, validators, rng);

        let fill = if placement.placed > 0 {
            let placed: Vec<SmallVec<[char; 16]>> = words
                .iter()
                .filter(|w| w.is_placed())
                .map(Word::letters)
                .collect();
            FillEngine::new(limits.max_fill_tries)
                .with_checker(self.checker)
                .fill(&mut grid, mask, &placed, alphabet, rng)
        } else {
            FillReport::default()
        };

        debug!(
            "generated size {size}: {} placed, {} unplaced, {} rejected",
            placement.placed,
            placement.unplaced.len(),
            placement.rejected.len()
        );
        Ok(GenerateOutcome {
            grid,
            placement,
            fill,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t, false).unwrap()).collect()
    }

    fn request<'a>(
        size: usize,
        mask: &'a MaskGrid,
        words: &'a mut [Word],
        alphabet: &'a Alphabet,
    ) -> GenerateRequest<'a> {
        GenerateRequest {
            size,
            mask,
            words,
            directions: DirectionSet::ALL,
            secret_directions: DirectionSet::ALL,
            alphabet,
            validators: &[],
            limits: GenerationLimits::default(),
        }
    }

    #[test]
    fn generator_is_object_safe() {
        let g: Box<dyn Generator> = Box::new(WordSearchGenerator::new());
        assert_eq!(g.name(), "WordSearch");
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let mask = MaskGrid::all_active(5);
        let alphabet = Alphabet::latin();
        let mut ws: Vec<Word> = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = WordSearchGenerator::new()
            .generate(request(5, &mask, &mut ws, &alphabet), &mut rng)
            .unwrap_err();
        assert_eq!(err, GenerateError::EmptyWordList);
    }

    #[test]
    fn word_longer_than_grid_is_a_size_error() {
        let mask = MaskGrid::all_active(5);
        let alphabet = Alphabet::latin();
        let mut ws = words(&["ELEPHANT", "CAT"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = WordSearchGenerator::new()
            .generate(request(5, &mask, &mut ws, &alphabet), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::SizeTooSmall {
                size: 5,
                word: "ELEPHANT".into(),
                len: 8
            }
        );
    }

    #[test]
    fn long_secret_word_is_ignored_when_hidden_words_exist() {
        let mask = MaskGrid::all_active(5);
        let alphabet = Alphabet::latin();
        let mut ws = words(&["CAT"]);
        ws.push(Word::new("ELEPHANT", true).unwrap());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let out = WordSearchGenerator::new()
            .generate(request(5, &mask, &mut ws, &alphabet), &mut rng)
            .unwrap();
        assert_eq!(out.placement.unplaced, vec!["ELEPHANT".to_string()]);
        assert!(ws[0].is_placed());
    }

    #[test]
    fn full_generation_fills_every_active_cell() {
        let mask = MaskGrid::all_active(10);
        let alphabet = Alphabet::latin();
        let mut ws = words(&["CAT", "DOG", "PIG"]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let out = WordSearchGenerator::new()
            .generate(request(10, &mask, &mut ws, &alphabet), &mut rng)
            .unwrap();
        assert_eq!(out.placement.placed, 3);
        assert_eq!(out.grid.filled_count(), 100);
        assert_eq!(out.fill.cells_filled, 100 - out.placement_cells(&ws));
    }

    #[test]
    fn blank_mask_places_nothing_and_fills_nothing() {
        let mask = MaskGrid::all_inactive(6);
        let alphabet = Alphabet::latin();
        let mut ws = words(&["CAT"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let out = WordSearchGenerator::new()
            .generate(request(6, &mask, &mut ws, &alphabet), &mut rng)
            .unwrap();
        assert_eq!(out.grid.filled_count(), 0);
        assert_eq!(out.placement.unplaced.len(), 1);
    }

    #[test]
    fn same_seed_same_grid() {
        let mask = MaskGrid::all_active(9);
        let alphabet = Alphabet::latin();
        let run = |seed| {
            let mut ws = words(&["ALPHA", "BRAVO", "DELTA", "ECHO"]);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            WordSearchGenerator::new()
                .generate(request(9, &mask, &mut ws, &alphabet), &mut rng)
                .unwrap()
                .grid
        };
        assert_eq!(run(3), run(3));
        assert_ne!(run(3), run(4));
    }

    impl GenerateOutcome {
        /// Distinct cells covered by placed words.
        fn placement_cells(&self, words: &[Word]) -> usize {
            let mut cells: Vec<_> = words
                .iter()
                .filter_map(|w| w.placement())
                .flat_map(|p| p.cells.iter().copied())
                .collect();
            cells.sort_by_key(|p| (p.row, p.col));
            cells.dedup();
            cells.len()
        }
    }
}
