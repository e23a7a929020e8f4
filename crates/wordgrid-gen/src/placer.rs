//! Randomized backtracking word placement.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::RngCore;
use smallvec::SmallVec;
use wordgrid_core::{
    Direction, DirectionSet, Grid, MaskGrid, Placement, Position, Validator, Word,
    WordValidationError,
};

use crate::dupes::DuplicateChecker;
use crate::trail::ChangeLog;

/// What happened while placing one word list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementReport {
    /// Words placed.
    pub placed: usize,
    /// Words left unplaced (no fit, or over the word cap), in attempt order.
    pub unplaced: Vec<String>,
    /// Words a validator refused.
    pub rejected: Vec<WordValidationError>,
    /// Candidate positions written and checked.
    pub attempts: u64,
    /// Attempts undone after a duplicate check failed.
    pub rollbacks: u64,
}

/// Places words into a grid by randomized trial, writing in place and
/// rolling back through a [`ChangeLog`] when an attempt would introduce a
/// duplicate.
///
/// Hidden words go first, longest first, then secret words. For each word
/// the permitted directions are visited in shuffled order, and within a
/// direction every start whose cells are all active and either empty or
/// already holding the same letter is tried in shuffled order. At most
/// `max_fit_tries` candidates are written per word.
#[derive(Clone, Debug)]
pub struct WordPlacer {
    directions: DirectionSet,
    secret_directions: DirectionSet,
    max_fit_tries: usize,
    max_puzzle_words: usize,
    checker: DuplicateChecker,
}

impl WordPlacer {
    /// A placer using `directions` for hidden words and
    /// `secret_directions` for secret ones.
    pub fn new(directions: DirectionSet, secret_directions: DirectionSet) -> Self {
        Self {
            directions,
            secret_directions,
            max_fit_tries: 1000,
            max_puzzle_words: 100,
            checker: DuplicateChecker::default(),
        }
    }

    /// Cap on candidate positions tried per word.
    pub fn with_max_fit_tries(mut self, tries: usize) -> Self {
        self.max_fit_tries = tries;
        self
    }

    /// Cap on the number of words placed.
    pub fn with_max_puzzle_words(mut self, words: usize) -> Self {
        self.max_puzzle_words = words;
        self
    }

    /// Replace the duplicate checker.
    pub fn with_checker(mut self, checker: DuplicateChecker) -> Self {
        self.checker = checker;
        self
    }

    /// Place `words` into `grid` within `mask`.
    ///
    /// Placements are written back onto the words; anything left unplaced
    /// has its placement cleared.
    pub fn place_all(
        &self,
        grid: &mut Grid,
        mask: &MaskGrid,
        words: &mut [Word],
        validators: &[Box<dyn Validator>],
        rng: &mut dyn RngCore,
    ) -> PlacementReport {
        let mut report = PlacementReport::default();
        let mut log = ChangeLog::new();
        let mut placed: Vec<(String, SmallVec<[char; 16]>)> = Vec::new();

        for idx in placement_order(words) {
            let word = &mut words[idx];
            word.clear_placement();

            if placed.len() >= self.max_puzzle_words {
                trace!("word cap {} reached, skipping {}", self.max_puzzle_words, word);
                report.unplaced.push(word.text().to_string());
                continue;
            }

            let accepted: Vec<&str> = placed.iter().map(|(text, _)| text.as_str()).collect();
            if let Some(err) = run_validators(validators, word.text(), &accepted) {
                debug!("{err}");
                report.rejected.push(err);
                continue;
            }

            let letters = word.letters();
            let dirs = if word.is_secret() {
                self.secret_directions
            } else {
                self.directions
            };
            match self.try_place(grid, mask, &letters, dirs, &placed, &mut log, rng, &mut report) {
                Some(placement) => {
                    trace!("placed {} at {} {}", word, placement.start, placement.direction);
                    word.place(placement);
                    placed.push((word.text().to_string(), letters));
                    report.placed += 1;
                }
                None => {
                    debug!("no room for {}", word);
                    report.unplaced.push(word.text().to_string());
                }
            }
        }
        report
    }

    #[allow(clippy::too_many_arguments)]
    fn try_place(
        &self,
        grid: &mut Grid,
        mask: &MaskGrid,
        letters: &[char],
        dirs: DirectionSet,
        placed: &[(String, SmallVec<[char; 16]>)],
        log: &mut ChangeLog,
        rng: &mut dyn RngCore,
        report: &mut PlacementReport,
    ) -> Option<Placement> {
        // A word already spelled by earlier letters can never be unique.
        if self.checker.count(grid, letters) > 0 {
            return None;
        }

        let mut order: SmallVec<[Direction; 8]> = dirs.iter().collect();
        order.shuffle(rng);

        let mut tries = 0;
        for dir in order {
            let mut starts = candidate_starts(grid, mask, letters, dir);
            starts.shuffle(rng);
            for start in starts {
                if tries >= self.max_fit_tries {
                    return None;
                }
                tries += 1;
                report.attempts += 1;
                let cells: SmallVec<[Position; 16]> = (0..letters.len())
                    .filter_map(|i| dir.step(start, i, grid.size()))
                    .collect();

                log.checkpoint();
                for (&pos, &ch) in cells.iter().zip(letters) {
                    log.write(grid, pos, ch);
                }

                if self.is_clean(grid, letters, placed, log) {
                    log.commit();
                    return Some(Placement::new(start, dir, cells));
                }
                log.rollback(grid);
                report.rollbacks += 1;
            }
        }
        None
    }

    /// The word just written appears exactly once and no earlier word
    /// gained an occurrence through a changed cell.
    fn is_clean(
        &self,
        grid: &Grid,
        letters: &[char],
        placed: &[(String, SmallVec<[char; 16]>)],
        log: &ChangeLog,
    ) -> bool {
        let changed = log.changed_since_checkpoint();
        if changed.is_empty() {
            return false;
        }
        if self.checker.count(grid, letters) != 1 {
            return false;
        }
        placed
            .iter()
            .filter(|(_, other)| !overlaps_as_substring(letters, other))
            .all(|(_, other)| {
                changed
                    .iter()
                    .all(|&cell| !self.checker.occurs_through(grid, other, cell))
            })
    }
}

/// Hidden words longest first, then secret words longest first. Ties keep
/// input order.
fn placement_order(words: &[Word]) -> Vec<usize> {
    let mut hidden: Vec<usize> = (0..words.len()).filter(|&i| !words[i].is_secret()).collect();
    let mut secret: Vec<usize> = (0..words.len()).filter(|&i| words[i].is_secret()).collect();
    hidden.sort_by_key(|&i| std::cmp::Reverse(words[i].len()));
    secret.sort_by_key(|&i| std::cmp::Reverse(words[i].len()));
    hidden.extend(secret);
    hidden
}

fn run_validators(
    validators: &[Box<dyn Validator>],
    word: &str,
    accepted: &[&str],
) -> Option<WordValidationError> {
    validators.iter().find_map(|v| {
        v.validate(word, accepted)
            .err()
            .map(|reason| WordValidationError {
                word: word.to_string(),
                validator: v.name().to_string(),
                reason,
            })
    })
}

/// Every start along `dir` the word fits at: in bounds, active, and each
/// cell empty or already holding the same letter.
fn candidate_starts(grid: &Grid, mask: &MaskGrid, letters: &[char], dir: Direction) -> Vec<Position> {
    let size = grid.size();
    let mut out = Vec::new();
    for row in 0..size {
        for col in 0..size {
            let start = Position::new(row, col);
            let fits = letters.iter().enumerate().all(|(i, &ch)| {
                dir.step(start, i, size).is_some_and(|pos| {
                    mask.is_active(pos) && grid.get(pos).is_none_or(|c| c == ch)
                })
            });
            if fits {
                out.push(start);
            }
        }
    }
    out
}

/// Whether one word contains the other, forwards or reversed. Such a pair
/// cannot be kept apart by the duplicate check.
fn overlaps_as_substring(a: &[char], b: &[char]) -> bool {
    let contains = |hay: &[char], needle: &[char]| {
        needle.len() <= hay.len() && hay.windows(needle.len()).any(|w| w == needle)
    };
    let rev_b: SmallVec<[char; 16]> = b.iter().rev().copied().collect();
    let rev_a: SmallVec<[char; 16]> = a.iter().rev().copied().collect();
    contains(a, b) || contains(a, &rev_b) || contains(b, a) || contains(b, &rev_a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t, false).unwrap()).collect()
    }

    fn spelled(grid: &Grid, p: &Placement) -> String {
        p.cells.iter().filter_map(|&c| grid.get(c)).collect()
    }

    #[test]
    fn placement_order_is_longest_hidden_then_secret() {
        let mut ws = words(&["AB", "ABCDE", "ABC", "XYZW"]);
        ws[3].set_secret(true);
        ws.push(Word::new("LONGSECRET", true).unwrap());
        assert_eq!(placement_order(&ws), vec![1, 2, 0, 4, 3]);
    }

    #[test]
    fn places_simple_words_in_permitted_directions() {
        let mut grid = Grid::new(10);
        let mask = MaskGrid::all_active(10);
        let mut ws = words(&["CAT", "DOG", "PIG"]);
        let placer = WordPlacer::new(DirectionSet::level(1).unwrap(), DirectionSet::ALL);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let report = placer.place_all(&mut grid, &mask, &mut ws, &[], &mut rng);

        assert_eq!(report.placed, 3);
        assert!(report.unplaced.is_empty());
        for w in &ws {
            let p = w.placement().unwrap();
            assert!(matches!(p.direction, Direction::E | Direction::S));
            assert_eq!(spelled(&grid, p), w.text());
        }
    }

    #[test]
    fn inactive_cells_are_never_written() {
        let mut grid = Grid::new(5);
        let mask = MaskGrid::from_rows(&["*****", "#####", "*****", "#####", "*****"]);
        let mut ws = words(&["ABCDE", "FGHIJ", "KLMNO"]);
        let placer = WordPlacer::new(DirectionSet::ALL, DirectionSet::ALL);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let report = placer.place_all(&mut grid, &mask, &mut ws, &[], &mut rng);

        assert_eq!(report.placed, 3);
        for r in [1, 3] {
            for c in 0..5 {
                assert_eq!(grid.get(Position::new(r, c)), None);
            }
        }
    }

    #[test]
    fn unplaceable_word_is_reported_and_grid_untouched() {
        let mut grid = Grid::new(4);
        let mask = MaskGrid::all_active(4);
        let mut ws = words(&["ABCDEFG"]);
        let placer = WordPlacer::new(DirectionSet::ALL, DirectionSet::ALL);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let report = placer.place_all(&mut grid, &mask, &mut ws, &[], &mut rng);

        assert_eq!(report.placed, 0);
        assert_eq!(report.unplaced, vec!["ABCDEFG".to_string()]);
        assert_eq!(grid.filled_count(), 0);
        assert!(!ws[0].is_placed());
    }

    #[test]
    fn word_cap_stops_placement() {
        let mut grid = Grid::new(10);
        let mask = MaskGrid::all_active(10);
        let mut ws = words(&["ONE", "TWO", "SIX"]);
        let placer =
            WordPlacer::new(DirectionSet::ALL, DirectionSet::ALL).with_max_puzzle_words(2);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let report = placer.place_all(&mut grid, &mask, &mut ws, &[], &mut rng);
        assert_eq!(report.placed, 2);
        assert_eq!(report.unplaced.len(), 1);
    }

    #[test]
    fn zero_fit_tries_places_nothing() {
        let mut grid = Grid::new(6);
        let mask = MaskGrid::all_active(6);
        let mut ws = words(&["CAT"]);
        let placer = WordPlacer::new(DirectionSet::ALL, DirectionSet::ALL).with_max_fit_tries(0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let report = placer.place_all(&mut grid, &mask, &mut ws, &[], &mut rng);
        assert_eq!(report.placed, 0);
        assert_eq!(report.attempts, 0);
    }

    #[derive(Debug)]
    struct RejectX;

    impl Validator for RejectX {
        fn name(&self) -> &str {
            "RejectX"
        }

        fn validate(&self, word: &str, _accepted: &[&str]) -> Result<(), String> {
            if word.contains('X') {
                Err("contains X".into())
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn validator_rejections_are_collected_not_fatal() {
        let mut grid = Grid::new(8);
        let mask = MaskGrid::all_active(8);
        let mut ws = words(&["BOX", "CAT"]);
        let validators: Vec<Box<dyn Validator>> = vec![Box::new(RejectX)];
        let placer = WordPlacer::new(DirectionSet::ALL, DirectionSet::ALL);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let report = placer.place_all(&mut grid, &mask, &mut ws, &validators, &mut rng);

        assert_eq!(report.placed, 1);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].word, "BOX");
        assert_eq!(report.rejected[0].validator, "RejectX");
        assert!(report.unplaced.is_empty());
    }

    #[test]
    fn every_placed_word_occurs_exactly_once() {
        let checker = DuplicateChecker::default();
        for seed in 0..20 {
            let mut grid = Grid::new(8);
            let mask = MaskGrid::all_active(8);
            let mut ws = words(&["RUST", "CARGO", "CRATE", "TRAIT", "BORROW", "MACRO"]);
            let placer = WordPlacer::new(DirectionSet::ALL, DirectionSet::ALL);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            placer.place_all(&mut grid, &mask, &mut ws, &[], &mut rng);
            for w in ws.iter().filter(|w| w.is_placed()) {
                assert_eq!(checker.count(&grid, &w.letters()), 1, "{w} seed {seed}");
            }
        }
    }

    #[test]
    fn substring_pairs_detected_both_ways() {
        let cat: Vec<char> = "CAT".chars().collect();
        let cats: Vec<char> = "CATS".chars().collect();
        let stac: Vec<char> = "STAC".chars().collect();
        let dog: Vec<char> = "DOG".chars().collect();
        assert!(overlaps_as_substring(&cat, &cats));
        assert!(overlaps_as_substring(&cats, &cat));
        assert!(overlaps_as_substring(&cat, &stac));
        assert!(!overlaps_as_substring(&cat, &dog));
    }
}
