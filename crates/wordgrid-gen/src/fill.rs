//! Random filler for the cells placement left empty.

use log::{debug, trace};
use rand::{Rng, RngCore};
use wordgrid_core::{Alphabet, Grid, MaskGrid, Position};

use crate::dupes::DuplicateChecker;

/// Counters from one fill pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Cells that received a filler letter.
    pub cells_filled: usize,
    /// Redraws after a letter would have spelled a placed word.
    pub retries: u64,
    /// Cells where every draw collided and the last one was kept anyway.
    pub residual_collisions: usize,
}

/// Fills every active empty cell with a random alphabet letter.
///
/// Each draw is checked against the placed words: a letter that would
/// complete an occurrence through its cell is redrawn, up to
/// `max_fill_tries` draws. After that the last letter stays and the cell
/// is counted as a residual collision.
#[derive(Clone, Copy, Debug)]
pub struct FillEngine {
    max_fill_tries: usize,
    checker: DuplicateChecker,
}

impl FillEngine {
    /// A filler drawing at most `max_fill_tries` letters per cell (at
    /// least one).
    pub fn new(max_fill_tries: usize) -> Self {
        Self {
            max_fill_tries: max_fill_tries.max(1),
            checker: DuplicateChecker::default(),
        }
    }

    /// Replace the duplicate checker.
    pub fn with_checker(mut self, checker: DuplicateChecker) -> Self {
        self.checker = checker;
        self
    }

    /// Fill `grid`. `placed` holds the letters of every placed word.
    pub fn fill<W: AsRef<[char]>>(
        &self,
        grid: &mut Grid,
        mask: &MaskGrid,
        placed: &[W],
        alphabet: &Alphabet,
        rng: &mut dyn RngCore,
    ) -> FillReport {
        let mut report = FillReport::default();
        let letters = alphabet.letters();
        if letters.is_empty() {
            return report;
        }
        let size = grid.size();

        for idx in 0..grid.cell_count() {
            let pos = Position::from_index(idx, size);
            if !mask.is_active(pos) || grid.get(pos).is_some() {
                continue;
            }

            let mut clean = false;
            for attempt in 0..self.max_fill_tries {
                let letter = letters[rng.random_range(0..letters.len())];
                grid.set(pos, Some(letter));
                if attempt > 0 {
                    report.retries += 1;
                }
                if !placed
                    .iter()
                    .any(|w| self.checker.occurs_through(grid, w.as_ref(), pos))
                {
                    clean = true;
                    break;
                }
            }
            if !clean {
                trace!("filler at {pos} still spells a placed word");
                report.residual_collisions += 1;
            }
            report.cells_filled += 1;
        }

        debug!(
            "filled {} cells ({} retries, {} residual)",
            report.cells_filled, report.retries, report.residual_collisions
        );
        report
    }
}

impl Default for FillEngine {
    fn default() -> Self {
        Self::new(100)
    }
}
