//! Per-generation metrics.
//!
//! [`GenerationMetrics`] captures effort counters and timing for the most
//! recent generation of a puzzle.

use wordgrid_gen::GenerateOutcome;

/// Counters collected during a single generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationMetrics {
    /// Wall-clock time for the whole generation, in microseconds.
    pub total_us: u64,
    /// Grid size used.
    pub size: usize,
    /// Active cells in the composited mask.
    pub active_cells: usize,
    /// Candidate positions written and checked.
    pub placement_attempts: u64,
    /// Attempts rolled back.
    pub rollbacks: u64,
    /// Words placed.
    pub words_placed: usize,
    /// Words left unplaced.
    pub words_unplaced: usize,
    /// Words refused by validators.
    pub words_rejected: usize,
    /// Filler cells written.
    pub filler_cells: usize,
    /// Filler redraws.
    pub filler_retries: u64,
    /// Filler cells kept despite spelling a placed word.
    pub residual_collisions: usize,
}

impl GenerationMetrics {
    pub(crate) fn from_outcome(outcome: &GenerateOutcome, active_cells: usize, total_us: u64) -> Self {
        Self {
            total_us,
            size: outcome.grid.size(),
            active_cells,
            placement_attempts: outcome.placement.attempts,
            rollbacks: outcome.placement.rollbacks,
            words_placed: outcome.placement.placed,
            words_unplaced: outcome.placement.unplaced.len(),
            words_rejected: outcome.placement.rejected.len(),
            filler_cells: outcome.fill.cells_filled,
            filler_retries: outcome.fill.retries,
            residual_collisions: outcome.fill.residual_collisions,
        }
    }
}
