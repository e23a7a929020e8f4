//! Undo log for in-place grid writes.
//!
//! Placement writes letters straight into the live grid. Every write that
//! actually changes a cell is recorded here with the cell's previous
//! content, so a failed attempt can be rolled back exactly without
//! copying the grid.

use smallvec::SmallVec;
use wordgrid_core::{Grid, Position};

/// One recorded cell change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Change {
    pos: Position,
    previous: Option<char>,
}

/// Checkpointed change log over a [`Grid`].
///
/// Checkpoints nest: [`rollback`](Self::rollback) restores to the most
/// recent checkpoint and [`commit`](Self::commit) folds it into the one
/// below.
#[derive(Debug)]
pub struct ChangeLog {
    entries: Vec<Change>,
    checkpoints: Vec<usize>,
}

impl ChangeLog {
    /// An empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(64),
            checkpoints: Vec::with_capacity(4),
        }
    }

    /// Open a checkpoint. Returns the log length at that point.
    pub fn checkpoint(&mut self) -> usize {
        let mark = self.entries.len();
        self.checkpoints.push(mark);
        mark
    }

    /// Write `letter` at `pos`, recording the previous content.
    ///
    /// Returns `false` (and records nothing) if the cell already holds
    /// `letter`.
    pub fn write(&mut self, grid: &mut Grid, pos: Position, letter: char) -> bool {
        if grid.get(pos) == Some(letter) {
            return false;
        }
        let previous = grid.set(pos, Some(letter));
        self.entries.push(Change { pos, previous });
        true
    }

    /// Cells changed since the most recent checkpoint, in write order.
    pub fn changed_since_checkpoint(&self) -> SmallVec<[Position; 16]> {
        let start = self.checkpoints.last().copied().unwrap_or(0);
        self.entries[start..].iter().map(|c| c.pos).collect()
    }

    /// Restore every change since the most recent checkpoint, newest
    /// first, and pop the checkpoint.
    ///
    /// Returns the number of cells restored. With no open checkpoint the
    /// whole log is rolled back.
    pub fn rollback(&mut self, grid: &mut Grid) -> usize {
        let mark = self.checkpoints.pop().unwrap_or(0);
        let restored = self.entries.len() - mark;
        for change in self.entries.drain(mark..).rev() {
            grid.set(change.pos, change.previous);
        }
        restored
    }

    /// Keep every change since the most recent checkpoint and pop it.
    ///
    /// Once no checkpoints remain the entries are discarded; nothing can
    /// roll them back any more.
    pub fn commit(&mut self) {
        self.checkpoints.pop();
        if self.checkpoints.is_empty() {
            self.entries.clear();
        }
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no changes are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of open checkpoints.
    pub fn depth(&self) -> usize {
        self.checkpoints.len()
    }
}

impl Default for ChangeLog {
    fn default() -> Self {
        Self::new()
    }
}
