//! The square letter grid.

use std::fmt;

use crate::coord::{BoundingBox, Position};
use crate::direction::Direction;

/// An `N × N` character matrix stored row-major.
///
/// `None` marks a cell with no letter: either not yet filled or
/// excluded by the mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// An empty grid of side `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Letter at `pos`, or `None` if empty or out of range.
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        self.cells[pos.index(self.size)]
    }

    /// Letter at flat index `idx`.
    pub fn get_index(&self, idx: usize) -> Option<char> {
        self.cells.get(idx).copied().flatten()
    }

    /// Overwrite `pos`, returning the previous content.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, value: Option<char>) -> Option<char> {
        let idx = pos.index(self.size);
        std::mem::replace(&mut self.cells[idx], value)
    }

    /// Letters along `dir` starting at `start`, until the grid edge.
    pub fn ray(&self, start: Position, dir: Direction) -> impl Iterator<Item = Option<char>> + '_ {
        (0..self.size)
            .map_while(move |i| dir.step(start, i, self.size))
            .map(move |p| self.cells[p.index(self.size)])
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells holding a letter.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Copy out the rows and columns covered by `bbox`.
    pub fn crop(&self, bbox: &BoundingBox) -> Vec<Vec<Option<char>>> {
        (bbox.min_row..=bbox.max_row)
            .map(|r| {
                (bbox.min_col..=bbox.max_col)
                    .map(|c| self.cells[Position::new(r, c).index(self.size)])
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map_or_else(|| " ".to_string(), |c| c.to_string()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
