//! Boolean activation matrix.

use std::fmt;

use crate::coord::{BoundingBox, Position};

/// An `N × N` boolean matrix; `true` marks a cell eligible for letters.
///
/// Shapes render into one of these, and the puzzle keeps an accumulated
/// one that every placement and fill consults.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MaskGrid {
    size: usize,
    cells: Vec<bool>,
}

impl MaskGrid {
    /// A matrix of side `size` with every cell set to `active`.
    pub fn filled(size: usize, active: bool) -> Self {
        Self {
            size,
            cells: vec![active; size * size],
        }
    }

    /// Every cell active.
    pub fn all_active(size: usize) -> Self {
        Self::filled(size, true)
    }

    /// Every cell inactive.
    pub fn all_inactive(size: usize) -> Self {
        Self::filled(size, false)
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` is active. Out-of-range positions are inactive.
    pub fn is_active(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size && self.cells[pos.index(self.size)]
    }

    /// Set `pos` if it lies inside the matrix; ignored otherwise.
    pub fn set(&mut self, pos: Position, active: bool) {
        if pos.row < self.size && pos.col < self.size {
            self.cells[pos.index(self.size)] = active;
        }
    }

    /// Set a cell given signed `(row, col)`; off-grid coordinates are ignored.
    pub fn set_signed(&mut self, row: i64, col: i64, active: bool) {
        if row >= 0 && col >= 0 {
            self.set(Position::new(row as usize, col as usize), active);
        }
    }

    /// Raw row-major cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable raw row-major cells.
    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Number of active cells.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&a| a).count()
    }

    /// Whether no cell is active.
    pub fn is_blank(&self) -> bool {
        !self.cells.iter().any(|&a| a)
    }

    /// Active positions in row-major order.
    pub fn active_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &a)| a)
            .map(|(i, _)| Position::from_index(i, self.size))
    }

    /// Flip every cell.
    pub fn invert(&mut self) {
        for c in &mut self.cells {
            *c = !*c;
        }
    }

    /// Mirror left to right.
    pub fn flip_horizontal(&mut self) {
        for row in self.cells.chunks_mut(self.size.max(1)) {
            row.reverse();
        }
    }

    /// Mirror top to bottom.
    pub fn flip_vertical(&mut self) {
        let n = self.size;
        for r in 0..n / 2 {
            for c in 0..n {
                self.cells.swap(r * n + c, (n - 1 - r) * n + c);
            }
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&mut self) {
        let n = self.size;
        for r in 0..n {
            for c in (r + 1)..n {
                self.cells.swap(r * n + c, c * n + r);
            }
        }
    }

    /// The tight rectangle around every active cell, or `None` if the
    /// matrix is blank.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut positions = self.active_positions();
        let first = positions.next()?;
        let mut bbox = BoundingBox {
            min_row: first.row,
            min_col: first.col,
            max_row: first.row,
            max_col: first.col,
        };
        for p in positions {
            bbox.min_row = bbox.min_row.min(p.row);
            bbox.min_col = bbox.min_col.min(p.col);
            bbox.max_row = bbox.max_row.max(p.row);
            bbox.max_col = bbox.max_col.max(p.col);
        }
        Some(bbox)
    }

    /// Parse from rows of `'*'` (active) and any other character
    /// (inactive). Rows shorter than the row count are padded inactive.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut m = Self::all_inactive(size);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(size).enumerate() {
                m.set(Position::new(r, c), ch == '*');
            }
        }
        m
    }
}

impl fmt::Debug for MaskGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MaskGrid({}):", self.size)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for MaskGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|&a| if a { '*' } else { '#' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounding_box_of_blank_is_none() {
        assert_eq!(MaskGrid::all_inactive(4).bounding_box(), None);
    }

    #[test]
    fn bounding_box_is_tight() {
        let m = MaskGrid::from_rows(&["#####", "##*##", "#***#", "#####", "#####"]);
        assert_eq!(
            m.bounding_box(),
            Some(BoundingBox {
                min_row: 1,
                min_col: 1,
                max_row: 2,
                max_col: 3
            })
        );
    }

    #[test]
    fn flips_and_transpose() {
        let mut m = MaskGrid::from_rows(&["*##", "###", "###"]);
        m.flip_horizontal();
        assert!(m.is_active(Position::new(0, 2)));
        m.flip_vertical();
        assert!(m.is_active(Position::new(2, 2)));
        let mut t = MaskGrid::from_rows(&["#*#", "###", "###"]);
        t.transpose();
        assert!(t.is_active(Position::new(1, 0)));
        assert_eq!(t.active_count(), 1);
    }

    #[test]
    fn set_ignores_out_of_range() {
        let mut m = MaskGrid::all_inactive(2);
        m.set_signed(-1, 0, true);
        m.set(Position::new(2, 0), true);
        assert!(m.is_blank());
    }

    fn arb_mask() -> impl Strategy<Value = MaskGrid> {
        (1usize..12).prop_flat_map(|n| {
            proptest::collection::vec(any::<bool>(), n * n)
                .prop_map(move |cells| MaskGrid { size: n, cells })
        })
    }

    proptest! {
        #[test]
        fn involutions(m in arb_mask()) {
            let mut a = m.clone();
            a.invert();
            a.invert();
            prop_assert_eq!(&a, &m);
            a.transpose();
            a.transpose();
            prop_assert_eq!(&a, &m);
            a.flip_vertical();
            a.flip_vertical();
            a.flip_horizontal();
            a.flip_horizontal();
            prop_assert_eq!(&a, &m);
        }

        #[test]
        fn bbox_encloses_and_touches_every_edge(m in arb_mask()) {
            match m.bounding_box() {
                None => prop_assert!(m.is_blank()),
                Some(b) => {
                    let active: Vec<_> = m.active_positions().collect();
                    prop_assert!(active.iter().all(|p| b.contains(*p)));
                    prop_assert!(active.iter().any(|p| p.row == b.min_row));
                    prop_assert!(active.iter().any(|p| p.row == b.max_row));
                    prop_assert!(active.iter().any(|p| p.col == b.min_col));
                    prop_assert!(active.iter().any(|p| p.col == b.max_col));
                }
            }
        }
    }
}
