//! Grid coordinates and the inclusive bounding rectangle.

use std::fmt;

/// A 0-based `(row, col)` cell coordinate.
///
/// Row grows downwards, column grows to the right; `(0, 0)` is the
/// top-left cell of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Create a position from a row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major flat index into a `size × size` buffer.
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`index`](Self::index).
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The minimal rectangle enclosing every active cell of a mask.
///
/// Both corners are inclusive, so a single active cell yields a box
/// with `min == max` and width/height of 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Topmost row containing an active cell.
    pub min_row: usize,
    /// Leftmost column containing an active cell.
    pub min_col: usize,
    /// Bottommost row containing an active cell.
    pub max_row: usize,
    /// Rightmost column containing an active cell.
    pub max_col: usize,
}

impl BoundingBox {
    /// Top-left corner of the box.
    pub const fn top_left(&self) -> Position {
        Position::new(self.min_row, self.min_col)
    }

    /// Bottom-right corner of the box.
    pub const fn bottom_right(&self) -> Position {
        Position::new(self.max_row, self.max_col)
    }

    /// Number of columns covered.
    pub const fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    /// Number of rows covered.
    pub const fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// Whether `pos` lies inside the box (edges included).
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row >= self.min_row
            && pos.row <= self.max_row
            && pos.col >= self.min_col
            && pos.col <= self.max_col
    }

    /// Re-express `pos` relative to the box's top-left corner.
    ///
    /// Returns `None` when `pos` falls outside the box.
    pub const fn relative(&self, pos: Position) -> Option<Position> {
        if !self.contains(pos) {
            return None;
        }
        Some(Position::new(pos.row - self.min_row, pos.col - self.min_col))
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.top_left(), self.bottom_right())
    }
}
