//! Ellipse masks.

use wordgrid_core::MaskGrid;

use crate::bitmap::draw_points;
use crate::error::MaskError;
use crate::shape::{Point, Shape};

/// All integer points inside a `width × height` ellipse centred on
/// `center`, for a puzzle of side `size`.
///
/// Sampling runs on a half-cell lattice so even and odd diameters both
/// produce exactly `width` columns and `height` rows. On even puzzles an
/// odd diameter has no exact centre cell, so the ellipse shifts one cell
/// toward the top-left.
pub fn ellipse_points(width: usize, height: usize, center: Point, size: usize) -> Vec<Point> {
    let wr = width as f64 / 2.0;
    let hr = height as f64 / 2.0;
    let ratio = wr / hr;

    let x_offset = if size % 2 == 0 && width % 2 != 0 {
        center.0 - 1
    } else {
        center.0
    };
    let y_offset = if size % 2 == 0 && height % 2 != 0 {
        center.1 - 1
    } else {
        center.1
    };

    let span = |d: usize| {
        let s = (d + 1) as f64;
        (-s / 2.0 + 1.0, s / 2.0 - 1.0)
    };
    let (min_x, max_x) = span(width);
    let (min_y, max_y) = span(height);

    let mut points = Vec::new();
    let mut y = min_y;
    while y < max_y + 1.0 {
        let mut x = min_x;
        while x < max_x + 1.0 {
            if ((y * ratio).powi(2) + x.powi(2)).sqrt() <= wr {
                points.push(((x + x_offset as f64) as i64, (y + y_offset as f64) as i64));
            }
            x += 1.0;
        }
        y += 1.0;
    }
    points
}

/// An ellipse; defaults to a circle filling the puzzle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ellipse {
    width: Option<usize>,
    height: Option<usize>,
    center: Option<Point>,
}

impl Ellipse {
    /// A circle spanning the whole puzzle, centred.
    pub fn new() -> Self {
        Self::default()
    }

    /// An ellipse of fixed `width × height`, centred on the puzzle.
    pub fn sized(width: usize, height: usize) -> Result<Self, MaskError> {
        if width == 0 {
            return Err(MaskError::InvalidDimension { name: "width" });
        }
        if height == 0 {
            return Err(MaskError::InvalidDimension { name: "height" });
        }
        Ok(Self {
            width: Some(width),
            height: Some(height),
            center: None,
        })
    }

    /// Pin the centre at `(x, y)`. Off-grid centres are allowed.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Points at puzzle size `size`.
    pub fn points(&self, size: usize) -> Vec<Point> {
        let half = (size / 2) as i64;
        ellipse_points(
            self.width.unwrap_or(size),
            self.height.unwrap_or(size),
            self.center.unwrap_or((half, half)),
            size,
        )
    }
}

impl Shape for Ellipse {
    fn name(&self) -> &str {
        "Ellipse"
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        Ok(draw_points(size, &self.points(size)))
    }
}
