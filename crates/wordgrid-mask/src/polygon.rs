//! Polygon masks: arbitrary paths, rectangles, regular polygons and stars.
//!
//! Outlines are traced with Bresenham's line algorithm and the interior
//! is filled by even-odd ray casting over the outline's bounding box.

use wordgrid_core::MaskGrid;

use crate::error::MaskError;
use crate::shape::{Point, Shape};

fn round_half_up(n: f64) -> i64 {
    (n + 0.5).floor() as i64
}

/// `(cos, sin)` of an angle in degrees, exact at the right angles.
pub fn cos_sin_from_degrees(degrees: f64) -> (f64, f64) {
    let d = degrees.rem_euclid(360.0);
    if d == 90.0 {
        (0.0, 1.0)
    } else if d == 180.0 {
        (-1.0, 0.0)
    } else if d == 270.0 {
        (0.0, -1.0)
    } else {
        let rad = d.to_radians();
        (rad.cos(), rad.sin())
    }
}

/// Radius and centre coordinate used when a shape is left unpinned.
///
/// Even puzzles have no centre cell, so the shape shrinks by one and
/// sits toward the top-left.
fn puzzle_radius(size: usize) -> i64 {
    let half = (size / 2) as i64;
    if size % 2 == 0 {
        half - 1
    } else {
        half
    }
}

/// Trace a line from `p1` to `p2` onto `grid`, clipping off-grid cells.
pub(crate) fn connect_points(grid: &mut MaskGrid, p1: Point, p2: Point) {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let (mut x, mut y) = (x1, y1);
    let sx = if x1 > x2 { -1 } else { 1 };
    let sy = if y1 > y2 { -1 } else { 1 };
    if dx > dy {
        let mut err = dx as f64 / 2.0;
        while x != x2 {
            grid.set_signed(y, x, true);
            err -= dy as f64;
            if err < 0.0 {
                y += sy;
                err += dx as f64;
            }
            x += sx;
        }
    } else {
        let mut err = dy as f64 / 2.0;
        while y != y2 {
            grid.set_signed(y, x, true);
            err -= dx as f64;
            if err < 0.0 {
                x += sx;
                err += dy as f64;
            }
            y += sy;
        }
        grid.set_signed(y, x, true);
    }
}

/// Even-odd ray cast. `polygon` must be closed (last point repeats the first).
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    let (x, y) = (point.0 as f64, point.1 as f64);
    let mut inside = false;
    for edge in polygon.windows(2) {
        let (x1, y1) = (edge[0].0 as f64, edge[0].1 as f64);
        let (x2, y2) = (edge[1].0 as f64, edge[1].1 as f64);
        if (y < y1) != (y < y2) && x < (x2 - x1) * (y - y1) / (y2 - y1) + x1 {
            inside = !inside;
        }
    }
    inside
}

/// Fill the interior of `points`, scanning the vertices' bounding box
/// clipped to the grid.
fn fill_shape(grid: &mut MaskGrid, points: &[Point]) {
    let Some(&first) = points.first() else {
        return;
    };
    let last = grid.size() as i64 - 1;
    let (mut x0, mut y0, mut x1, mut y1) = (first.0, first.1, first.0, first.1);
    for &(x, y) in points {
        x0 = x0.min(x);
        y0 = y0.min(y);
        x1 = x1.max(x);
        y1 = y1.max(y);
    }
    let (x0, y0, x1, y1) = (x0.max(0), y0.max(0), x1.min(last), y1.min(last));

    let mut closed = points.to_vec();
    closed.push(first);
    for y in y0..=y1 {
        for x in x0..=x1 {
            if point_in_polygon((x, y), &closed) {
                grid.set_signed(y, x, true);
            }
        }
    }
}

/// Connect every point to the next, close the path, and fill.
pub(crate) fn draw_polygon(size: usize, points: &[Point]) -> MaskGrid {
    let mut grid = MaskGrid::all_inactive(size);
    for (i, &p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        connect_points(&mut grid, p1, p2);
    }
    fill_shape(&mut grid, points);
    grid
}

/// Trace the path in two halves that both start from the first point,
/// then fill. Keeps Bresenham outlines symmetric for star shapes.
pub(crate) fn draw_polygon_in_halves(size: usize, points: &[Point]) -> MaskGrid {
    let n = points.len();
    let left_end = if n % 2 == 0 { n / 2 + 1 } else { n / 2 + 2 };
    let left: Vec<Point> = points[..left_end.min(n)].to_vec();
    let right: Vec<Point> = std::iter::once(points[0])
        .chain(points.iter().rev().take(n / 2).copied())
        .collect();

    let mut grid = MaskGrid::all_inactive(size);
    for half in [left, right] {
        for pair in half.windows(2) {
            connect_points(&mut grid, pair[0], pair[1]);
        }
    }
    fill_shape(&mut grid, points);
    grid
}

// ── Polygon ────────────────────────────────────────────────────────

/// An arbitrary closed polygon through three or more points.
///
/// The path closes back to the first point automatically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build from `points`; at least three are required.
    pub fn new(points: Vec<Point>) -> Result<Self, MaskError> {
        if points.len() < 3 {
            return Err(MaskError::TooFewVertices { got: points.len() });
        }
        Ok(Self { points })
    }

    /// The vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Shape for Polygon {
    fn name(&self) -> &str {
        "Polygon"
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        Ok(draw_polygon(size, &self.points))
    }
}

// ── Rectangle ──────────────────────────────────────────────────────

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rectangle {
    width: usize,
    height: usize,
    origin: Point,
}

impl Rectangle {
    /// A `width × height` rectangle at the puzzle's top-left corner.
    pub fn new(width: usize, height: usize) -> Result<Self, MaskError> {
        if width == 0 {
            return Err(MaskError::InvalidDimension { name: "width" });
        }
        if height == 0 {
            return Err(MaskError::InvalidDimension { name: "height" });
        }
        Ok(Self {
            width,
            height,
            origin: (0, 0),
        })
    }

    /// Move the top-left corner to `(x, y)`.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Corner points, clockwise from the origin down.
    pub fn points(&self) -> Vec<Point> {
        let (x, y) = self.origin;
        let (w, h) = (self.width as i64, self.height as i64);
        vec![(x, y), (x, y + h - 1), (x + w - 1, y + h - 1), (x + w - 1, y)]
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        "Rectangle"
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        Ok(draw_polygon(size, &self.points()))
    }
}

// ── RegularPolygon ─────────────────────────────────────────────────

/// A polygon with equal sides, oriented with a vertex pointing north.
#[derive(Clone, Debug, PartialEq)]
pub struct RegularPolygon {
    vertices: usize,
    radius: Option<usize>,
    center: Option<Point>,
    angle: f64,
}

impl RegularPolygon {
    /// A regular polygon with `vertices` sides, sized to the puzzle.
    pub fn new(vertices: usize) -> Result<Self, MaskError> {
        if vertices < 3 {
            return Err(MaskError::TooFewVertices { got: vertices });
        }
        Ok(Self {
            vertices,
            radius: None,
            center: None,
            angle: 0.0,
        })
    }

    /// Unchecked constructor for presets with a known-good vertex count.
    pub(crate) const fn preset(vertices: usize, angle: f64) -> Self {
        Self {
            vertices,
            radius: None,
            center: None,
            angle,
        }
    }

    /// Pin the centre-to-vertex distance.
    pub fn with_radius(mut self, radius: usize) -> Result<Self, MaskError> {
        if radius == 0 {
            return Err(MaskError::InvalidDimension { name: "radius" });
        }
        self.radius = Some(radius);
        Ok(self)
    }

    /// Pin the centre at `(x, y)`.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Rotate clockwise by `angle` degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Vertex coordinates, starting due north of `center` before rotation.
    pub fn calculate_vertices(vertices: usize, radius: i64, center: Point, angle: f64) -> Vec<Point> {
        let step = 360.0 / vertices as f64;
        let (cx, cy) = (center.0 as f64, center.1 as f64);
        let r = radius as f64;
        (0..vertices)
            .map(|i| {
                let (cos, sin) = cos_sin_from_degrees(angle - 90.0 + step * i as f64);
                (round_half_up(cos * r + cx), round_half_up(sin * r + cy))
            })
            .collect()
    }

    /// Vertices at puzzle size `size`.
    pub fn points(&self, size: usize) -> Vec<Point> {
        let radius = self.radius.map_or_else(|| puzzle_radius(size), |r| r as i64);
        let center = self.center.unwrap_or((radius, radius));
        Self::calculate_vertices(self.vertices, radius, center, self.angle)
    }
}

impl Shape for RegularPolygon {
    fn name(&self) -> &str {
        "RegularPolygon"
    }

    fn default_static(&self) -> bool {
        false
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        Ok(draw_polygon(size, &self.points(size)))
    }
}

// ── Star ───────────────────────────────────────────────────────────

/// A pointed star alternating outer and inner vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    outer_vertices: usize,
    outer_radius: Option<usize>,
    inner_radius: Option<usize>,
    center: Option<Point>,
    angle: f64,
}

impl Star {
    /// A star with `outer_vertices` points, sized to the puzzle.
    pub fn new(outer_vertices: usize) -> Result<Self, MaskError> {
        if outer_vertices < 3 {
            return Err(MaskError::TooFewVertices {
                got: outer_vertices,
            });
        }
        Ok(Self {
            outer_vertices,
            outer_radius: None,
            inner_radius: None,
            center: None,
            angle: 0.0,
        })
    }

    /// Unchecked constructor for presets with a known-good point count.
    pub(crate) const fn preset(outer_vertices: usize) -> Self {
        Self {
            outer_vertices,
            outer_radius: None,
            inner_radius: None,
            center: None,
            angle: 0.0,
        }
    }

    /// Pin both radii.
    pub fn with_radii(mut self, outer: usize, inner: usize) -> Result<Self, MaskError> {
        if outer == 0 {
            return Err(MaskError::InvalidDimension {
                name: "outer_radius",
            });
        }
        if inner == 0 {
            return Err(MaskError::InvalidDimension {
                name: "inner_radius",
            });
        }
        self.outer_radius = Some(outer);
        self.inner_radius = Some(inner);
        Ok(self)
    }

    /// Pin the centre at `(x, y)`.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Rotate clockwise by `angle` degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Alternating outer/inner vertex coordinates.
    pub fn calculate_vertices(
        outer_vertices: usize,
        outer_radius: i64,
        inner_radius: i64,
        center: Point,
        angle: f64,
    ) -> Vec<Point> {
        let step = 180.0 / outer_vertices as f64;
        let (cx, cy) = (center.0 as f64, center.1 as f64);
        (0..outer_vertices * 2)
            .map(|i| {
                let r = if i % 2 == 0 { outer_radius } else { inner_radius } as f64;
                let (cos, sin) = cos_sin_from_degrees(angle - 90.0 + step * i as f64);
                (round_half_up(cos * r + cx), round_half_up(sin * r + cy))
            })
            .collect()
    }

    /// Vertices at puzzle size `size`.
    pub fn points(&self, size: usize) -> Vec<Point> {
        let radius = puzzle_radius(size);
        Self::calculate_vertices(
            self.outer_vertices,
            self.outer_radius.map_or(radius, |r| r as i64),
            self.inner_radius.map_or(radius / 2, |r| r as i64),
            self.center.unwrap_or((radius, radius)),
            self.angle,
        )
    }
}

impl Shape for Star {
    fn name(&self) -> &str {
        "Star"
    }

    fn default_static(&self) -> bool {
        false
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        Ok(draw_polygon_in_halves(size, &self.points(size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use wordgrid_core::Position;

    #[test]
    fn right_angles_are_exact() {
        assert_eq!(cos_sin_from_degrees(-90.0), (0.0, -1.0));
        assert_eq!(cos_sin_from_degrees(450.0), (0.0, 1.0));
        assert_eq!(cos_sin_from_degrees(180.0), (-1.0, 0.0));
    }

    #[test]
    fn rectangle_covers_exact_area() {
        let m = Rectangle::new(3, 2)
            .unwrap()
            .with_origin((1, 1))
            .draw(5)
            .unwrap();
        assert_eq!(m.active_count(), 6);
        let b = m.bounding_box().unwrap();
        assert_eq!((b.min_row, b.min_col, b.max_row, b.max_col), (1, 1, 2, 3));
    }

    #[test]
    fn rectangle_is_clipped_at_edges() {
        let m = Rectangle::new(4, 4)
            .unwrap()
            .with_origin((-2, -2))
            .draw(5)
            .unwrap();
        assert_eq!(m.active_count(), 4);
        assert!(m.is_active(Position::new(1, 1)));
    }

    #[test]
    fn polygon_needs_three_points() {
        assert_eq!(
            Polygon::new(vec![(0, 0), (1, 1)]),
            Err(MaskError::TooFewVertices { got: 2 })
        );
        assert!(RegularPolygon::new(2).is_err());
        assert!(Star::new(2).is_err());
    }

    #[test]
    fn ray_cast_square() {
        let sq = [(0, 0), (0, 4), (4, 4), (4, 0), (0, 0)];
        assert!(point_in_polygon((2, 2), &sq));
        assert!(!point_in_polygon((5, 2), &sq));
    }

    #[test]
    fn triangle_points_north() {
        let m = RegularPolygon::new(3).unwrap().draw(11).unwrap();
        assert!(m.is_active(Position::new(0, 5)));
        assert!(m.is_active(Position::new(8, 1)));
        assert!(m.is_active(Position::new(8, 9)));
        assert!(!m.is_active(Position::new(9, 5)));
        assert!(m.is_active(Position::new(5, 5)));
        let b = m.bounding_box().unwrap();
        assert_eq!((b.min_row, b.min_col, b.max_row, b.max_col), (0, 1, 8, 9));
    }

    #[test]
    fn star_centre_is_filled() {
        let m = Star::new(5).unwrap().draw(11).unwrap();
        assert!(m.is_active(Position::new(5, 5)));
        assert!(m.is_active(Position::new(0, 5)));
    }

    #[test]
    fn rotated_shapes_are_not_static() {
        assert!(!RegularPolygon::new(5).unwrap().default_static());
        assert!(!Star::new(5).unwrap().default_static());
        assert!(Rectangle::new(1, 1).unwrap().default_static());
    }

    #[test]
    fn polygon_compliance() {
        compliance::run_filled_shape_compliance(
            &Polygon::new(vec![(0, 0), (4, 0), (2, 4)]).unwrap(),
            &[5, 8],
        );
        compliance::run_filled_shape_compliance(&RegularPolygon::new(6).unwrap(), &[5, 10, 21]);
        compliance::run_filled_shape_compliance(&Star::new(8).unwrap(), &[12, 15]);
    }

    proptest! {
        #[test]
        fn rectangle_area_matches_clipped_extent(
            w in 1usize..10, h in 1usize..10,
            x in -5i64..10, y in -5i64..10,
            size in 1usize..12,
        ) {
            let m = Rectangle::new(w, h).unwrap().with_origin((x, y)).draw(size).unwrap();
            let clip = |o: i64, d: usize| {
                let lo = o.max(0);
                let hi = (o + d as i64).min(size as i64);
                (hi - lo).max(0) as usize
            };
            prop_assert_eq!(m.active_count(), clip(x, w) * clip(y, h));
        }
    }
}
