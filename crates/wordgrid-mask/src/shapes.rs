//! Preset shapes sized automatically to the puzzle.

use wordgrid_core::{MaskGrid, Position};

use crate::bitmap::{draw_points, Bitmap};
use crate::compound::compose;
use crate::ellipse::{ellipse_points, Ellipse};
use crate::error::MaskError;
use crate::method::MaskMethod;
use crate::polygon::{draw_polygon, Polygon, Rectangle, RegularPolygon, Star};
use crate::shape::{Point, Shape};

/// Every preset, boxed, for enumeration by callers and tests.
pub fn all_presets() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Circle::new()),
        Box::new(Oval::new()),
        Box::new(Square::new()),
        Box::new(Triangle::new()),
        Box::new(Diamond::new()),
        Box::new(Pentagon::new()),
        Box::new(Hexagon::new()),
        Box::new(Octagon::new()),
        Box::new(Star5::new()),
        Box::new(Star6::new()),
        Box::new(Star8::new()),
        Box::new(Donut::new()),
        Box::new(Heart::new()),
        Box::new(Club::new()),
        Box::new(Fish::new()),
        Box::new(Flower::new()),
        Box::new(Spade::new()),
        Box::new(Tree::new()),
    ]
}

/// Look up a preset by case-insensitive name.
pub fn preset_by_name(name: &str) -> Option<Box<dyn Shape>> {
    all_presets()
        .into_iter()
        .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
}

fn degenerate(shape: &dyn Shape, size: usize) -> MaskError {
    MaskError::Degenerate {
        shape: shape.name().to_string(),
        size,
    }
}

macro_rules! delegating_preset {
    ($(#[$doc:meta])* $name:ident($inner:ty) = $init:expr, min_size = $min:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name($inner);

        impl $name {
            #[doc = concat!("Create a ", stringify!($name), " preset.")]
            pub fn new() -> Self {
                Self($init)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Shape for $name {
            fn name(&self) -> &str {
                stringify!($name)
            }

            fn min_size(&self) -> usize {
                $min
            }

            fn default_static(&self) -> bool {
                self.0.default_static()
            }

            fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
                self.0.draw(size)
            }
        }
    };
}

delegating_preset!(
    /// A circle filling the puzzle.
    Circle(Ellipse) = Ellipse::new(), min_size = 1
);
delegating_preset!(
    /// An upward-pointing triangle.
    Triangle(RegularPolygon) = RegularPolygon::preset(3, 0.0), min_size = 1
);
delegating_preset!(
    /// A square rotated 45 degrees.
    Diamond(RegularPolygon) = RegularPolygon::preset(4, 90.0), min_size = 1
);
delegating_preset!(
    /// A regular pentagon.
    Pentagon(RegularPolygon) = RegularPolygon::preset(5, 0.0), min_size = 5
);
delegating_preset!(
    /// A regular hexagon with flat top and bottom.
    Hexagon(RegularPolygon) = RegularPolygon::preset(6, 90.0), min_size = 6
);
delegating_preset!(
    /// A regular octagon with flat sides.
    Octagon(RegularPolygon) = RegularPolygon::preset(8, 22.5), min_size = 8
);
delegating_preset!(
    /// A five-pointed star.
    Star5(Star) = Star::preset(5), min_size = 10
);
delegating_preset!(
    /// An eight-pointed star.
    Star8(Star) = Star::preset(8), min_size = 12
);

// ── Oval ───────────────────────────────────────────────────────────

/// A centred ellipse 1.5 times wider than tall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Oval;

impl Oval {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Oval {
    fn name(&self) -> &str {
        "Oval"
    }

    fn min_size(&self) -> usize {
        3
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let width = size * 9 / 10;
        let height = width * 2 / 3;
        if width == 0 || height == 0 {
            return Err(degenerate(self, size));
        }
        let half = (size / 2) as i64;
        Ok(draw_points(
            size,
            &ellipse_points(width, height, (half, half), size),
        ))
    }
}

// ── Square ─────────────────────────────────────────────────────────

/// The largest even-sided square, anchored top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square;

impl Square {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Square {
    fn name(&self) -> &str {
        "Square"
    }

    fn min_size(&self) -> usize {
        2
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let side = (size - size % 2) as i64;
        if side == 0 {
            return Err(degenerate(self, size));
        }
        let far = side - 1;
        Ok(draw_polygon(size, &[(0, 0), (0, far), (far, far), (far, 0)]))
    }
}

// ── Star6 ──────────────────────────────────────────────────────────

/// A six-pointed star from two overlapping triangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Star6;

impl Star6 {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Star6 {
    fn name(&self) -> &str {
        "Star6"
    }

    fn min_size(&self) -> usize {
        6
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let up = RegularPolygon::preset(3, 0.0);
        let down = RegularPolygon::preset(3, 180.0);
        compose(
            size,
            [
                (&up as &dyn Shape, MaskMethod::Standard),
                (&down as &dyn Shape, MaskMethod::Additive),
            ],
        )
    }
}

// ── Donut ──────────────────────────────────────────────────────────

/// A ring: a full circle with a proportional circular hole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Donut;

impl Donut {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }

    /// Outer and hole diameters for `size`. Both are odd, so the hole
    /// sits on the ring's centre cell.
    pub fn diameters(size: usize) -> (usize, usize) {
        let donut = if size % 2 == 0 { size - 1 } else { size };
        let n = size.saturating_sub(2);
        let mut hole = (n * n / (3 * size.saturating_sub(1).max(1))).max(3);
        hole = hole.min(size / 2);
        if hole % 2 == 0 {
            hole += 1;
        }
        (donut, hole)
    }
}

impl Shape for Donut {
    fn name(&self) -> &str {
        "Donut"
    }

    fn min_size(&self) -> usize {
        6
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let (donut, hole) = Self::diameters(size);
        let outer = Ellipse::sized(donut, donut)?;
        let inner = Ellipse::sized(hole, hole)?;
        compose(
            size,
            [
                (&outer as &dyn Shape, MaskMethod::Standard),
                (&inner as &dyn Shape, MaskMethod::Subtractive),
            ],
        )
    }
}

// ── Heart ──────────────────────────────────────────────────────────

/// Two circles over a tapering point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Heart;

impl Heart {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Heart {
    fn name(&self) -> &str {
        "Heart"
    }

    fn min_size(&self) -> usize {
        8
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let lobe = size / 2 + size % 2;
        let nudge = usize::from(size % 2 != 0 && lobe % 2 == 0);
        let c = (size / 2 - lobe / 2 + nudge) as i64;
        let right_x = (size / 2) as i64 + c - i64::from(size % 2 == 0);

        let left = Ellipse::sized(lobe, lobe)?.with_center((c, c)).draw(size)?;
        let right = Ellipse::sized(lobe, lobe)?
            .with_center((right_x, c))
            .draw(size)?;
        let lb = left.bounding_box().ok_or_else(|| degenerate(self, size))?;
        let rb = right.bounding_box().ok_or_else(|| degenerate(self, size))?;

        // Lowest cell of the left lobe's outer column, and highest cell of
        // its inner column, anchor the point's upper corners.
        let outer_row = (lb.min_row..=lb.max_row)
            .rev()
            .find(|&r| left.is_active(Position::new(r, lb.min_col)))
            .ok_or_else(|| degenerate(self, size))?;
        let inner_row = (lb.min_row..=lb.max_row)
            .find(|&r| left.is_active(Position::new(r, lb.max_col)))
            .ok_or_else(|| degenerate(self, size))?;

        let point = draw_polygon(
            size,
            &[
                (lb.min_col as i64, outer_row as i64),
                (lb.max_row as i64, (rb.max_row * 2) as i64),
                (rb.max_col as i64, outer_row as i64),
                (lb.max_col as i64, inner_row as i64),
            ],
        );

        let mut acc = left;
        MaskMethod::Additive.apply(&mut acc, &right)?;
        MaskMethod::Additive.apply(&mut acc, &point)?;
        Ok(acc)
    }
}

// ── Card suits ─────────────────────────────────────────────────────

/// Shared geometry of the club and spade: the puzzle centre, a shift of
/// -1 on even puzzles, the odd lobe diameter and the odd stem width.
fn suit_geometry(size: usize) -> (i64, i64, usize, usize) {
    let center = size / 2;
    let offset = (size % 2) as i64 - 1;
    let lobe = center + 1 - center % 2;
    let quarter = lobe / 4;
    let stem = quarter + 1 - quarter % 2;
    (center as i64, offset, lobe, stem)
}

/// The stem running down from the centre and the two-row foot across
/// the bottom.
fn suit_base(size: usize) -> Result<(Rectangle, Rectangle), MaskError> {
    let (center, offset, lobe, stem) = suit_geometry(size);
    let vertical = Rectangle::new(stem, center as usize)?
        .with_origin((center - (stem / 2) as i64 + offset, center));
    let foot = Rectangle::new(lobe, 2)?
        .with_origin((center - (lobe / 2) as i64 + offset, size as i64 - 2));
    Ok((vertical, foot))
}

/// Three circles on a stem, like the playing-card suit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Club;

impl Club {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Club {
    fn name(&self) -> &str {
        "Club"
    }

    fn min_size(&self) -> usize {
        18
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let (center, _, lobe, _) = suit_geometry(size);
        let (half, quarter) = ((lobe / 2) as i64, (lobe / 4) as i64);
        let top = Ellipse::sized(lobe, lobe)?.with_center((center, center - half));
        let left = Ellipse::sized(lobe, lobe)?.with_center((center - half, center + quarter));
        let right = Ellipse::sized(lobe, lobe)?.with_center((center + half, center + quarter));
        let (stem, foot) = suit_base(size)?;
        compose(
            size,
            [
                (&top as &dyn Shape, MaskMethod::Standard),
                (&left as &dyn Shape, MaskMethod::Additive),
                (&right as &dyn Shape, MaskMethod::Additive),
                (&stem as &dyn Shape, MaskMethod::Additive),
                (&foot as &dyn Shape, MaskMethod::Additive),
            ],
        )
    }
}

/// Two circles under an inverted point on a stem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spade;

impl Spade {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Spade {
    fn name(&self) -> &str {
        "Spade"
    }

    fn min_size(&self) -> usize {
        18
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let (center, offset, lobe, _) = suit_geometry(size);
        let (half, quarter) = ((lobe / 2) as i64, (lobe / 4) as i64);
        let left = Ellipse::sized(lobe, lobe)?.with_center((center - half, center + quarter));
        let right = Ellipse::sized(lobe, lobe)?.with_center((center + half, center + quarter));
        let (stem, foot) = suit_base(size)?;

        // The point joins the top of each lobe to the puzzle's top edge
        // and back down to the centre.
        let left_top = topmost(&left.points(size), i64::min)
            .ok_or_else(|| degenerate(self, size))?;
        let right_top = topmost(&right.points(size), i64::max)
            .ok_or_else(|| degenerate(self, size))?;
        let axis = center + offset;
        let point = Polygon::new(vec![(axis, 0), left_top, (axis, center), right_top])?;

        compose(
            size,
            [
                (&left as &dyn Shape, MaskMethod::Standard),
                (&right as &dyn Shape, MaskMethod::Additive),
                (&foot as &dyn Shape, MaskMethod::Additive),
                (&stem as &dyn Shape, MaskMethod::Additive),
                (&point as &dyn Shape, MaskMethod::Additive),
            ],
        )
    }
}

/// The point on the smallest row, picking among ties by column with `pick`.
fn topmost(points: &[Point], pick: impl Fn(i64, i64) -> i64) -> Option<Point> {
    let y = points.iter().map(|&(_, y)| y).min()?;
    let x = points
        .iter()
        .filter(|&&(_, py)| py == y)
        .map(|&(x, _)| x)
        .reduce(pick)?;
    Some((x, y))
}

// ── Fish ───────────────────────────────────────────────────────────

/// An oval body on the right with a forked tail fin on the left edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fish;

impl Fish {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Fish {
    fn name(&self) -> &str {
        "Fish"
    }

    fn min_size(&self) -> usize {
        18
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let center = (size / 2) as i64;
        let body_w = size * 4 / 5;
        let tall = size * 2 / 3;
        let body_h = tall + 1 - tall % 2;
        let nudge = i64::from(size % 2 != 0 && body_w % 2 != 0);
        let body_x = size as i64 - (body_w / 2) as i64 - nudge;

        let body = Ellipse::sized(body_w, body_h)?.with_center((body_x, center));
        let fin = Ellipse::sized(body_h, body_h)?.with_center((0, center));
        let notch = Ellipse::sized(body_h, body_h)?.with_center((-((body_h / 4) as i64), center));
        compose(
            size,
            [
                (&body as &dyn Shape, MaskMethod::Standard),
                (&fin as &dyn Shape, MaskMethod::Additive),
                (&notch as &dyn Shape, MaskMethod::Subtractive),
            ],
        )
    }
}

// ── Flower ─────────────────────────────────────────────────────────

/// A circle split into four petals by its diagonals and a central cross.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flower;

impl Flower {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Flower {
    fn name(&self) -> &str {
        "Flower"
    }

    fn min_size(&self) -> usize {
        9
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let diameter = size - (size - 1) % 2;
        let half = diameter / 2;
        let cross = half - (half - 1) % 2;

        let bloom = Ellipse::sized(diameter, diameter)?;
        let last = diameter as i64 - 1;
        let falling = Bitmap::new((0..=last).map(|i| (i, i)).collect());
        let rising = Bitmap::new((0..=last).map(|i| (last - i, i)).collect());
        let bar_v = Ellipse::sized(1, cross)?;
        let bar_h = Ellipse::sized(cross, 1)?;
        compose(
            size,
            [
                (&bloom as &dyn Shape, MaskMethod::Standard),
                (&falling as &dyn Shape, MaskMethod::Subtractive),
                (&rising as &dyn Shape, MaskMethod::Subtractive),
                (&bar_v as &dyn Shape, MaskMethod::Subtractive),
                (&bar_h as &dyn Shape, MaskMethod::Subtractive),
            ],
        )
    }
}

// ── Tree ───────────────────────────────────────────────────────────

/// A triangular crown on a trunk that runs to the bottom edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tree;

impl Tree {
    /// Create the preset.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Tree {
    fn name(&self) -> &str {
        "Tree"
    }

    fn min_size(&self) -> usize {
        10
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let crown = RegularPolygon::preset(3, 0.0);
        let corners = crown.points(size);
        let (&(right_x, base_y), &(left_x, _)) = corners
            .get(1)
            .zip(corners.get(2))
            .ok_or_else(|| degenerate(self, size))?;
        let crown_w = (right_x - left_x).unsigned_abs() as usize + 1;

        let mut trunk_w = crown_w / 4;
        if trunk_w < 2 {
            trunk_w = (crown_w / 3).max(2);
        }
        let trunk_w = (trunk_w + 1 - trunk_w % 2).max(3);
        let trunk_h = (size as i64 - base_y).max(2) as usize;
        let centre_x = (size / 2) as i64 - (trunk_w / 2) as i64;
        let trunk_x = if size % 2 == 0 { centre_x - 1 } else { centre_x };
        if !(0..size as i64).contains(&trunk_x) {
            return Err(degenerate(self, size));
        }

        let trunk = Rectangle::new(trunk_w, trunk_h)?.with_origin((trunk_x, base_y));
        compose(
            size,
            [
                (&crown as &dyn Shape, MaskMethod::Standard),
                (&trunk as &dyn Shape, MaskMethod::Additive),
            ],
        )
    }
}
