//! Point-set masks: explicit bitmaps and raster-derived image masks.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};
use wordgrid_core::MaskGrid;

use crate::error::MaskError;
use crate::shape::{Point, Shape};

/// Activate each listed point; off-grid points are ignored.
pub(crate) fn draw_points(size: usize, points: &[Point]) -> MaskGrid {
    let mut grid = MaskGrid::all_inactive(size);
    for &(x, y) in points {
        grid.set_signed(y, x, true);
    }
    grid
}

/// A mask made of explicit `(x, y)` points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bitmap {
    points: Vec<Point>,
}

impl Bitmap {
    /// A bitmap activating exactly `points`.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Add a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Shape for Bitmap {
    fn name(&self) -> &str {
        "Bitmap"
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        Ok(draw_points(size, &self.points))
    }
}

// ── ImageMask ──────────────────────────────────────────────────────

/// A mask traced from the dark pixels of a greyscale image.
///
/// Pixels brighter than the threshold are treated as background. The
/// dark content is cropped to its bounding box, shrunk with
/// nearest-neighbour sampling to fit the puzzle (never enlarged), and
/// anchored at the top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMask {
    image: GrayImage,
    threshold: u8,
}

impl ImageMask {
    /// Default luminance cut-off.
    pub const DEFAULT_THRESHOLD: u8 = 200;

    /// Trace `image` with the default threshold.
    pub fn new(image: GrayImage) -> Self {
        Self {
            image,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Trace a decoded image of any colour type, converted to luma.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::new(image.to_luma8())
    }

    /// Decode a BMP, JPEG or PNG file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MaskError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| MaskError::ImageLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_dynamic(&image))
    }

    /// Override the luminance threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// The greyscale source.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Dark-pixel points after crop and resize to fit `size`.
    pub fn points(&self, size: usize) -> Vec<Point> {
        let mut bw = self.image.clone();
        for px in bw.pixels_mut() {
            px.0[0] = if px.0[0] > self.threshold { 255 } else { 0 };
        }

        let bounds = bw
            .enumerate_pixels()
            .filter(|(_, _, px)| px.0[0] == 0)
            .fold(None, |acc: Option<(u32, u32, u32, u32)>, (x, y, _)| {
                Some(match acc {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                })
            });
        let Some((x0, y0, x1, y1)) = bounds else {
            return Vec::new();
        };

        let mut content = imageops::crop_imm(&bw, x0, y0, x1 - x0 + 1, y1 - y0 + 1).to_image();
        let target = u32::try_from(size).unwrap_or(u32::MAX);
        if content.width() > target || content.height() > target {
            content = DynamicImage::ImageLuma8(content)
                .resize(target, target, FilterType::Nearest)
                .into_luma8();
        }

        content
            .enumerate_pixels()
            .filter(|(_, _, px)| px.0[0] <= self.threshold)
            .map(|(x, y, _)| (i64::from(x), i64::from(y)))
            .collect()
    }
}

impl Shape for ImageMask {
    fn name(&self) -> &str {
        "ImageMask"
    }

    fn default_static(&self) -> bool {
        false
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        let points = self.points(size);
        if points.is_empty() {
            return Err(MaskError::NoContrast {
                threshold: self.threshold,
            });
        }
        Ok(draw_points(size, &points))
    }
}
