//! The `Shape` trait and the `Mask` wrapper that composites it.

use std::fmt;

use wordgrid_core::MaskGrid;

use crate::error::MaskError;
use crate::method::MaskMethod;

/// A signed `(x, y)` geometry point: `x` is the column, `y` the row.
pub type Point = (i64, i64);

/// Something that can render a square activation matrix.
///
/// Implementations only produce geometry; minimum-size checks and
/// compositing are handled by [`Mask`].
///
/// # Object safety
///
/// The trait is object-safe; masks hold `Box<dyn Shape>`.
pub trait Shape: fmt::Debug {
    /// Human-readable name, used in errors and logs.
    fn name(&self) -> &str;

    /// Smallest puzzle size the shape renders at.
    fn min_size(&self) -> usize {
        1
    }

    /// Whether masks built from this shape are static unless overridden.
    ///
    /// Static masks keep their rendering across puzzle size changes;
    /// non-static masks are re-rendered at the new size.
    fn default_static(&self) -> bool {
        true
    }

    /// Draw at `size`. Cells start inactive unless the shape says otherwise.
    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError>;
}

/// Render `shape` at `size`, enforcing size limits.
pub fn render_shape(shape: &dyn Shape, size: usize) -> Result<MaskGrid, MaskError> {
    if size == 0 {
        return Err(MaskError::ZeroSize);
    }
    if size < shape.min_size() {
        return Err(MaskError::PuzzleTooSmall {
            shape: shape.name().to_string(),
            size,
            min_size: shape.min_size(),
        });
    }
    shape.draw(size)
}

// ── Mask ───────────────────────────────────────────────────────────

/// A shape together with its compositing method and static flag.
///
/// The last rendering is cached so static masks can be re-applied at
/// the size they were first drawn at.
#[derive(Debug)]
pub struct Mask {
    shape: Box<dyn Shape>,
    method: MaskMethod,
    is_static: bool,
    rendered: Option<MaskGrid>,
}

impl Mask {
    /// Wrap `shape` with [`MaskMethod::Standard`] and the shape's
    /// default static flag.
    pub fn new<S: Shape + 'static>(shape: S) -> Self {
        let is_static = shape.default_static();
        Self {
            shape: Box::new(shape),
            method: MaskMethod::Standard,
            is_static,
            rendered: None,
        }
    }

    /// Wrap an already boxed shape, as returned by
    /// [`preset_by_name`](crate::shapes::preset_by_name).
    pub fn from_boxed(shape: Box<dyn Shape>) -> Self {
        let is_static = shape.default_static();
        Self {
            shape,
            method: MaskMethod::Standard,
            is_static,
            rendered: None,
        }
    }

    /// Set the compositing method.
    pub fn with_method(mut self, method: MaskMethod) -> Self {
        self.method = method;
        self
    }

    /// Override the static flag.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Name of the underlying shape.
    pub fn name(&self) -> &str {
        self.shape.name()
    }

    /// The underlying shape.
    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    /// Compositing method.
    pub fn method(&self) -> MaskMethod {
        self.method
    }

    /// Whether the mask is static.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Last rendering, if any.
    pub fn rendered(&self) -> Option<&MaskGrid> {
        self.rendered.as_ref()
    }

    /// Size of the last rendering.
    pub fn rendered_size(&self) -> Option<usize> {
        self.rendered.as_ref().map(MaskGrid::size)
    }

    /// Render at `size`, replacing any cached rendering.
    pub fn render(&mut self, size: usize) -> Result<&MaskGrid, MaskError> {
        let grid = render_shape(self.shape.as_ref(), size)?;
        Ok(&*self.rendered.insert(grid))
    }

    /// Render at `size` unless already rendered at that size.
    pub fn ensure_rendered(&mut self, size: usize) -> Result<&MaskGrid, MaskError> {
        if self.rendered_size() != Some(size) {
            self.render(size)?;
        }
        self.rendered.as_ref().ok_or(MaskError::NotRendered)
    }

    /// Composite the cached rendering into `target`.
    pub fn apply_to(&self, target: &mut MaskGrid) -> Result<(), MaskError> {
        let rendered = self.rendered.as_ref().ok_or(MaskError::NotRendered)?;
        self.method.apply(target, rendered)
    }
}
