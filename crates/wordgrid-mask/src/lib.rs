//! Mask shapes and ordered boolean compositing.
//!
//! A [`Shape`] renders a square activation matrix at a requested puzzle
//! size. A [`Mask`] pairs a shape with a [`MaskMethod`] and a static
//! flag, and composites its rendering into an accumulated
//! [`MaskGrid`](wordgrid_core::MaskGrid).
//!
//! Geometry is expressed in `(x, y)` points where `x` is the column and
//! `y` the row, both signed so shapes may extend past the grid edge;
//! off-grid cells are clipped when drawn.
//!
//! # Backends
//!
//! | Shape | Module | Static by default |
//! |-------|--------|-------------------|
//! | [`Bitmap`] | [`bitmap`] | yes |
//! | [`ImageMask`] | [`bitmap`] | no |
//! | [`Ellipse`] | [`ellipse`] | yes |
//! | [`Polygon`], [`Rectangle`] | [`polygon`] | yes |
//! | [`RegularPolygon`], [`Star`] | [`polygon`] | no |
//! | [`Compound`] | [`compound`] | yes |
//!
//! Preset shapes live in [`shapes`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bitmap;
pub mod compound;
pub mod ellipse;
pub mod error;
pub mod method;
pub mod polygon;
pub mod shape;
pub mod shapes;

#[cfg(test)]
pub(crate) mod compliance;

pub use bitmap::{Bitmap, ImageMask};
pub use compound::Compound;
pub use ellipse::Ellipse;
pub use error::MaskError;
pub use method::MaskMethod;
pub use polygon::{Polygon, Rectangle, RegularPolygon, Star};
pub use shape::{Mask, Point, Shape};
