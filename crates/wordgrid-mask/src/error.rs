//! Error types for mask construction and rendering.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Errors from building or rendering a mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskError {
    /// A width, height or radius was zero.
    InvalidDimension {
        /// Which parameter.
        name: &'static str,
    },
    /// A polygon needs at least three vertices.
    TooFewVertices {
        /// Vertices supplied.
        got: usize,
    },
    /// Rendering was requested at size zero.
    ZeroSize,
    /// The puzzle is smaller than the shape's minimum.
    PuzzleTooSmall {
        /// Shape name.
        shape: String,
        /// Requested size.
        size: usize,
        /// Minimum size for the shape.
        min_size: usize,
    },
    /// A preset's derived geometry collapsed at this size.
    Degenerate {
        /// Shape name.
        shape: String,
        /// Requested size.
        size: usize,
    },
    /// An image held no pixel at or below the threshold.
    NoContrast {
        /// Threshold used.
        threshold: u8,
    },
    /// An image file could not be opened or decoded.
    ImageLoad {
        /// File that failed.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },
    /// A rendered mask does not match the target matrix size.
    SizeMismatch {
        /// Size the mask was rendered at.
        mask: usize,
        /// Size of the target matrix.
        target: usize,
    },
    /// The mask has not been rendered yet.
    NotRendered,
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name } => write!(f, "{name} must be positive"),
            Self::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {got}")
            }
            Self::ZeroSize => write!(f, "mask size must be positive"),
            Self::PuzzleTooSmall {
                shape,
                size,
                min_size,
            } => write!(
                f,
                "puzzle size {size} too small for {shape} mask (minimum {min_size})"
            ),
            Self::Degenerate { shape, size } => {
                write!(f, "{shape} mask has no area at size {size}")
            }
            Self::NoContrast { threshold } => {
                write!(f, "image lacks contrast (threshold {threshold})")
            }
            Self::ImageLoad { path, reason } => {
                write!(f, "failed to load image {}: {reason}", path.display())
            }
            Self::SizeMismatch { mask, target } => {
                write!(f, "mask rendered at {mask} cannot apply to size {target}")
            }
            Self::NotRendered => write!(f, "mask has not been rendered"),
        }
    }
}

impl Error for MaskError {}
