//! Shared checks every `Shape` implementation must pass.

use crate::error::MaskError;
use crate::shape::{render_shape, Shape};

/// Render `shape` at each size and check the basic contract:
/// matching dimensions, deterministic output, and min-size rejection.
pub(crate) fn run_shape_compliance(shape: &dyn Shape, sizes: &[usize]) {
    assert_eq!(render_shape(shape, 0), Err(MaskError::ZeroSize));
    if shape.min_size() > 1 {
        let below = shape.min_size() - 1;
        assert!(
            matches!(
                render_shape(shape, below),
                Err(MaskError::PuzzleTooSmall { .. })
            ),
            "{} should reject size {below}",
            shape.name()
        );
    }
    for &size in sizes {
        let a = render_shape(shape, size)
            .unwrap_or_else(|e| panic!("{} failed at {size}: {e}", shape.name()));
        let b = render_shape(shape, size).unwrap();
        assert_eq!(a.size(), size, "{} rendered wrong size", shape.name());
        assert_eq!(a, b, "{} is not deterministic at {size}", shape.name());
    }
}

/// Like [`run_shape_compliance`], additionally requiring a non-blank
/// rendering at every size.
pub(crate) fn run_filled_shape_compliance(shape: &dyn Shape, sizes: &[usize]) {
    run_shape_compliance(shape, sizes);
    for &size in sizes {
        let m = render_shape(shape, size).unwrap();
        assert!(!m.is_blank(), "{} is blank at {size}", shape.name());
    }
}
