//! Compound masks built from an ordered list of sub-masks.

use wordgrid_core::MaskGrid;

use crate::error::MaskError;
use crate::method::MaskMethod;
use crate::shape::{render_shape, Mask, Shape};

/// A mask composed from sub-masks applied in order.
///
/// Unlike primitive shapes, a compound starts fully active so its first
/// [`Standard`](crate::MaskMethod::Standard) child defines the initial
/// area and later children add or cut.
#[derive(Debug, Default)]
pub struct Compound {
    masks: Vec<Mask>,
}

impl Compound {
    /// An empty compound (renders fully active).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sub-mask.
    pub fn with(mut self, mask: Mask) -> Self {
        self.masks.push(mask);
        self
    }

    /// Append a sub-mask in place.
    pub fn push(&mut self, mask: Mask) {
        self.masks.push(mask);
    }

    /// Sub-masks in application order.
    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }
}

/// Start fully active and composite each `(shape, method)` in order.
pub(crate) fn compose<'a>(
    size: usize,
    layers: impl IntoIterator<Item = (&'a dyn Shape, MaskMethod)>,
) -> Result<MaskGrid, MaskError> {
    let mut acc = MaskGrid::all_active(size);
    for (shape, method) in layers {
        let layer = render_shape(shape, size)?;
        method.apply(&mut acc, &layer)?;
    }
    Ok(acc)
}

impl Shape for Compound {
    fn name(&self) -> &str {
        "Compound"
    }

    fn min_size(&self) -> usize {
        self.masks
            .iter()
            .map(|m| m.shape().min_size())
            .max()
            .unwrap_or(1)
    }

    fn draw(&self, size: usize) -> Result<MaskGrid, MaskError> {
        compose(size, self.masks.iter().map(|m| (m.shape(), m.method())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::{Bitmap, Rectangle};
    use wordgrid_core::Position;

    #[test]
    fn empty_compound_is_fully_active() {
        let m = Compound::new().draw(4).unwrap();
        assert_eq!(m.active_count(), 16);
    }

    #[test]
    fn children_apply_in_order() {
        let c = Compound::new()
            .with(Mask::new(Rectangle::new(3, 3).unwrap()))
            .with(Mask::new(Bitmap::new(vec![(1, 1)])).with_method(MaskMethod::Subtractive))
            .with(Mask::new(Bitmap::new(vec![(4, 4)])).with_method(MaskMethod::Additive));
        let m = c.draw(5).unwrap();
        assert_eq!(m.active_count(), 9);
        assert!(!m.is_active(Position::new(1, 1)));
        assert!(m.is_active(Position::new(4, 4)));
    }

    #[test]
    fn min_size_is_largest_child() {
        let c = Compound::new()
            .with(Mask::new(crate::shapes::Star8::new()))
            .with(Mask::new(Bitmap::new(vec![])));
        assert_eq!(c.min_size(), 12);
        assert!(c.draw(11).is_err());
    }

    #[test]
    fn compound_compliance() {
        let c = Compound::new().with(Mask::new(Rectangle::new(2, 2).unwrap()));
        compliance::run_filled_shape_compliance(&c, &[2, 5, 9]);
    }
}
