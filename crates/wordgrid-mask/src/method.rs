//! Compositing methods.

use std::fmt;

use wordgrid_core::MaskGrid;

use crate::error::MaskError;

/// How a mask combines with the accumulated activation matrix.
///
/// Composition is ordered: each application reads the current
/// accumulated state, so mixing methods is not commutative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaskMethod {
    /// `acc AND mask`: shrink to the intersection.
    #[default]
    Standard,
    /// `acc OR mask`: re-activate the mask's cells.
    Additive,
    /// `acc AND NOT mask`: deactivate the mask's cells.
    Subtractive,
}

impl MaskMethod {
    /// Composite `overlay` into `target` in place.
    ///
    /// Returns `Err(MaskError::SizeMismatch)` if the matrices differ in size.
    pub fn apply(self, target: &mut MaskGrid, overlay: &MaskGrid) -> Result<(), MaskError> {
        if target.size() != overlay.size() {
            return Err(MaskError::SizeMismatch {
                mask: overlay.size(),
                target: target.size(),
            });
        }
        let src = overlay.cells();
        for (acc, &m) in target.cells_mut().iter_mut().zip(src) {
            *acc = match self {
                Self::Standard => *acc && m,
                Self::Additive => *acc || m,
                Self::Subtractive => *acc && !m,
            };
        }
        Ok(())
    }
}

impl fmt::Display for MaskMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::Additive => "additive",
            Self::Subtractive => "subtractive",
        })
    }
}
