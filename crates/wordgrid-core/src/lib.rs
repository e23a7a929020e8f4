//! Core types and traits for the wordgrid puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace:
//! positions and directions, words and their placements, the letter
//! grid, the activation matrix, the solution key, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
pub mod key;
pub mod mask_grid;
pub mod traits;
pub mod word;

pub use alphabet::Alphabet;
pub use coord::{BoundingBox, Position};
pub use direction::{Direction, DirectionSet};
pub use error::{ConfigError, GenerateError, WordError, WordValidationError};
pub use grid::Grid;
pub use key::{Key, KeyEntry, KeyPlacement};
pub use mask_grid::MaskGrid;
pub use traits::Validator;
pub use word::{normalize, split_words, Placement, Word, WordColor};
