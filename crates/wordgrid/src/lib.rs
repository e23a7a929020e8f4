//! Wordgrid: word-search puzzle generation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all wordgrid sub-crates. For most users, adding `wordgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wordgrid::prelude::*;
//! use wordgrid::mask::shapes::Circle;
//!
//! let config = PuzzleConfig::default()
//!     .with_words(["cat", "dog", "pig"])
//!     .with_size(12)
//!     .with_seed(42);
//! let mut puzzle = Puzzle::new(config).unwrap();
//! puzzle.apply_mask(Mask::new(Circle::new())).unwrap();
//!
//! for row in puzzle.cropped_grid().unwrap() {
//!     let line: String = row.iter().map(|c| c.unwrap_or(' ')).collect();
//!     assert!(!line.is_empty());
//! }
//! for (word, entry) in puzzle.key().iter() {
//!     assert!(!entry.secret, "{word}");
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wordgrid-core` | Coordinates, directions, grids, words, keys, errors |
//! | [`mask`] | `wordgrid-mask` | Shapes, presets and mask compositing |
//! | [`generation`] | `wordgrid-gen` | Word placement, duplicate checking and filler |
//! | [`engine`] | `wordgrid-engine` | Puzzle orchestration, sizing and validators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`wordgrid-core`).
///
/// Positions and bounding boxes, the eight [`types::Direction`]s and
/// their level presets, [`types::Grid`], [`types::Word`] and the
/// solution [`types::Key`].
pub use wordgrid_core as types;

/// Shapes and mask compositing (`wordgrid-mask`).
///
/// Build a [`mask::Mask`] from a preset in [`mask::shapes`] or from a
/// custom [`mask::Shape`], and pick how it combines with the masks
/// before it through [`mask::MaskMethod`].
pub use wordgrid_mask as mask;

/// Placement and filler (`wordgrid-gen`).
///
/// [`generation::WordPlacer`] places words with backtracking,
/// [`generation::FillEngine`] fills the rest, and [`generation::DuplicateChecker`]
/// keeps every word unique.
pub use wordgrid_gen as generation;

/// Puzzle orchestration (`wordgrid-engine`).
///
/// [`engine::Puzzle`] ties words, masks and generation together.
pub use wordgrid_engine as engine;

/// Common imports for typical wordgrid usage.
///
/// ```rust
/// use wordgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use wordgrid_core::{
        Alphabet, BoundingBox, Direction, DirectionSet, Grid, Key, MaskGrid, Position, Validator,
        Word,
    };

    // Errors
    pub use wordgrid_core::{ConfigError, GenerateError, WordError};
    pub use wordgrid_mask::MaskError;

    // Masks
    pub use wordgrid_mask::{Mask, MaskMethod, Shape};

    // Generation
    pub use wordgrid_gen::{Generator, WordSearchGenerator};

    // Engine
    pub use wordgrid_engine::{GenerationMetrics, Puzzle, PuzzleConfig, PuzzleError};
}
