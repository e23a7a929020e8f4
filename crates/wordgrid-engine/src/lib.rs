//! Puzzle orchestration for wordgrid word searches.
//!
//! [`Puzzle`] owns the word set, configuration, masks and the most recent
//! generation. Every mutator regenerates from scratch: sizes are derived
//! by [`calculate_size`] unless pinned, masks are composited onto a fresh
//! activation matrix, and the configured [`Generator`](wordgrid_gen::Generator)
//! places and fills.
//!
//! Configuration lives in [`PuzzleConfig`]; failures surface as
//! [`PuzzleError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod puzzle;
pub mod size;
pub mod validators;

pub use config::PuzzleConfig;
pub use error::PuzzleError;
pub use metrics::GenerationMetrics;
pub use puzzle::Puzzle;
pub use size::calculate_size;
pub use validators::{
    default_validators, NoPalindromes, NoPunctuation, NoSingleLetterWords, NoSubwords,
};
