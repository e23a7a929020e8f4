//! Puzzle generation: word placement, duplicate detection and filler.
//!
//! The [`Generator`] trait is the seam between the puzzle orchestrator
//! and a generation strategy. [`WordSearchGenerator`] is the default
//! strategy, composed from:
//!
//! - [`WordPlacer`]: randomized backtracking placement, writing into the
//!   grid in place and undoing failed attempts through a [`ChangeLog`].
//! - [`DuplicateChecker`]: direct character-run comparison that finds
//!   accidental extra occurrences of a word or its reversal.
//! - [`FillEngine`]: bounded-retry random filler that avoids creating
//!   new occurrences of placed words where it can.
//!
//! Randomness is always injected as `&mut dyn RngCore`; nothing here
//! touches a global generator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dupes;
pub mod fill;
pub mod generator;
pub mod placer;
pub mod trail;

pub use dupes::DuplicateChecker;
pub use fill::{FillEngine, FillReport};
pub use generator::{
    GenerateOutcome, GenerateRequest, GenerationLimits, Generator, WordSearchGenerator,
};
pub use placer::{PlacementReport, WordPlacer};
pub use trail::ChangeLog;
