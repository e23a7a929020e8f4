//! Top-level error type for puzzle operations.

use std::error::Error;
use std::fmt;

use wordgrid_core::{ConfigError, GenerateError, WordError};
use wordgrid_mask::MaskError;

/// Any failure a [`Puzzle`](crate::Puzzle) operation can report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    /// Configuration rejected.
    Config(ConfigError),
    /// Generation failed.
    Generate(GenerateError),
    /// A mask could not be rendered or applied.
    Mask(MaskError),
    /// A word could not be constructed.
    Word(WordError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Generate(e) => write!(f, "generate: {e}"),
            Self::Mask(e) => write!(f, "mask: {e}"),
            Self::Word(e) => write!(f, "word: {e}"),
        }
    }
}

impl Error for PuzzleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Generate(e) => Some(e),
            Self::Mask(e) => Some(e),
            Self::Word(e) => Some(e),
        }
    }
}

impl From<ConfigError> for PuzzleError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GenerateError> for PuzzleError {
    fn from(e: GenerateError) -> Self {
        Self::Generate(e)
    }
}

impl From<MaskError> for PuzzleError {
    fn from(e: MaskError) -> Self {
        Self::Mask(e)
    }
}

impl From<WordError> for PuzzleError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}
