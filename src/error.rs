//! Error types for montage operations.

use thiserror::Error;

use crate::stack::{DimensionField, StackDimensions};

/// Errors surfaced by the montage core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No stacks provided for montage")]
    NoStacks,

    #[error(
        "Dimension mismatch for stack {index}: {field} differs from stack 0 \
         (expected {expected}, got {actual})"
    )]
    DimensionMismatch {
        index: usize,
        field: DimensionField,
        expected: StackDimensions,
        actual: StackDimensions,
    },

    #[error("Unsupported bit depth: {0}")]
    UnsupportedBitDepth(u32),
}

/// Result alias for montage operations.
pub type Result<T> = std::result::Result<T, Error>;
