//! Montarium - multi-dimensional image stack montage.
//!
//! Composes equally-shaped image stacks (X, Y, Z, channel, time) into a
//! single montage stack arranged on a row/column grid, plane by plane,
//! preserving the sources' hyperdimensional structure and packed-color
//! semantics.
//!
//! # Quick Start
//!
//! ```
//! use montarium::{montage, GridSpec, ImageStack, PixelKind, Plane};
//!
//! let stacks: Vec<ImageStack> = (0..4)
//!     .map(|_| ImageStack::single(Plane::new(64, 48, PixelKind::UInt16)))
//!     .collect();
//!
//! let grid = GridSpec::for_count(stacks.len());
//! let result = montage(&stacks, grid)?;
//!
//! assert_eq!(result.dimensions().width, 64 * grid.columns);
//! assert_eq!(result.dimensions().height, 48 * grid.rows);
//! # Ok::<(), montarium::Error>(())
//! ```

mod color;
mod error;
mod montage;
mod plane;
mod stack;

#[cfg(test)]
pub mod testing;

// ============================================================================
// Core image types
// ============================================================================

pub use plane::{PixelKind, Plane, PlaneData};
pub use stack::{DimensionField, ImageStack, StackDimensions};

// ============================================================================
// Montage
// ============================================================================

pub use montage::{montage, validate_dimensions, GridSpec};

// ============================================================================
// Color round trip
// ============================================================================

pub use color::{merge_rgb24, split_rgb24};

// ============================================================================
// Errors
// ============================================================================

pub use error::{Error, Result};
