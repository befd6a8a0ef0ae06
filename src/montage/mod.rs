//! Stack montage assembly.

mod compositor;

use rayon::prelude::*;

use crate::color::{merge_rgb24, split_rgb24};
use crate::error::{Error, Result};
use crate::plane::{PixelKind, Plane};
use crate::stack::{ImageStack, StackDimensions};

/// Montage grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    pub rows: usize,
    pub columns: usize,
}

impl GridSpec {
    /// Grid with explicit geometry. Both extents must be at least one.
    pub fn new(rows: usize, columns: usize) -> GridSpec {
        assert!(rows >= 1, "Rows must be positive");
        assert!(columns >= 1, "Columns must be positive");

        GridSpec { rows, columns }
    }

    /// Most-square grid with at least `count` cells.
    ///
    /// Extra capacity goes into columns: `for_count(5)` is 2x3 and
    /// `for_count(10)` is 3x4.
    pub fn for_count(count: usize) -> GridSpec {
        assert!(count >= 1, "Image count must be positive");

        let rows = (count as f64).sqrt() as usize;
        let mut columns = rows;
        let remainder = count - rows * columns;
        if remainder > 0 {
            columns += remainder.div_ceil(rows);
        }

        GridSpec { rows, columns }
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Cell (row, column) of the image at `index`.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}

impl std::fmt::Display for GridSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Check that every stack shares the dimensions of the first one.
///
/// Returns the common dimensions, or the first mismatch found. Comparison
/// is against stack 0 and stops at the first differing field.
pub fn validate_dimensions(stacks: &[ImageStack]) -> Result<StackDimensions> {
    let first = stacks.first().ok_or(Error::NoStacks)?;
    let expected = first.dimensions();

    for (index, stack) in stacks.iter().enumerate().skip(1) {
        let actual = stack.dimensions();
        if let Some(field) = expected.first_mismatch(&actual) {
            return Err(Error::DimensionMismatch {
                index,
                field,
                expected,
                actual,
            });
        }
    }

    Ok(expected)
}

/// Compose equally-shaped stacks into one montage stack laid out on `grid`.
///
/// Every plane of the output is a canvas of `grid.rows` by `grid.columns`
/// cells; the stack at index `i` occupies cell
/// `(i / grid.columns, i % grid.columns)` in every plane. Cells without a
/// stack stay at the kind's zero value, and stacks beyond the grid
/// capacity are ignored. The output keeps the sources' (Z, C, T)
/// structure; packed RGB sources are routed through a three-channel
/// representation and packed back slice by slice.
pub fn montage(stacks: &[ImageStack], grid: GridSpec) -> Result<ImageStack> {
    let dims = validate_dimensions(stacks)?;
    let depth_count = dims.plane_count();

    tracing::debug!(
        stack_count = stacks.len(),
        plane_count = depth_count,
        grid = %grid,
        "Compositing montage"
    );

    // Planes are independent; compose them in parallel, collected in
    // depth-index order.
    let planes: Vec<Plane> = (0..depth_count)
        .into_par_iter()
        .map(|index| compositor::composite_plane(stacks, index, grid))
        .collect();

    let flat_dims = StackDimensions::new(
        dims.width * grid.columns,
        dims.height * grid.rows,
        depth_count,
        1,
        1,
        dims.kind,
    );
    let mut result = ImageStack::from_planes(flat_dims, planes);

    if dims.is_hyper() {
        result = result.reshape(dims.slices, dims.channels, dims.frames);
    }

    // Packed color is restructured through its three-channel view and
    // packed back slice by slice; the round trip preserves sample order.
    if dims.kind == PixelKind::Rgb24 {
        result = merge_rgb24(split_rgb24(result));
    }

    tracing::debug!(dimensions = %result.dimensions(), "Montage assembled");

    Ok(result)
}
