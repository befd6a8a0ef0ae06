//! Per-plane canvas compositing.

use crate::montage::GridSpec;
use crate::plane::Plane;
use crate::stack::ImageStack;

/// Composite one plane from every stack into a grid canvas.
///
/// The canvas starts at the kind's zero value. Cells without a matching
/// stack are never written; stacks beyond the grid capacity are ignored.
pub(crate) fn composite_plane(
    stacks: &[ImageStack],
    plane_index: usize,
    grid: GridSpec,
) -> Plane {
    let dims = stacks[0].dimensions();
    let mut canvas = Plane::new(
        dims.width * grid.columns,
        dims.height * grid.rows,
        dims.kind,
    );

    for row in 0..grid.rows {
        for column in 0..grid.columns {
            let image_index = column + grid.columns * row;
            if image_index >= stacks.len() {
                continue;
            }

            let x = dims.width * column;
            let y = dims.height * row;
            canvas.blit_add(stacks[image_index].plane_linear(plane_index), x, y);
        }
    }

    canvas
}
