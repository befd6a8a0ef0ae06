//! Multi-dimensional image stacks.

use strum_macros::Display;

use crate::plane::{PixelKind, Plane};

/// Per-axis extents and pixel kind of a stack.
///
/// Planes are ordered z-fastest: `index = z + slices * (c + channels * t)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackDimensions {
    /// Plane width in pixels.
    pub width: usize,
    /// Plane height in pixels.
    pub height: usize,
    /// Z extent.
    pub slices: usize,
    /// Channel extent.
    pub channels: usize,
    /// Time extent.
    pub frames: usize,
    /// Sample kind of every plane.
    pub kind: PixelKind,
}

impl StackDimensions {
    pub fn new(
        width: usize,
        height: usize,
        slices: usize,
        channels: usize,
        frames: usize,
        kind: PixelKind,
    ) -> Self {
        assert!(width > 0, "Width must be positive");
        assert!(height > 0, "Height must be positive");
        assert!(slices > 0, "Slices must be positive");
        assert!(channels > 0, "Channels must be positive");
        assert!(frames > 0, "Frames must be positive");
        assert!(
            kind != PixelKind::Rgb24 || channels == 1,
            "Packed RGB stacks carry a single channel"
        );

        Self {
            width,
            height,
            slices,
            channels,
            frames,
            kind,
        }
    }

    /// Dimensions of a single-plane stack.
    pub fn single_plane(width: usize, height: usize, kind: PixelKind) -> Self {
        Self::new(width, height, 1, 1, 1, kind)
    }

    /// Total number of planes (Z * C * T).
    pub fn plane_count(&self) -> usize {
        self.slices * self.channels * self.frames
    }

    /// Linear plane index for (z, c, t).
    pub fn plane_index(&self, z: usize, c: usize, t: usize) -> usize {
        debug_assert!(z < self.slices, "z coordinate out of bounds");
        debug_assert!(c < self.channels, "channel coordinate out of bounds");
        debug_assert!(t < self.frames, "frame coordinate out of bounds");

        z + self.slices * (c + self.channels * t)
    }

    /// True when any of Z, C, T exceeds one.
    pub fn is_hyper(&self) -> bool {
        self.slices > 1 || self.channels > 1 || self.frames > 1
    }

    /// First field differing from `other`, if any.
    pub(crate) fn first_mismatch(&self, other: &StackDimensions) -> Option<DimensionField> {
        if self.kind != other.kind {
            Some(DimensionField::Kind)
        } else if self.width != other.width {
            Some(DimensionField::Width)
        } else if self.height != other.height {
            Some(DimensionField::Height)
        } else if self.slices != other.slices {
            Some(DimensionField::Slices)
        } else if self.channels != other.channels {
            Some(DimensionField::Channels)
        } else if self.frames != other.frames {
            Some(DimensionField::Frames)
        } else {
            None
        }
    }
}

impl std::fmt::Display for StackDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} z{} c{} t{} {}",
            self.width, self.height, self.slices, self.channels, self.frames, self.kind
        )
    }
}

/// Field of [`StackDimensions`] reported in mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DimensionField {
    Kind,
    Width,
    Height,
    Slices,
    Channels,
    Frames,
}

/// An ordered sequence of planes logically indexed by (z, c, t).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStack {
    dimensions: StackDimensions,
    planes: Vec<Plane>,
}

impl ImageStack {
    /// Wrap planes. Their count and shapes must match `dimensions`.
    pub fn from_planes(dimensions: StackDimensions, planes: Vec<Plane>) -> ImageStack {
        assert_eq!(
            planes.len(),
            dimensions.plane_count(),
            "Plane count {} does not match extents of {}",
            planes.len(),
            dimensions
        );
        for plane in &planes {
            assert!(
                plane.width() == dimensions.width
                    && plane.height() == dimensions.height
                    && plane.kind() == dimensions.kind,
                "Plane {}x{} {} does not match stack dimensions {}",
                plane.width(),
                plane.height(),
                plane.kind(),
                dimensions
            );
        }

        ImageStack { dimensions, planes }
    }

    /// Stack holding a single plane.
    pub fn single(plane: Plane) -> ImageStack {
        let dimensions =
            StackDimensions::single_plane(plane.width(), plane.height(), plane.kind());
        ImageStack {
            dimensions,
            planes: vec![plane],
        }
    }

    pub fn dimensions(&self) -> StackDimensions {
        self.dimensions
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn into_planes(self) -> Vec<Plane> {
        self.planes
    }

    /// Plane at (z, c, t).
    pub fn plane(&self, z: usize, c: usize, t: usize) -> &Plane {
        &self.planes[self.dimensions.plane_index(z, c, t)]
    }

    /// Plane at a linear depth index.
    pub fn plane_linear(&self, index: usize) -> &Plane {
        &self.planes[index]
    }

    /// True when the stack is logically hyperstructured (Z, C or T > 1).
    pub fn is_hyperstack(&self) -> bool {
        self.dimensions.is_hyper()
    }

    /// Reinterpret the plane sequence with new extents.
    ///
    /// The product of the new extents must equal the current plane count;
    /// the sequence itself is untouched.
    pub fn reshape(self, slices: usize, channels: usize, frames: usize) -> ImageStack {
        let dimensions = StackDimensions::new(
            self.dimensions.width,
            self.dimensions.height,
            slices,
            channels,
            frames,
            self.dimensions.kind,
        );
        assert_eq!(
            dimensions.plane_count(),
            self.planes.len(),
            "Cannot reshape {} planes to {}",
            self.planes.len(),
            dimensions
        );

        ImageStack {
            dimensions,
            planes: self.planes,
        }
    }
}
