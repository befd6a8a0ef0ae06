//! Pixel kinds and single-plane sample buffers.

use num_traits::Zero;
use strum_macros::{Display, EnumIter};

use crate::error::{Error, Result};

/// Sample kind of a plane.
///
/// Packed RGB stores one `u32` per pixel as `0x00RRGGBB`; the other kinds
/// hold one numeric sample per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PixelKind {
    /// 8-bit unsigned integer samples.
    #[default]
    UInt8,
    /// 16-bit unsigned integer samples.
    UInt16,
    /// 32-bit floating point samples.
    Float32,
    /// 32-bit packed RGB samples.
    Rgb24,
}

impl PixelKind {
    /// Map an external bit depth (8, 16, 24 or 32) to a pixel kind.
    pub fn from_bit_depth(bit_depth: u32) -> Result<PixelKind> {
        match bit_depth {
            8 => Ok(PixelKind::UInt8),
            16 => Ok(PixelKind::UInt16),
            24 => Ok(PixelKind::Rgb24),
            32 => Ok(PixelKind::Float32),
            _ => Err(Error::UnsupportedBitDepth(bit_depth)),
        }
    }

    /// Bit depth as reported at the interface boundary.
    pub fn bit_depth(self) -> u32 {
        match self {
            PixelKind::UInt8 => 8,
            PixelKind::UInt16 => 16,
            PixelKind::Rgb24 => 24,
            PixelKind::Float32 => 32,
        }
    }

    /// Bytes used to store one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelKind::UInt8 => 1,
            PixelKind::UInt16 => 2,
            PixelKind::Float32 | PixelKind::Rgb24 => 4,
        }
    }
}

/// Sample storage for one plane, tagged by pixel kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneData {
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    Float32(Vec<f32>),
    Rgb24(Vec<u32>),
}

impl PlaneData {
    fn zeroed(kind: PixelKind, len: usize) -> PlaneData {
        match kind {
            PixelKind::UInt8 => PlaneData::UInt8(zeroed(len)),
            PixelKind::UInt16 => PlaneData::UInt16(zeroed(len)),
            PixelKind::Float32 => PlaneData::Float32(zeroed(len)),
            PixelKind::Rgb24 => PlaneData::Rgb24(zeroed(len)),
        }
    }

    fn len(&self) -> usize {
        match self {
            PlaneData::UInt8(v) => v.len(),
            PlaneData::UInt16(v) => v.len(),
            PlaneData::Float32(v) => v.len(),
            PlaneData::Rgb24(v) => v.len(),
        }
    }
}

fn zeroed<T: Zero + Copy>(len: usize) -> Vec<T> {
    vec![T::zero(); len]
}

/// A single 2D plane of samples, tightly packed in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    data: PlaneData,
}

impl Plane {
    /// Create a plane filled with the kind's zero value.
    pub fn new(width: usize, height: usize, kind: PixelKind) -> Plane {
        assert!(width > 0, "Width must be positive");
        assert!(height > 0, "Height must be positive");

        Plane {
            width,
            height,
            data: PlaneData::zeroed(kind, width * height),
        }
    }

    /// Wrap existing samples. The sample count must equal `width * height`.
    pub fn from_data(width: usize, height: usize, data: PlaneData) -> Plane {
        assert!(width > 0, "Width must be positive");
        assert!(height > 0, "Height must be positive");
        assert_eq!(
            data.len(),
            width * height,
            "Sample count {} does not match {}x{}",
            data.len(),
            width,
            height
        );

        Plane {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn kind(&self) -> PixelKind {
        match &self.data {
            PlaneData::UInt8(_) => PixelKind::UInt8,
            PlaneData::UInt16(_) => PixelKind::UInt16,
            PlaneData::Float32(_) => PixelKind::Float32,
            PlaneData::Rgb24(_) => PixelKind::Rgb24,
        }
    }

    /// Total number of samples (width * height).
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the tagged sample storage.
    pub fn data(&self) -> &PlaneData {
        &self.data
    }

    /// Raw byte view of the samples in native layout.
    pub fn bytes(&self) -> &[u8] {
        match &self.data {
            PlaneData::UInt8(v) => v,
            PlaneData::UInt16(v) => bytemuck::cast_slice(v),
            PlaneData::Float32(v) => bytemuck::cast_slice(v),
            PlaneData::Rgb24(v) => bytemuck::cast_slice(v),
        }
    }

    /// Blit `src` onto this plane at (`dst_x`, `dst_y`), adding samples.
    ///
    /// u8/u16 saturate at their maxima, f32 adds, packed RGB adds per
    /// channel saturating at 255. Source regions outside the destination
    /// bounds are clipped and never written.
    pub fn blit_add(&mut self, src: &Plane, dst_x: usize, dst_y: usize) {
        assert_eq!(
            self.kind(),
            src.kind(),
            "Cannot blit {} onto {}",
            src.kind(),
            self.kind()
        );

        let (dst_width, dst_height) = (self.width, self.height);
        match (&mut self.data, &src.data) {
            (PlaneData::UInt8(dst), PlaneData::UInt8(s)) => blit_add_rows(
                dst,
                dst_width,
                dst_height,
                s,
                src.width,
                src.height,
                dst_x,
                dst_y,
                u8::saturating_add,
            ),
            (PlaneData::UInt16(dst), PlaneData::UInt16(s)) => blit_add_rows(
                dst,
                dst_width,
                dst_height,
                s,
                src.width,
                src.height,
                dst_x,
                dst_y,
                u16::saturating_add,
            ),
            (PlaneData::Float32(dst), PlaneData::Float32(s)) => blit_add_rows(
                dst,
                dst_width,
                dst_height,
                s,
                src.width,
                src.height,
                dst_x,
                dst_y,
                |lhs, rhs| lhs + rhs,
            ),
            (PlaneData::Rgb24(dst), PlaneData::Rgb24(s)) => blit_add_rows(
                dst,
                dst_width,
                dst_height,
                s,
                src.width,
                src.height,
                dst_x,
                dst_y,
                add_rgb24,
            ),
            _ => unreachable!("kind equality checked above"),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn blit_add_rows<T: Copy>(
    dst: &mut [T],
    dst_width: usize,
    dst_height: usize,
    src: &[T],
    src_width: usize,
    src_height: usize,
    dst_x: usize,
    dst_y: usize,
    add: fn(T, T) -> T,
) {
    if dst_x >= dst_width || dst_y >= dst_height {
        return;
    }

    let copy_width = src_width.min(dst_width - dst_x);
    let copy_height = src_height.min(dst_height - dst_y);

    for row in 0..copy_height {
        let src_row = &src[row * src_width..row * src_width + copy_width];
        let dst_offset = (dst_y + row) * dst_width + dst_x;
        let dst_row = &mut dst[dst_offset..dst_offset + copy_width];

        for (d, &s) in dst_row.iter_mut().zip(src_row) {
            *d = add(*d, s);
        }
    }
}

/// Per-channel saturating add of two packed RGB samples.
fn add_rgb24(lhs: u32, rhs: u32) -> u32 {
    let r = (((lhs >> 16) & 0xff) + ((rhs >> 16) & 0xff)).min(0xff);
    let g = (((lhs >> 8) & 0xff) + ((rhs >> 8) & 0xff)).min(0xff);
    let b = ((lhs & 0xff) + (rhs & 0xff)).min(0xff);
    (r << 16) | (g << 8) | b
}
