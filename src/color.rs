//! Packed RGB / channel-plane conversion.
//!
//! A packed RGB stack and its three-channel `UInt8` expansion are two views
//! of the same samples. [`split_rgb24`] and [`merge_rgb24`] map between
//! them without loss: `merge_rgb24(split_rgb24(stack))` returns the input
//! pixel for pixel.

use crate::plane::{PixelKind, Plane, PlaneData};
use crate::stack::{ImageStack, StackDimensions};

/// Number of color channels in a packed RGB sample.
pub(crate) const RGB_CHANNELS: usize = 3;

#[inline]
pub(crate) fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

#[inline]
pub(crate) fn unpack_rgb(sample: u32) -> [u8; 3] {
    [(sample >> 16) as u8, (sample >> 8) as u8, sample as u8]
}

/// Expand a packed RGB stack into a three-channel `UInt8` stack.
///
/// The output plane at (z, c, t) holds channel `c` (0 = red, 1 = green,
/// 2 = blue) of the input plane at (z, t); the channel extent becomes 3.
/// Inverse of [`merge_rgb24`].
pub fn split_rgb24(stack: ImageStack) -> ImageStack {
    let dims = stack.dimensions();
    assert_eq!(
        dims.kind,
        PixelKind::Rgb24,
        "Expected a packed RGB stack, got {}",
        dims.kind
    );

    let mut planes = Vec::with_capacity(dims.plane_count() * RGB_CHANNELS);
    for t in 0..dims.frames {
        for channel in 0..RGB_CHANNELS {
            for z in 0..dims.slices {
                planes.push(channel_plane(stack.plane(z, 0, t), channel));
            }
        }
    }

    let out_dims = StackDimensions::new(
        dims.width,
        dims.height,
        dims.slices,
        RGB_CHANNELS,
        dims.frames,
        PixelKind::UInt8,
    );
    ImageStack::from_planes(out_dims, planes)
}

/// Pack a three-channel `UInt8` stack back into packed RGB, slice by slice.
///
/// Inverse of [`split_rgb24`].
pub fn merge_rgb24(stack: ImageStack) -> ImageStack {
    let dims = stack.dimensions();
    assert_eq!(
        dims.kind,
        PixelKind::UInt8,
        "Expected a uint8 channel stack, got {}",
        dims.kind
    );
    assert_eq!(
        dims.channels, RGB_CHANNELS,
        "Expected {} channels, got {}",
        RGB_CHANNELS, dims.channels
    );

    let mut planes = Vec::with_capacity(dims.slices * dims.frames);
    for t in 0..dims.frames {
        for z in 0..dims.slices {
            planes.push(packed_plane(
                stack.plane(z, 0, t),
                stack.plane(z, 1, t),
                stack.plane(z, 2, t),
            ));
        }
    }

    let out_dims = StackDimensions::new(
        dims.width,
        dims.height,
        dims.slices,
        1,
        dims.frames,
        PixelKind::Rgb24,
    );
    ImageStack::from_planes(out_dims, planes)
}

fn channel_plane(packed: &Plane, channel: usize) -> Plane {
    let PlaneData::Rgb24(samples) = packed.data() else {
        unreachable!("kind checked by the caller");
    };

    let values: Vec<u8> = samples.iter().map(|&s| unpack_rgb(s)[channel]).collect();
    Plane::from_data(packed.width(), packed.height(), PlaneData::UInt8(values))
}

fn packed_plane(red: &Plane, green: &Plane, blue: &Plane) -> Plane {
    let (PlaneData::UInt8(r), PlaneData::UInt8(g), PlaneData::UInt8(b)) =
        (red.data(), green.data(), blue.data())
    else {
        unreachable!("kind checked by the caller");
    };

    let samples: Vec<u32> = r
        .iter()
        .zip(g)
        .zip(b)
        .map(|((&r, &g), &b)| pack_rgb(r, g, b))
        .collect();
    Plane::from_data(red.width(), red.height(), PlaneData::Rgb24(samples))
}
