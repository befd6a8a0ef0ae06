//! Testing utilities.

use crate::color::pack_rgb;
use crate::plane::{PixelKind, Plane, PlaneData};
use crate::stack::{ImageStack, StackDimensions};

/// Initialize a tracing subscriber for tests. Safe to call more than once.
/// Respects RUST_LOG, defaults to "debug".
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Stack whose planes hold a deterministic gradient, distinct per `seed`.
pub fn gradient_stack(dimensions: StackDimensions, seed: usize) -> ImageStack {
    let planes = (0..dimensions.plane_count())
        .map(|index| {
            gradient_plane(
                dimensions.width,
                dimensions.height,
                dimensions.kind,
                index,
                seed,
            )
        })
        .collect();
    ImageStack::from_planes(dimensions, planes)
}

/// Plane filled with a deterministic gradient, distinct per plane `index`
/// and `seed`.
pub fn gradient_plane(
    width: usize,
    height: usize,
    kind: PixelKind,
    index: usize,
    seed: usize,
) -> Plane {
    let data = match kind {
        PixelKind::UInt8 => PlaneData::UInt8(fill(width, height, index, seed, |v| (v % 251) as u8)),
        PixelKind::UInt16 => {
            PlaneData::UInt16(fill(width, height, index, seed, |v| (v % 60013) as u16))
        }
        PixelKind::Float32 => {
            PlaneData::Float32(fill(width, height, index, seed, |v| v as f32 * 0.5))
        }
        PixelKind::Rgb24 => PlaneData::Rgb24(fill(width, height, index, seed, |v| {
            pack_rgb((v % 251) as u8, (v % 241) as u8, (v % 239) as u8)
        })),
    };
    Plane::from_data(width, height, data)
}

/// Stack whose samples all hold `value`, truncated to the kind's range.
pub fn constant_stack(dimensions: StackDimensions, value: usize) -> ImageStack {
    let planes = (0..dimensions.plane_count())
        .map(|_| constant_plane(dimensions.width, dimensions.height, dimensions.kind, value))
        .collect();
    ImageStack::from_planes(dimensions, planes)
}

/// Plane whose samples all hold `value`, truncated to the kind's range.
pub fn constant_plane(width: usize, height: usize, kind: PixelKind, value: usize) -> Plane {
    let len = width * height;
    let data = match kind {
        PixelKind::UInt8 => PlaneData::UInt8(vec![value as u8; len]),
        PixelKind::UInt16 => PlaneData::UInt16(vec![value as u16; len]),
        PixelKind::Float32 => PlaneData::Float32(vec![value as f32; len]),
        PixelKind::Rgb24 => PlaneData::Rgb24(vec![value as u32 & 0x00ff_ffff; len]),
    };
    Plane::from_data(width, height, data)
}

/// Deterministic sample value for (x, y) of plane `index`, offset by `seed`.
fn sample_value(x: usize, y: usize, index: usize, seed: usize) -> usize {
    x + 3 * y + 7 * index + 13 * seed + 1
}

fn fill<T>(
    width: usize,
    height: usize,
    index: usize,
    seed: usize,
    f: impl Fn(usize) -> T,
) -> Vec<T> {
    let mut values = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            values.push(f(sample_value(x, y, index, seed)));
        }
    }
    values
}
