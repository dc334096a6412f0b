#![allow(unused)]

use std::sync::Arc;

use hoversim::{Aabb, TrackMap, encode_height_fraction, glam::Vec3A};

pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const WALL: [u8; 4] = [128, 128, 128, 255];
pub const VOID: [u8; 4] = [0, 0, 0, 255];
pub const BOOST_PAD: [u8; 4] = [255, 0, 0, 255];

pub fn init_for_test() {
    let _ = hoversim::try_init_logging();
}

/// 100x100 footprint centered on the origin, 100 units tall
pub fn track_bounds() -> Aabb {
    Aabb::new(Vec3A::new(-50.0, 0.0, -50.0), Vec3A::new(50.0, 100.0, 50.0))
}

pub fn map_from_fn(
    width: usize,
    height: usize,
    bounds: Aabb,
    texel: impl Fn(usize, usize) -> [u8; 4],
) -> TrackMap {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for py in 0..height {
        for px in 0..width {
            pixels.extend_from_slice(&texel(px, py));
        }
    }

    TrackMap::new(width, height, pixels, bounds).unwrap()
}

pub fn uniform_map(texel: [u8; 4]) -> Arc<TrackMap> {
    Arc::new(map_from_fn(16, 16, track_bounds(), |_, _| texel))
}

/// Every texel encodes the same height fraction
pub fn flat_height_map(fraction: f32) -> Arc<TrackMap> {
    uniform_map(encode_height_fraction(fraction))
}

/// World height equals `z + 50`: one unit of height per unit of `z`
pub fn sloped_height_map() -> Arc<TrackMap> {
    Arc::new(map_from_fn(4, 100, track_bounds(), |_, py| {
        encode_height_fraction(1.0 - py as f32 / 100.0)
    }))
}
