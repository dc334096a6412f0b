//! Packed elevation format of height rasters.
//!
//! A height fraction in `0.0..1.0` is stored as 32-bit fixed point spread over
//! the four channels of a texel, most significant first: alpha, blue, green, red.
//! Decoding is the weighted sum
//! `a*(255/256) + b*(255/256)/256 + g*(255/256)/256^2 + r*(255/256)/256^3`
//! over normalized channels, which is exactly `u32(a, b, g, r) / 2^32`.

use byteorder::{BigEndian, ByteOrder};

const FIXED_ONE: f64 = 4_294_967_296.0;

/// Largest `f32` below 1.0, `u32::MAX / 2^32` would otherwise round up to 1.0
const MAX_FRACTION: f32 = 1.0 - f32::EPSILON / 2.0;

/// Decodes raw `[r, g, b, a]` texel bytes into a height fraction in `0.0..1.0`
#[must_use]
pub fn decode_height_fraction(rgba: [u8; 4]) -> f32 {
    let [r, g, b, a] = rgba;
    let fixed = BigEndian::read_u32(&[a, b, g, r]);
    ((f64::from(fixed) / FIXED_ONE) as f32).min(MAX_FRACTION)
}

/// Encodes a height fraction into raw `[r, g, b, a]` texel bytes
///
/// Values are clamped to the representable range `0.0..=(2^32 - 1) / 2^32`.
#[must_use]
pub fn encode_height_fraction(fraction: f32) -> [u8; 4] {
    let fixed = (f64::from(fraction) * FIXED_ONE)
        .round()
        .clamp(0.0, f64::from(u32::MAX)) as u32;

    let mut packed = [0; 4];
    BigEndian::write_u32(&mut packed, fixed);
    let [a, b, g, r] = packed;
    [r, g, b, a]
}
