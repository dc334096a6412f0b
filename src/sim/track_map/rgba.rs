use crate::math::lerp;

/// A texel colour with channels normalized to `0.0..=1.0`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Returned for samples outside of the raster
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From raw `[r, g, b, a]` bytes
    #[inline]
    #[must_use]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            r: f32::from(bytes[0]) / 255.0,
            g: f32::from(bytes[1]) / 255.0,
            b: f32::from(bytes[2]) / 255.0,
            a: f32::from(bytes[3]) / 255.0,
        }
    }

    /// Rounds every channel back to the nearest byte
    #[must_use]
    pub fn to_bytes(self) -> [u8; 4] {
        let conv = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [conv(self.r), conv(self.g), conv(self.b), conv(self.a)]
    }

    /// Per-channel linear interpolation, exact at `t == 0` and for equal inputs
    #[inline]
    #[must_use]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        Self {
            r: lerp(self.r, rhs.r, t),
            g: lerp(self.g, rhs.g, t),
            b: lerp(self.b, rhs.b, t),
            a: lerp(self.a, rhs.a, t),
        }
    }
}
