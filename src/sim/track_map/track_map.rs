use super::{Rgba, Surface, decode_height_fraction};
use crate::shared::Aabb;
use glam::Vec3A;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackMapError {
    #[error("raster must be at least 1x1, got {width}x{height}")]
    EmptyRaster { width: usize, height: usize },
    #[error("raster buffer holds {actual} bytes, expected {expected} (width * height * 4)")]
    BufferSize { expected: usize, actual: usize },
    #[error("bounding box {min} -> {max} has no area on the x/z plane")]
    DegenerateBounds { min: Vec3A, max: Vec3A },
}

/// How a world position is resolved to texels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sampling {
    /// Blend of the four surrounding texels
    #[default]
    Bilinear,
    /// Single texel closest to the position
    Nearest,
}

/// Read-only sampler over a top-down RGBA capture of the track.
///
/// The same type backs both the height raster (packed elevation, see
/// [`decode_height_fraction`]) and the collision raster (flat classification
/// colours, see [`Surface`]). Consumers share it through an `Arc`.
///
/// World `x` maps to columns and world `z` to rows, with column 0 at `min.x`
/// and row 0 at `min.z`.
#[derive(Clone, Debug)]
pub struct TrackMap {
    width: usize,
    height: usize,
    pixels: Box<[u8]>,
    bounds: Aabb,
}

impl TrackMap {
    pub const BYTES_PER_TEXEL: usize = 4;

    /// Takes ownership of a tightly packed `[r, g, b, a]` raster, rows first.
    pub fn new(
        width: usize,
        height: usize,
        pixels: impl Into<Box<[u8]>>,
        bounds: Aabb,
    ) -> Result<Self, TrackMapError> {
        let pixels = pixels.into();

        let expected = width
            .checked_mul(height)
            .and_then(|texels| texels.checked_mul(Self::BYTES_PER_TEXEL));

        let result = if width == 0 || height == 0 {
            Err(TrackMapError::EmptyRaster { width, height })
        } else if expected != Some(pixels.len()) {
            Err(TrackMapError::BufferSize {
                // Dimensions too large to address report the largest possible size
                expected: expected.unwrap_or(usize::MAX),
                actual: pixels.len(),
            })
        } else if !bounds.has_area_xz() {
            Err(TrackMapError::DegenerateBounds {
                min: bounds.min,
                max: bounds.max,
            })
        } else {
            Ok(Self {
                width,
                height,
                pixels,
                bounds,
            })
        };

        if let Err(err) = &result {
            log::warn!("Rejected track map: {err}");
        }

        result
    }

    /// Copies a borrowed raster
    pub fn from_slice(
        width: usize,
        height: usize,
        pixels: &[u8],
        bounds: Aabb,
    ) -> Result<Self, TrackMapError> {
        Self::new(width, height, pixels.to_vec(), bounds)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    fn texel_bytes(&self, px: i64, py: i64) -> Option<[u8; 4]> {
        // Each axis is checked against its own dimension
        if px < 0 || py < 0 || px >= self.width as i64 || py >= self.height as i64 {
            return None;
        }

        let idx = (py as usize * self.width + px as usize) * Self::BYTES_PER_TEXEL;
        let mut texel = [0; 4];
        texel.copy_from_slice(&self.pixels[idx..idx + Self::BYTES_PER_TEXEL]);
        Some(texel)
    }

    /// Raw texel lookup.
    ///
    /// Returns [`Rgba::TRANSPARENT`] and `false` outside of the raster.
    #[must_use]
    pub fn sample_pixel(&self, px: i64, py: i64) -> (Rgba, bool) {
        match self.texel_bytes(px, py) {
            Some(texel) => (Rgba::from_bytes(texel), true),
            None => (Rgba::TRANSPARENT, false),
        }
    }

    /// Maps world `(x, z)` to fractional pixel coordinates
    #[must_use]
    pub fn world_to_pixel(&self, x: f32, z: f32) -> (f32, f32) {
        let min = self.bounds.min;
        let extent = self.bounds.extent();

        (
            self.width as f32 * (x - min.x) / extent.x,
            self.height as f32 * (z - min.z) / extent.z,
        )
    }

    /// Inverse of [`Self::world_to_pixel`]
    #[must_use]
    pub fn pixel_to_world(&self, px: f32, py: f32) -> (f32, f32) {
        let min = self.bounds.min;
        let extent = self.bounds.extent();

        (
            min.x + px * extent.x / self.width as f32,
            min.z + py * extent.z / self.height as f32,
        )
    }

    /// Pixel coordinates used by the lookups.
    ///
    /// Inside the bounds they are clamped to the last texel, so the far `+x`/`+z`
    /// strip reads the edge texels instead of the out-of-raster sentinel.
    fn sample_coords(&self, x: f32, z: f32) -> (f32, f32) {
        let (px, py) = self.world_to_pixel(x, z);

        if self.bounds.contains_xz(x, z) {
            (
                px.clamp(0.0, (self.width - 1) as f32),
                py.clamp(0.0, (self.height - 1) as f32),
            )
        } else {
            (px, py)
        }
    }

    /// Samples the four texels around `(px, py)` through `decode` and blends them
    fn bilinear<T>(
        &self,
        px: f32,
        py: f32,
        decode: impl Fn([u8; 4]) -> T,
        lerp: impl Fn(T, T, f32) -> T,
    ) -> T {
        let (x0, x1) = (px.floor(), px.ceil());
        let (y0, y1) = (py.floor(), py.ceil());
        let (tx, ty) = (px - x0, py - y0);

        let fetch = |x: f32, y: f32| decode(self.texel_bytes(x as i64, y as i64).unwrap_or([0; 4]));

        let top = lerp(fetch(x0, y0), fetch(x1, y0), tx);
        let bottom = lerp(fetch(x0, y1), fetch(x1, y1), tx);
        lerp(top, bottom, ty)
    }

    fn nearest_bytes(&self, px: f32, py: f32) -> [u8; 4] {
        self.texel_bytes((px + 0.5).floor() as i64, (py + 0.5).floor() as i64)
            .unwrap_or([0; 4])
    }

    fn fraction_to_height(&self, fraction: f32) -> f32 {
        // A fraction of 0 encodes the top of the bounding box
        self.bounds.max.y - fraction * (self.bounds.max.y - self.bounds.min.y)
    }

    /// World height (`y`) at `(x, z)`, bilinearly interpolated
    #[must_use]
    pub fn lookup_height(&self, x: f32, z: f32) -> f32 {
        self.lookup_height_with(x, z, Sampling::Bilinear)
    }

    /// World height (`y`) at `(x, z)` from the closest texel only
    #[must_use]
    pub fn lookup_height_nearest(&self, x: f32, z: f32) -> f32 {
        self.lookup_height_with(x, z, Sampling::Nearest)
    }

    #[must_use]
    pub fn lookup_height_with(&self, x: f32, z: f32, sampling: Sampling) -> f32 {
        let (px, py) = self.sample_coords(x, z);

        let fraction = match sampling {
            Sampling::Bilinear => {
                self.bilinear(px, py, decode_height_fraction, crate::math::lerp)
            }
            Sampling::Nearest => decode_height_fraction(self.nearest_bytes(px, py)),
        };

        self.fraction_to_height(fraction)
    }

    /// Classification colour at `(x, z)`, bilinearly interpolated
    #[must_use]
    pub fn lookup_color_bilinear(&self, x: f32, z: f32) -> Rgba {
        let (px, py) = self.sample_coords(x, z);
        self.bilinear(px, py, Rgba::from_bytes, Rgba::lerp)
    }

    /// Classification colour of the texel closest to `(x, z)`
    #[must_use]
    pub fn lookup_color_nearest(&self, x: f32, z: f32) -> Rgba {
        let (px, py) = self.sample_coords(x, z);
        Rgba::from_bytes(self.nearest_bytes(px, py))
    }

    #[must_use]
    pub fn lookup_color_with(&self, x: f32, z: f32, sampling: Sampling) -> Rgba {
        match sampling {
            Sampling::Bilinear => self.lookup_color_bilinear(x, z),
            Sampling::Nearest => self.lookup_color_nearest(x, z),
        }
    }

    /// Surface classification of the texel closest to `(x, z)`
    #[must_use]
    pub fn classify(&self, x: f32, z: f32) -> Surface {
        Surface::classify(self.lookup_color_nearest(x, z))
    }
}
