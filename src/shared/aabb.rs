use glam::Vec3A;
use std::ops::{Add, AddAssign};

/// World-space axis-aligned box, used as the footprint of a track raster
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3A,
    pub max: Vec3A,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    /// Inverted box; adding any other box or point yields that box or point
    pub const EMPTY: Self = Self {
        min: Vec3A::splat(f32::MAX),
        max: Vec3A::splat(-f32::MAX),
    };

    #[inline]
    #[must_use]
    pub const fn new(min: Vec3A, max: Vec3A) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `EMPTY` if there are none
    #[must_use]
    pub fn from_points<I: IntoIterator<Item = Vec3A>>(points: I) -> Self {
        points.into_iter().fold(Self::EMPTY, |aabb, p| Self {
            min: aabb.min.min(p),
            max: aabb.max.max(p),
        })
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec3A {
        (self.min + self.max) * 0.5
    }

    /// Full size of the box (NOT the half-size)
    #[inline]
    #[must_use]
    pub fn extent(&self) -> Vec3A {
        self.max - self.min
    }

    /// True if the box has positive size on the horizontal (x/z) axes
    #[inline]
    #[must_use]
    pub fn has_area_xz(&self) -> bool {
        self.max.x > self.min.x && self.max.z > self.min.z
    }

    #[inline]
    #[must_use]
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.z && z <= self.max.z
    }
}

impl Add for Aabb {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            min: self.min.min(rhs.min),
            max: self.max.max(rhs.max),
        }
    }
}

impl AddAssign for Aabb {
    fn add_assign(&mut self, rhs: Self) {
        self.min = self.min.min(rhs.min);
        self.max = self.max.max(rhs.max);
    }
}
