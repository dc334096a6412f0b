use std::fmt::Display;

use glam::{Affine3A, Quat, Vec3A};

/// Position and orientation of an object.
///
/// Local axes follow the track raster convention: `+Z` is forward, `+Y` is up and
/// `+X` points to the vehicle's left.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub pos: Vec3A,
    pub rot: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        pos: Vec3A::ZERO,
        rot: Quat::IDENTITY,
    };

    #[must_use]
    pub const fn new(pos: Vec3A, rot: Quat) -> Self {
        Self { pos, rot }
    }

    #[must_use]
    pub fn get_forward_dir(&self) -> Vec3A {
        self.rot * Vec3A::Z
    }

    #[must_use]
    pub fn get_left_dir(&self) -> Vec3A {
        self.rot * Vec3A::X
    }

    #[must_use]
    pub fn get_up_dir(&self) -> Vec3A {
        self.rot * Vec3A::Y
    }

    /// Moves along the local axes
    pub fn translate_local(&mut self, offset: Vec3A) {
        self.pos += self.rot * offset;
    }

    #[must_use]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rot, self.pos.into())
    }

    /// Recovers position and (unscaled) orientation from a transform
    #[must_use]
    pub fn from_affine(transform: &Affine3A) -> Self {
        let (_, rot, pos) = transform.to_scale_rotation_translation();
        Self {
            pos: pos.into(),
            rot,
        }
    }
}

impl Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("Pose {")?;
        f.write_fmt(format_args!("\n\tpos: {}", self.pos))?;
        f.write_fmt(format_args!("\n\trot: {}", self.rot))?;
        f.write_str("}")
    }
}
