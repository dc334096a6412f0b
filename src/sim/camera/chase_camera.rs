use glam::{Affine3A, Mat4, Vec3, Vec3A};

use crate::math::approach;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CameraMode {
    /// Behind and above the target, looking ahead of it
    #[default]
    Chase,
    /// Circling the target, e.g. after the finish line
    Orbit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaseCameraConfig {
    /// How far above the target the camera sits
    pub height_offset: f32,
    /// How far behind the target the camera sits at rest
    pub distance: f32,
    /// How far ahead of the target the camera looks
    pub look_ahead: f32,
    /// Extra distance behind the target at full speed
    pub speed_offset_max: f32,
    /// Fraction of the remaining speed offset covered per tick, scaled by `dt`
    pub speed_offset_lerp: f32,
    /// Upper bound of `speed_offset_lerp * dt`, prevents overshooting on long frames
    pub speed_offset_max_step: f32,
    pub orbit_radius: f32,
    /// Radians per unit of `dt`
    pub orbit_speed: f32,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ChaseCameraConfig {
    pub const DEFAULT: Self = Self {
        height_offset: 8.0,
        distance: 10.0,
        look_ahead: 10.0,
        speed_offset_max: 10.0,
        speed_offset_lerp: 0.3,
        speed_offset_max_step: 1.0,
        orbit_radius: 12.0,
        orbit_speed: 0.008,
    };
}

/// Where the camera is and what it looks at
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraPose {
    pub position: Vec3A,
    pub look_at: Vec3A,
}

impl CameraPose {
    /// World-to-camera matrix, right-handed with `+Y` up
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position.into(), self.look_at.into(), Vec3::Y)
    }

    /// Camera-to-world transform (the camera object's placement in the scene)
    #[must_use]
    pub fn transform(&self) -> Affine3A {
        Affine3A::look_at_rh(self.position.into(), self.look_at.into(), Vec3::Y).inverse()
    }
}

/// Follows a target transform, typically [`crate::Vehicle::visual_transform`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaseCamera {
    pub config: ChaseCameraConfig,
    mode: CameraMode,
    /// Extra distance behind the target due to speed
    speed_offset: f32,
    /// Accumulated `dt` while orbiting
    time: f32,
    pose: CameraPose,
}

impl ChaseCamera {
    #[must_use]
    pub fn new(config: ChaseCameraConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn mode(&self) -> CameraMode {
        self.mode
    }

    pub const fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
    }

    #[must_use]
    pub const fn speed_offset(&self) -> f32 {
        self.speed_offset
    }

    #[must_use]
    pub const fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Drops the speed offset and orbit progress, keeping the mode
    pub const fn reset(&mut self) {
        self.speed_offset = 0.0;
        self.time = 0.0;
    }

    /// Moves the camera for this tick.
    ///
    /// `ratio` is the target's normalized speed, e.g. [`crate::Vehicle::speed_ratio`].
    pub fn update(&mut self, dt: f32, ratio: f32, target: &Affine3A) -> CameraPose {
        let target_pos = target.translation;

        self.pose = match self.mode {
            CameraMode::Chase => {
                let dir = target.transform_vector3a(Vec3A::Z);
                let up = target.transform_vector3a(Vec3A::Y);

                let step = (self.config.speed_offset_lerp * dt).min(self.config.speed_offset_max_step);
                self.speed_offset =
                    approach(self.speed_offset, self.config.speed_offset_max * ratio, step);

                let mut position = target_pos - dir * (self.config.distance + self.speed_offset)
                    + up * self.config.height_offset;
                // Height stays level with the world even when the target banks
                position.y = target_pos.y - dir.y * (self.config.distance + self.speed_offset)
                    + self.config.height_offset;

                CameraPose {
                    position,
                    look_at: target_pos + dir * self.config.look_ahead,
                }
            }
            CameraMode::Orbit => {
                self.time += dt;

                let angle = self.time * self.config.orbit_speed;
                let offset = Vec3A::new(
                    angle.sin() * self.config.orbit_radius,
                    self.config.height_offset / 2.0,
                    angle.cos() * self.config.orbit_radius,
                );

                CameraPose {
                    position: target_pos + offset,
                    look_at: target_pos,
                }
            }
        };

        self.pose
    }
}
