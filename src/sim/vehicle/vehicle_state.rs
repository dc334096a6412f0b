use glam::{Affine3A, Vec3A};

use crate::{Pose, VehicleConfig};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleMode {
    /// Normal control
    #[default]
    Active,
    /// Drove into the void; input is ignored until the fall times out
    Falling,
    /// Terminal for the race attempt
    Destroyed,
}

/// Boundary contacts of the current tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collisions {
    /// The left side is further off-track, the vehicle was pushed right
    pub left: bool,
    /// The right side is further off-track, the vehicle was pushed left
    pub right: bool,
    /// Head-on impact, the vehicle was stopped and pushed back
    pub front: bool,
}

impl Collisions {
    #[must_use]
    pub const fn any(&self) -> bool {
        self.left || self.right || self.front
    }
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleState {
    pub mode: VehicleMode,
    /// Physics-only pose, only ever translated and yawed
    pub pose: Pose,
    /// `pose` plus the cosmetic gradient, tilt and roll, handed to the renderer
    pub visual: Affine3A,
    /// Goes from 0 to `max_speed`
    pub speed: f32,
    /// Sideways slide built up by the air brakes
    pub drift: f32,
    /// Yaw applied this tick
    pub angular: f32,
    pub roll: f32,
    /// Pitch following the track slope ahead
    pub gradient: f32,
    pub gradient_target: f32,
    /// Bank following the track slope to the side
    pub tilt: f32,
    pub tilt_target: f32,
    /// Local-space push away from walls, decays every tick
    pub repulsion: Vec3A,
    /// Extra forward speed from boost pads
    pub boost: f32,
    /// Goes from 0 to `max_shield`
    pub shield: f32,
    /// Nominal ticks spent falling
    pub fall_ticks: f32,
    /// Last checkpoint zone driven over
    pub checkpoint: Option<u8>,
    pub collisions: Collisions,
    /// Whether inputs are applied, the host disables this during countdowns
    pub input_enabled: bool,
}

impl VehicleState {
    #[must_use]
    pub fn new(config: &VehicleConfig, pose: Pose) -> Self {
        Self {
            mode: VehicleMode::Active,
            pose,
            visual: pose.to_affine(),
            speed: 0.0,
            drift: 0.0,
            angular: 0.0,
            roll: 0.0,
            gradient: 0.0,
            gradient_target: 0.0,
            tilt: 0.0,
            tilt_target: 0.0,
            repulsion: Vec3A::ZERO,
            boost: 0.0,
            shield: config.max_shield,
            fall_ticks: 0.0,
            checkpoint: None,
            collisions: Collisions::default(),
            input_enabled: true,
        }
    }

    #[must_use]
    pub const fn is_falling(&self) -> bool {
        matches!(self.mode, VehicleMode::Falling)
    }

    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        matches!(self.mode, VehicleMode::Destroyed)
    }
}
