//! Fixed thresholds and timing shared by the simulation components.
//!
//! Tunables that differ per difficulty live in [`crate::VehicleConfig`],
//! camera tunables in [`crate::ChaseCameraConfig`].

/// Wall-clock duration of one nominal tick (`dt == 1.0`)
pub const NOMINAL_TICK_TIME: f32 = 1.0 / 60.0;

/// Smoothing/decay rates are doubled when `dt` exceeds this (frame hitches)
pub const DT_SPIKE_THRESHOLD: f32 = 1.5;

/// Threshold below which rotations and vectors are treated as zero
pub const EPSILON: f32 = 0.000_000_01;

pub mod fall {
    /// Time spent falling before the vehicle is destroyed, in seconds
    pub const DURATION: f32 = 2.0;
    /// Downward movement of the visual transform per nominal tick
    pub const SPEED: f32 = 20.0;
}

pub mod probe {
    /// Distance ahead/beside the vehicle used to sample gradient and tilt
    pub const DISTANCE: f32 = 5.0;
    /// Height difference past which a probe sample is assumed to be off the map
    pub const MAX_HEIGHT_DELTA: f32 = 100.0;
}

pub mod collision {
    /// Lower bound on the repulsion impulse applied per impact
    pub const MIN_REPULSION: f32 = 0.8;
    /// Multiplier applied to the backwards impulse of a head-on impact
    pub const FRONT_REPULSION_SCALE: f32 = 4.0;
    /// Scale applied to `real_speed_ratio^2 * shield_damage`
    pub const DAMAGE_SCALE: f32 = 0.8;
    /// Red values closer than this on both lateral probes count as equal
    pub const PROBE_RED_TOLERANCE: f32 = 0.000_1;
    /// Both lateral probes must read below this red value to consider a void
    pub const VOID_PROBE_RED: f32 = 0.5;
    /// The sample under the vehicle must read below this red value to start falling
    pub const VOID_CENTER_RED: f32 = 0.1;
}

pub mod surface {
    /// Channel values at or above this count as saturated (255)
    pub const HIGH: f32 = 254.5 / 255.0;
    /// Green/blue below this on a saturated red marks a boost pad
    pub const BOOST_MAX_GB: f32 = 0.5;
    /// Checkpoint index is `floor(blue * CHECKPOINT_SCALE)`
    pub const CHECKPOINT_SCALE: f32 = 10.0;
}
