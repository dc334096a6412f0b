/// Selects one of the tuning presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    #[default]
    Normal,
    Hard,
}

impl TryFrom<u8> for Difficulty {
    type Error = ();
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

// Indexed by `Difficulty as usize`
pub const AIR_RESIST: [f32; 2] = [0.02, 0.035];
pub const AIR_DRIFT: [f32; 2] = [0.06, 0.07];
pub const THRUST: [f32; 2] = [0.02, 0.035];
pub const AIR_BRAKE: [f32; 2] = [0.025, 0.04];
pub const MAX_SPEED: [f32; 2] = [7.0, 9.6];
pub const BOOSTER_SPEED_RATIO: [f32; 2] = [0.5, 0.35];
pub const ANGULAR_SPEED: [f32; 2] = [0.0125, 0.014];
pub const AIR_ANGULAR_SPEED: [f32; 2] = [0.0135, 0.0165];
pub const SHIELD_DAMAGE: [f32; 2] = [0.06, 0.03];
pub const ROLL_LERP: [f32; 2] = [0.07, 0.1];
pub const DRIFT_LERP: [f32; 2] = [0.3, 0.4];

/// Handling and damage tunables of a vehicle.
///
/// Rates named `*_lerp` are the fraction of the remaining distance to a target
/// covered each tick. Speeds are in world units per nominal tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleConfig {
    /// Speed lost per tick while not thrusting
    pub air_resist: f32,
    /// Drift magnitude reached while an air brake is held
    pub air_drift: f32,
    /// Speed gained per tick while thrusting
    pub thrust: f32,
    /// Extra speed lost per tick while an air brake is held
    pub air_brake: f32,
    pub max_speed: f32,
    /// Boost granted by a boost pad
    pub booster_speed: f32,
    /// Boost lost per tick once off the pad
    pub booster_decay: f32,
    /// Yaw added per tick when steering
    pub angular_speed: f32,
    /// Extra yaw added per tick when steering with the matching air brake
    pub air_angular_speed: f32,
    /// Repulsion impulse per unit of speed on a wall hit
    pub repulsion_ratio: f32,
    pub repulsion_cap: f32,
    /// Fraction of the repulsion impulse removed per tick
    pub repulsion_lerp: f32,
    /// Flat speed multiplier on a wall hit
    pub collision_speed_decrease: f32,
    /// Additional slowdown, scaled by how far off-track the wall colour is
    pub collision_speed_decrease_coef: f32,
    pub max_shield: f32,
    pub shield_damage: f32,
    pub drift_lerp: f32,
    pub angular_lerp: f32,
    /// Cosmetic roll reached while steering
    pub roll_angle: f32,
    pub roll_lerp: f32,
    /// Rate at which the vehicle sinks back down to its hover height
    pub height_lerp: f32,
    /// Hover height above the track
    pub height_offset: f32,
    pub gradient_lerp: f32,
    pub tilt_lerp: f32,
    /// Distance of the lateral wall probes
    pub repulsion_v_scale: f32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl VehicleConfig {
    pub const NORMAL: Self = Self::make_vehicle_config(Difficulty::Normal);
    pub const HARD: Self = Self::make_vehicle_config(Difficulty::Hard);

    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Normal => Self::NORMAL,
            Difficulty::Hard => Self::HARD,
        }
    }

    const fn make_vehicle_config(difficulty: Difficulty) -> Self {
        let index = difficulty as usize;

        Self {
            air_resist: AIR_RESIST[index],
            air_drift: AIR_DRIFT[index],
            thrust: THRUST[index],
            air_brake: AIR_BRAKE[index],
            max_speed: MAX_SPEED[index],
            booster_speed: MAX_SPEED[index] * BOOSTER_SPEED_RATIO[index],
            booster_decay: 0.007,
            angular_speed: ANGULAR_SPEED[index],
            air_angular_speed: AIR_ANGULAR_SPEED[index],
            repulsion_ratio: 0.5,
            repulsion_cap: 2.5,
            repulsion_lerp: 0.1,
            collision_speed_decrease: 0.8,
            collision_speed_decrease_coef: 0.5,
            max_shield: 1.0,
            shield_damage: SHIELD_DAMAGE[index],
            drift_lerp: DRIFT_LERP[index],
            angular_lerp: 0.4,
            roll_angle: 0.6,
            roll_lerp: ROLL_LERP[index],
            height_lerp: 0.4,
            height_offset: 4.0,
            gradient_lerp: 0.05,
            tilt_lerp: 0.05,
            repulsion_v_scale: 4.0,
        }
    }
}
