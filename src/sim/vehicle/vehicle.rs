use std::sync::Arc;

use glam::{Affine3A, Quat, Vec3A};

use crate::{
    Collisions, Pose, Surface, TrackMap, VehicleConfig, VehicleControls, VehicleEvent, VehicleEvents,
    VehicleMode, VehicleState,
    consts::{
        DT_SPIKE_THRESHOLD, EPSILON, NOMINAL_TICK_TIME, collision as collision_consts, fall,
        probe,
    },
    math::{approach, approach_significant},
};

use super::Difficulty;

/// A hovering vehicle driven by discrete inputs over a pair of track rasters.
///
/// The height map keeps the vehicle floating above the track and drives the
/// cosmetic pitch/bank; the collision map supplies walls, boost pads and
/// checkpoints. Either map may be missing, which disables that part of the tick.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// Inputs applied on the next `update`
    pub controls: VehicleControls,
    config: VehicleConfig,
    height_map: Option<Arc<TrackMap>>,
    collision_map: Option<Arc<TrackMap>>,
    internal_state: VehicleState,
    events: VehicleEvents,
}

impl Vehicle {
    #[must_use]
    pub fn new(config: VehicleConfig) -> Self {
        Self {
            controls: VehicleControls::DEFAULT,
            config,
            height_map: None,
            collision_map: None,
            internal_state: VehicleState::new(&config, Pose::IDENTITY),
            events: VehicleEvents::new(),
        }
    }

    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(VehicleConfig::new(difficulty))
    }

    #[must_use]
    pub const fn config(&self) -> &VehicleConfig {
        &self.config
    }

    pub fn set_height_map(&mut self, map: Arc<TrackMap>) {
        self.height_map = Some(map);
    }

    pub fn set_collision_map(&mut self, map: Arc<TrackMap>) {
        self.collision_map = Some(map);
    }

    pub fn clear_height_map(&mut self) {
        self.height_map = None;
    }

    pub fn clear_collision_map(&mut self) {
        self.collision_map = None;
    }

    #[must_use]
    pub const fn height_map(&self) -> Option<&Arc<TrackMap>> {
        self.height_map.as_ref()
    }

    #[must_use]
    pub const fn collision_map(&self) -> Option<&Arc<TrackMap>> {
        self.collision_map.as_ref()
    }

    /// Puts the vehicle back at a spawn point with full shield and no motion
    pub fn reset(&mut self, pos: Vec3A, rot: Quat) {
        log::debug!("Vehicle reset at {pos}");

        self.controls = VehicleControls::DEFAULT;
        self.internal_state = VehicleState::new(&self.config, Pose::new(pos, rot.normalize()));
        self.events.clear();
    }

    #[must_use]
    pub const fn get_state(&self) -> &VehicleState {
        &self.internal_state
    }

    /// Overwrites the simulation state, clamping speed and shield into range
    pub fn set_state(&mut self, state: &VehicleState) {
        self.internal_state = *state;
        self.internal_state.speed = state.speed.clamp(0.0, self.config.max_speed);
        self.internal_state.shield = state.shield.clamp(0.0, self.config.max_shield);
    }

    /// Gates input handling, e.g. during a race countdown
    pub const fn set_input_enabled(&mut self, enabled: bool) {
        self.internal_state.input_enabled = enabled;
    }

    /// Side effects raised by the last `update`
    #[must_use]
    pub fn events(&self) -> &[VehicleEvent] {
        &self.events
    }

    #[must_use]
    pub const fn mode(&self) -> VehicleMode {
        self.internal_state.mode
    }

    #[must_use]
    pub const fn is_falling(&self) -> bool {
        self.internal_state.is_falling()
    }

    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.internal_state.is_destroyed()
    }

    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.internal_state.speed
    }

    /// Speed including boost
    #[must_use]
    pub const fn real_speed(&self) -> f32 {
        self.internal_state.speed + self.internal_state.boost
    }

    #[must_use]
    pub const fn speed_ratio(&self) -> f32 {
        self.internal_state.speed / self.config.max_speed
    }

    /// Speed including boost over max speed, may exceed 1
    #[must_use]
    pub const fn real_speed_ratio(&self) -> f32 {
        self.real_speed() / self.config.max_speed
    }

    #[must_use]
    pub const fn shield(&self) -> f32 {
        self.internal_state.shield
    }

    #[must_use]
    pub const fn shield_ratio(&self) -> f32 {
        self.internal_state.shield / self.config.max_shield
    }

    #[must_use]
    pub const fn boost(&self) -> f32 {
        self.internal_state.boost
    }

    #[must_use]
    pub const fn boost_ratio(&self) -> f32 {
        self.internal_state.boost / self.config.booster_speed
    }

    #[must_use]
    pub const fn checkpoint(&self) -> Option<u8> {
        self.internal_state.checkpoint
    }

    #[must_use]
    pub const fn collisions(&self) -> Collisions {
        self.internal_state.collisions
    }

    /// Whether thrust is currently being applied
    #[must_use]
    pub const fn is_accelerating(&self) -> bool {
        self.controls.forward
            && self.internal_state.input_enabled
            && matches!(self.internal_state.mode, VehicleMode::Active)
    }

    #[must_use]
    pub const fn physics_pose(&self) -> &Pose {
        &self.internal_state.pose
    }

    /// Transform of the rendered mesh
    #[must_use]
    pub const fn visual_transform(&self) -> &Affine3A {
        &self.internal_state.visual
    }

    /// Seconds spent falling so far
    #[must_use]
    pub fn fall_time(&self) -> f32 {
        self.internal_state.fall_ticks * NOMINAL_TICK_TIME
    }

    fn push_event(events: &mut VehicleEvents, event: VehicleEvent) {
        let pushed = events.try_push(event);
        debug_assert!(pushed.is_ok(), "Too many vehicle events in one tick");
    }

    fn destroy(state: &mut VehicleState, events: &mut VehicleEvents) {
        log::debug!("Vehicle destroyed at {}", state.pose.pos);

        state.mode = VehicleMode::Destroyed;
        Self::push_event(events, VehicleEvent::Destroyed);
    }

    /// Advances the simulation by `dt` nominal ticks (`1.0` == one frame at 60 FPS)
    pub fn update(&mut self, dt: f32) {
        self.events.clear();
        self.internal_state.collisions = Collisions::default();

        match self.internal_state.mode {
            VehicleMode::Destroyed => return,
            VehicleMode::Falling => {
                self.update_falling(dt);
                return;
            }
            VehicleMode::Active => {}
        }

        let config = self.config;
        let state = &mut self.internal_state;

        // Relax first, the yaw relaxes at half rate unless input is steering it
        state.drift = approach(state.drift, 0.0, config.drift_lerp);
        state.angular = approach(state.angular, 0.0, config.angular_lerp * 0.5);

        let mut movement = Vec3A::ZERO;
        let mut angular_amount = 0.0;
        let mut roll_amount = 0.0;

        if state.input_enabled {
            Self::apply_controls(
                &config,
                &self.controls,
                state,
                dt,
                &mut movement,
                &mut angular_amount,
                &mut roll_amount,
            );
        }

        state.angular = approach(state.angular, angular_amount, config.angular_lerp);

        state.speed = state.speed.clamp(0.0, config.max_speed);
        movement.z += state.speed * dt;

        Self::apply_repulsion(&config, state, dt, &mut movement);

        Self::booster_check(
            &config,
            self.collision_map.as_deref(),
            state,
            &mut self.events,
            dt,
            &mut movement,
        );

        state
            .pose
            .translate_local(Vec3A::new(movement.x, 0.0, movement.z));

        if let Some(height_map) = self.height_map.as_deref() {
            Self::height_check(&config, height_map, state, &mut movement);
        }
        // The physics pose is only yawed, so local up is world up
        state.pose.pos.y += movement.y;

        if let Some(collision_map) = self.collision_map.as_deref() {
            Self::collision_check(&config, collision_map, state, &mut self.events);
        }

        let yaw = Quat::from_rotation_y(state.angular);
        state.pose.rot = (yaw * state.pose.rot).normalize();

        if state.shield <= 0.0 {
            state.shield = 0.0;
            Self::destroy(state, &mut self.events);
        }

        Self::update_visual(&config, state, roll_amount);
    }

    fn update_falling(&mut self, dt: f32) {
        let state = &mut self.internal_state;

        state.visual.translation.y -= fall::SPEED * dt;
        state.fall_ticks += dt;

        if state.fall_ticks * NOMINAL_TICK_TIME >= fall::DURATION {
            Self::destroy(state, &mut self.events);
        }
    }

    fn apply_controls(
        config: &VehicleConfig,
        controls: &VehicleControls,
        state: &mut VehicleState,
        dt: f32,
        movement: &mut Vec3A,
        angular_amount: &mut f32,
        roll_amount: &mut f32,
    ) {
        if controls.left {
            *angular_amount += config.angular_speed * dt;
            *roll_amount -= config.roll_angle;
        }

        if controls.right {
            *angular_amount -= config.angular_speed * dt;
            *roll_amount += config.roll_angle;
        }

        if controls.forward {
            state.speed += config.thrust * dt;
        } else {
            state.speed -= config.air_resist * dt;
        }

        // The two air brakes mirror each other
        for (held, side, steering) in [
            (controls.left_trigger, 1.0, controls.left),
            (controls.right_trigger, -1.0, controls.right),
        ] {
            if !held {
                continue;
            }

            let air_angular = if steering {
                config.air_angular_speed
            } else {
                config.air_angular_speed * 0.5
            };
            *angular_amount += side * air_angular * dt;

            state.speed -= config.air_brake * dt;
            state.drift = approach(state.drift, side * config.air_drift, config.drift_lerp);

            let slide = state.speed * state.drift * dt;
            movement.x += slide;
            if state.drift * side > 0.0 {
                movement.z -= slide * side;
            }

            *roll_amount -= side * config.roll_angle * 0.7;
        }
    }

    fn apply_repulsion(
        config: &VehicleConfig,
        state: &mut VehicleState,
        dt: f32,
        movement: &mut Vec3A,
    ) {
        if state.repulsion.length_squared() < EPSILON * EPSILON {
            state.repulsion = Vec3A::ZERO;
            return;
        }

        // A head-on push replaces forward motion instead of adding to it
        if state.repulsion.z != 0.0 {
            movement.z = 0.0;
        }
        *movement += state.repulsion;

        let rate = if dt > DT_SPIKE_THRESHOLD {
            config.repulsion_lerp * 2.0
        } else {
            config.repulsion_lerp
        };
        state.repulsion -= state.repulsion * rate.min(1.0);
    }

    fn booster_check(
        config: &VehicleConfig,
        collision_map: Option<&TrackMap>,
        state: &mut VehicleState,
        events: &mut VehicleEvents,
        dt: f32,
        movement: &mut Vec3A,
    ) {
        let pos = state.pose.pos;
        let on_pad = collision_map
            .is_some_and(|map| matches!(map.classify(pos.x, pos.z), Surface::BoostPad));

        if on_pad {
            if state.boost <= 0.0 {
                log::trace!("Boost pad hit at {pos}");
                Self::push_event(events, VehicleEvent::BoostStart);
            }
            state.boost = config.booster_speed;
        } else if state.boost > 0.0 {
            state.boost -= config.booster_decay * dt;
            if state.boost <= 0.0 {
                state.boost = 0.0;
                Self::push_event(events, VehicleEvent::BoostEnd);
            }
        }

        movement.z += state.boost * dt;
    }

    /// Snaps up to / sinks down to the hover height and retargets gradient and tilt
    fn height_check(
        config: &VehicleConfig,
        height_map: &TrackMap,
        state: &mut VehicleState,
        movement: &mut Vec3A,
    ) {
        let pos = state.pose.pos;
        let height = height_map.lookup_height(pos.x, pos.z);

        let delta = height + config.height_offset - pos.y;
        if delta > 0.0 {
            movement.y += delta;
        } else {
            movement.y += delta * config.height_lerp;
        }

        let is_plausible = |sample: f32| (sample - height).abs() < probe::MAX_HEIGHT_DELTA;
        let sample_at = |offset: Vec3A| {
            let probe_pos = pos + offset * probe::DISTANCE;
            height_map.lookup_height(probe_pos.x, probe_pos.z)
        };

        let ahead = sample_at(state.pose.get_forward_dir());
        if is_plausible(ahead) {
            state.gradient_target = -(ahead - height).atan2(probe::DISTANCE);
        }

        let left_dir = state.pose.get_left_dir();
        let left = sample_at(left_dir);
        if is_plausible(left) {
            state.tilt_target = (left - height).atan2(probe::DISTANCE);
        } else {
            // Probably probed off the map, look at the other side instead
            let right = sample_at(-left_dir);
            if is_plausible(right) {
                state.tilt_target = -(right - height).atan2(probe::DISTANCE);
            }
        }
    }

    fn collision_check(
        config: &VehicleConfig,
        collision_map: &TrackMap,
        state: &mut VehicleState,
        events: &mut VehicleEvents,
    ) {
        let pos = state.pose.pos;

        match collision_map.classify(pos.x, pos.z) {
            Surface::OffTrack { red } => {
                Self::push_event(events, VehicleEvent::Crash);

                let real_speed_ratio = (state.speed + state.boost) / config.max_speed;
                state.shield -= real_speed_ratio
                    * real_speed_ratio
                    * collision_consts::DAMAGE_SCALE
                    * config.shield_damage;

                let lateral = state.pose.get_left_dir() * config.repulsion_v_scale;
                let (left_pos, right_pos) = (pos + lateral, pos - lateral);
                let left_red = collision_map.lookup_color_bilinear(left_pos.x, left_pos.z).r;
                let right_red = collision_map
                    .lookup_color_bilinear(right_pos.x, right_pos.z)
                    .r;

                let repulsion_amount = collision_consts::MIN_REPULSION
                    .max(config.repulsion_cap.min(state.speed * config.repulsion_ratio));

                if (right_red - left_red).abs() <= collision_consts::PROBE_RED_TOLERANCE {
                    state.repulsion.z -= repulsion_amount * collision_consts::FRONT_REPULSION_SCALE;
                    state.collisions.front = true;
                    state.speed = 0.0;
                } else if right_red > left_red {
                    // Left side is further off-track, push right
                    state.repulsion.x -= repulsion_amount;
                    state.collisions.left = true;
                } else {
                    state.repulsion.x += repulsion_amount;
                    state.collisions.right = true;
                }

                if left_red < collision_consts::VOID_PROBE_RED
                    && right_red < collision_consts::VOID_PROBE_RED
                    && red < collision_consts::VOID_CENTER_RED
                {
                    log::debug!("Vehicle fell off the track at {pos}");
                    state.mode = VehicleMode::Falling;
                    state.fall_ticks = 0.0;
                    Self::push_event(events, VehicleEvent::FallStart);
                }

                state.speed *= config.collision_speed_decrease;
                state.speed *= 1.0 - config.collision_speed_decrease_coef * (1.0 - red);

                if state.boost > 0.0 {
                    state.boost = 0.0;
                    Self::push_event(events, VehicleEvent::BoostEnd);
                }
            }
            Surface::Checkpoint(index) => {
                if state.checkpoint != Some(index) {
                    log::trace!("Checkpoint {index} reached");
                    Self::push_event(events, VehicleEvent::CheckpointReached(index));
                }
                state.checkpoint = Some(index);
            }
            Surface::Lane | Surface::BoostPad => {}
        }
    }

    /// Rebuilds the mesh transform from the physics pose plus cosmetic rotations
    fn update_visual(config: &VehicleConfig, state: &mut VehicleState, roll_target: f32) {
        state.gradient = approach_significant(
            state.gradient,
            state.gradient_target,
            config.gradient_lerp,
            EPSILON,
        );
        state.tilt = approach_significant(state.tilt, state.tilt_target, config.tilt_lerp, EPSILON);
        state.roll = approach_significant(state.roll, roll_target, config.roll_lerp, EPSILON);

        let mut local = Quat::IDENTITY;
        if state.gradient.abs() > EPSILON {
            local = Quat::from_rotation_x(state.gradient) * local;
        }
        if state.tilt.abs() > EPSILON {
            local = Quat::from_rotation_z(state.tilt) * local;
        }
        if state.roll.abs() > EPSILON {
            local = Quat::from_rotation_z(state.roll) * local;
        }

        state.visual = Affine3A::from_rotation_translation(
            state.pose.rot * local,
            state.pose.pos.into(),
        );
    }
}
