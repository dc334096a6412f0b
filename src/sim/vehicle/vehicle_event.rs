use arrayvec::ArrayVec;

/// Side effect raised by the simulation for audio, effects or UI to react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleEvent {
    /// Entered a boost pad while not boosting
    BoostStart,
    /// Boost ran out or was cancelled by a crash
    BoostEnd,
    /// Touched an off-track surface this tick
    Crash,
    /// Entered a checkpoint zone different from the last recorded one
    CheckpointReached(u8),
    /// Drove into the void, the vehicle is now falling
    FallStart,
    /// Shield depleted or the fall timed out
    Destroyed,
}

/// No tick can raise more events than this
pub const MAX_EVENTS_PER_TICK: usize = 8;

pub type VehicleEvents = ArrayVec<VehicleEvent, MAX_EVENTS_PER_TICK>;
