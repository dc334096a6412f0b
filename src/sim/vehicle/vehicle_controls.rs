/// One of the discrete vehicle inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlKey {
    Forward,
    Backward,
    Left,
    Right,
    LeftTrigger,
    RightTrigger,
}

/// Held state of every input, set by the host's input handling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleControls {
    pub forward: bool,
    /// Tracked for the host; it has no effect on the simulation
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Left air brake
    pub left_trigger: bool,
    /// Right air brake
    pub right_trigger: bool,
}

impl VehicleControls {
    pub const DEFAULT: Self = Self {
        forward: false,
        backward: false,
        left: false,
        right: false,
        left_trigger: false,
        right_trigger: false,
    };

    /// Updates one input from a press (`true`) or release (`false`)
    pub const fn set(&mut self, key: ControlKey, pressed: bool) {
        match key {
            ControlKey::Forward => self.forward = pressed,
            ControlKey::Backward => self.backward = pressed,
            ControlKey::Left => self.left = pressed,
            ControlKey::Right => self.right = pressed,
            ControlKey::LeftTrigger => self.left_trigger = pressed,
            ControlKey::RightTrigger => self.right_trigger = pressed,
        }
    }

    #[must_use]
    pub const fn is_pressed(&self, key: ControlKey) -> bool {
        match key {
            ControlKey::Forward => self.forward,
            ControlKey::Backward => self.backward,
            ControlKey::Left => self.left,
            ControlKey::Right => self.right,
            ControlKey::LeftTrigger => self.left_trigger,
            ControlKey::RightTrigger => self.right_trigger,
        }
    }

    #[must_use]
    pub const fn any_trigger(&self) -> bool {
        self.left_trigger || self.right_trigger
    }
}
