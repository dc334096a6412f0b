use super::Rgba;
use crate::consts::surface::{BOOST_MAX_GB, CHECKPOINT_SCALE, HIGH};

/// What a collision-raster colour means to a vehicle
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Surface {
    /// White: normal drivable lane
    Lane,
    /// Red below 1: wall, boundary or void. Lower red means further off-track
    OffTrack { red: f32 },
    /// Saturated red with low green/blue
    BoostPad,
    /// Saturated red and green, the blue channel encodes the checkpoint index
    Checkpoint(u8),
}

impl Surface {
    #[must_use]
    pub fn classify(color: Rgba) -> Self {
        if color.r < HIGH {
            Self::OffTrack { red: color.r }
        } else if color.g < BOOST_MAX_GB && color.b < BOOST_MAX_GB {
            Self::BoostPad
        } else if color.g >= HIGH && color.b < HIGH {
            Self::Checkpoint(Self::checkpoint_index(color.b))
        } else {
            Self::Lane
        }
    }

    /// `floor(blue * 10)`
    #[inline]
    #[must_use]
    pub fn checkpoint_index(blue: f32) -> u8 {
        (blue.clamp(0.0, 1.0) * CHECKPOINT_SCALE).floor() as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_drivable(self) -> bool {
        !matches!(self, Self::OffTrack { .. })
    }
}
