//! Flight model of an anti-gravity racer: hovering vehicles steered over
//! rasterized track captures, plus a chase camera that follows them.

pub use glam;

pub mod consts;
mod logging;
pub mod math;
pub mod shared;
mod sim;

pub use logging::try_init_logging;
pub use shared::Aabb;
pub use sim::*;
