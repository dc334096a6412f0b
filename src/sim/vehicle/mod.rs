mod vehicle;
mod vehicle_config;
mod vehicle_controls;
mod vehicle_event;
mod vehicle_state;

pub use vehicle::*;
pub use vehicle_config::*;
pub use vehicle_controls::*;
pub use vehicle_event::*;
pub use vehicle_state::*;
