mod camera;
mod pose;
mod track_map;
mod vehicle;

pub use camera::*;
pub use pose::*;
pub use track_map::*;
pub use vehicle::*;
