mod height_codec;
mod rgba;
mod surface;
mod track_map;

pub use height_codec::*;
pub use rgba::*;
pub use surface::*;
pub use track_map::*;
