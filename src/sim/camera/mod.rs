mod chase_camera;

pub use chase_camera::*;
