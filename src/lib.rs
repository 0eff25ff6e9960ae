pub mod config;
pub mod driver;
pub mod grid;
pub mod neighbors;
pub mod render;
pub mod step;
pub mod surface;
pub mod termination;
pub mod timer;
