//! Load types

mod continuous;
mod point_load;

pub use continuous::ContinuousLoad;
pub use point_load::{PointLoad, PointLoadId};
