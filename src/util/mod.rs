//! Small helpers shared by the graph and production modules.
pub mod map;
pub mod math;

pub use map::{group_by, map_values};
pub use math::{factorial, product, range};
