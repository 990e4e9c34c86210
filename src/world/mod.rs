//! Static world data: the obstacle field and its procedural generation.

pub mod field;
pub mod generator;

pub use field::{Collectible, ObstacleField};
pub use generator::{WorldGenConfig, generate};
