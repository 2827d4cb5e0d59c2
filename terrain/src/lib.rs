// terrain builds the static test terrains used by the locomotion simulations:
// flat ground, rugged crater bowls and ramps with landings.
pub mod blend;
pub mod bowl;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod noise_field;
pub mod params;
pub mod preview;
pub mod rugged;
pub mod slope;
pub mod terrains;

pub use blend::{Blend, blend_heightmaps};
pub use bowl::bowl_heightmap;
pub use error::{Result, TerrainError};
pub use geometry::{Geometry, Heightmap, Plane, Terrain};
pub use grid::HeightGrid;
pub use noise_field::NoiseField;
pub use params::TerrainParams;
pub use rugged::RuggedHeightmap;
pub use slope::{slope, slope_with_flat, tilt_rotation};
pub use terrains::{crater, crater_with_noise, flat};

// Re-exported so callers can build sizes without naming glam themselves.
pub use glam::{DQuat, DVec2, DVec3};

// Coherent 2D noise source.
// Implementations must be pure: the same (x, y, octaves) always returns the
// same value, and nearby coordinates return nearby values.
pub trait NoiseGenerator {
    fn sample(&self, x: f64, y: f64, octaves: u32) -> f64;
}
