use glam::DVec2;
use tracing::debug;

use crate::NoiseGenerator;
use crate::error::{Result, TerrainError, ensure_non_negative, ensure_positive};
use crate::grid::HeightGrid;

/// Octaves layered for every rugged sample.
pub const RUGGED_OCTAVES: u32 = 10;
/// Scale from normalized grid coordinates to noise space, per metre of terrain.
pub const RUGGED_SCALE: f64 = 4.0;

// Rugged terrain heightmap:
//
//     ..^.__,^._.-.
//
// Heights come straight from the noise field and are not normalized. They
// sit around [-1, 1] but callers must not rely on an exact range.
pub struct RuggedHeightmap<'a, N: NoiseGenerator + ?Sized> {
    noise: &'a N,
    size: DVec2, // physical (width, length)
    density: f64, // spatial frequency multiplier
    octaves: u32,
}

impl<'a, N: NoiseGenerator + Sync + ?Sized> RuggedHeightmap<'a, N> {
    pub fn new(noise: &'a N, size: DVec2) -> Self {
        Self {
            noise,
            size,
            density: 1.0,
            octaves: RUGGED_OCTAVES,
        }
    }

    // A density of 0 is accepted; every cell then samples the origin and the
    // map comes out flat.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn generate(&self, rows: usize, cols: usize) -> Result<HeightGrid> {
        ensure_positive("rugged width", self.size.x)?;
        ensure_positive("rugged length", self.size.y)?;
        ensure_non_negative("rugged density", self.density)?;
        if self.octaves == 0 {
            return Err(TerrainError::InvalidArgument(
                "rugged heightmap needs at least one octave".to_string(),
            ));
        }

        let sx = RUGGED_SCALE * self.size.x * self.density;
        let sy = RUGGED_SCALE * self.size.y * self.density;
        let grid = HeightGrid::from_fn(rows, cols, |r, c| {
            let x = c as f64 / cols as f64 * sx;
            let y = r as f64 / rows as f64 * sy;
            self.noise.sample(x, y, self.octaves)
        })?;

        debug!(
            rows,
            cols,
            width = self.size.x,
            length = self.size.y,
            density = self.density,
            "generated rugged heightmap"
        );
        Ok(grid)
    }
}
