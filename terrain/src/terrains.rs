use glam::{DQuat, DVec2, DVec3};
use tracing::debug;

use crate::NoiseGenerator;
use crate::blend::blend_heightmaps;
use crate::bowl::bowl_heightmap;
use crate::error::{Result, TerrainError, ensure_non_negative, ensure_positive};
use crate::geometry::{Heightmap, Plane, Terrain};
use crate::noise_field::NoiseField;
use crate::rugged::RuggedHeightmap;

/// Default footprint of [`flat`].
pub const DEFAULT_FLAT_SIZE: DVec3 = DVec3::new(20.0, 20.0, 0.0);
/// Heightmap edges per metre of crater at granularity 1.0.
pub const CRATER_EDGES_PER_METRE: f64 = 100.0;
/// Noise density used for the crater floor.
pub const CRATER_RUGGED_DENSITY: f64 = 1.5;
/// Slab thickness under a crater with zero ruggedness.
pub const CRATER_BASE_THICKNESS: f64 = 0.1;

/// A single flat plane at the origin.
pub fn flat(size: DVec3) -> Result<Terrain> {
    if !size.is_finite() || size.min_element() < 0.0 {
        return Err(TerrainError::InvalidArgument(format!(
            "flat size must be finite and non-negative, got {size}"
        )));
    }
    debug!(x = size.x, y = size.y, "building flat terrain");
    Terrain::new(vec![
        Plane {
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
            size,
        }
        .into(),
    ])
}

/// Crater with a rugged floor:
///
/// ```text
/// |            |
///  \_        .'
///    '.,^_..'
/// ```
///
/// `ruggedness` controls how coarse the floor is and `curviness` how high the
/// rim rises. `granularity_multiplier` scales the number of heightmap edges
/// independently of the physical size. Noise comes from the seed-0
/// [`NoiseField`]; use [`crater_with_noise`] to pick another source.
pub fn crater(
    size: DVec2,
    ruggedness: f64,
    curviness: f64,
    granularity_multiplier: f64,
) -> Result<Terrain> {
    crater_with_noise(
        &NoiseField::default(),
        size,
        ruggedness,
        curviness,
        granularity_multiplier,
    )
}

pub fn crater_with_noise<N: NoiseGenerator + Sync + ?Sized>(
    noise: &N,
    size: DVec2,
    ruggedness: f64,
    curviness: f64,
    granularity_multiplier: f64,
) -> Result<Terrain> {
    ensure_positive("crater width", size.x)?;
    ensure_positive("crater length", size.y)?;
    ensure_positive("granularity multiplier", granularity_multiplier)?;
    ensure_non_negative("ruggedness", ruggedness)?;
    ensure_non_negative("curviness", curviness)?;

    let (rows, cols) = crater_resolution(size, granularity_multiplier)?;

    let rugged = RuggedHeightmap::new(noise, size)
        .with_density(CRATER_RUGGED_DENSITY)
        .generate(rows, cols)?;
    let bowl = bowl_heightmap(rows, cols)?;
    let blend = blend_heightmaps(&rugged, &bowl, ruggedness, curviness)?;

    debug!(
        rows,
        cols,
        ruggedness,
        curviness,
        max_height = blend.max_height,
        "building crater terrain"
    );
    Terrain::new(vec![
        Heightmap {
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
            size: DVec3::new(size.x, size.y, blend.max_height),
            base_thickness: CRATER_BASE_THICKNESS + ruggedness,
            heights: blend.heights,
        }
        .into(),
    ])
}

// Grid resolution for a crater footprint, rounded to the nearest edge count.
fn crater_resolution(size: DVec2, granularity_multiplier: f64) -> Result<(usize, usize)> {
    let edges = (size * CRATER_EDGES_PER_METRE * granularity_multiplier).round();
    if edges.x < 1.0 || edges.y < 1.0 {
        return Err(TerrainError::InvalidArgument(format!(
            "crater of size {size} at granularity {granularity_multiplier} has no heightmap edges"
        )));
    }
    // (rows, cols): the first grid axis follows size.x, the second size.y
    Ok((edges.x as usize, edges.y as usize))
}
