use std::str::FromStr;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TerrainError};
use crate::geometry::Terrain;
use crate::noise_field::NoiseField;
use crate::slope::{DEFAULT_SLOPE_ANGLE_DEG, slope, slope_with_flat};
use crate::terrains::{DEFAULT_FLAT_SIZE, crater_with_noise, flat};

fn default_flat_size() -> DVec3 {
    DEFAULT_FLAT_SIZE
}

fn default_granularity() -> f64 {
    1.0
}

fn default_angle() -> f64 {
    DEFAULT_SLOPE_ANGLE_DEG
}

/// Parameters for one named terrain shape.
///
/// Deserializes from documents tagged with `shape`, e.g.
///
/// ```json
/// { "shape": "crater", "size": [4.0, 4.0], "ruggedness": 0.5, "curviness": 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case", deny_unknown_fields)]
pub enum TerrainParams {
    Flat {
        #[serde(default = "default_flat_size")]
        size: DVec3,
    },
    Crater {
        size: DVec2,
        ruggedness: f64,
        curviness: f64,
        #[serde(default = "default_granularity")]
        granularity_multiplier: f64,
        #[serde(default)]
        seed: u32,
    },
    Slope {
        size: DVec2,
        #[serde(default = "default_angle")]
        angle_deg: f64,
    },
    SlopeWithFlat {
        size_slope: DVec2,
        size_flat: DVec2,
        #[serde(default = "default_angle")]
        angle_deg: f64,
    },
}

impl Default for TerrainParams {
    fn default() -> Self {
        TerrainParams::Flat {
            size: DEFAULT_FLAT_SIZE,
        }
    }
}

impl TerrainParams {
    pub fn shape_name(&self) -> &'static str {
        match self {
            TerrainParams::Flat { .. } => "flat",
            TerrainParams::Crater { .. } => "crater",
            TerrainParams::Slope { .. } => "slope",
            TerrainParams::SlopeWithFlat { .. } => "slope_with_flat",
        }
    }

    pub fn build(&self) -> Result<Terrain> {
        debug!(shape = self.shape_name(), "building terrain from params");
        match *self {
            TerrainParams::Flat { size } => flat(size),
            TerrainParams::Crater {
                size,
                ruggedness,
                curviness,
                granularity_multiplier,
                seed,
            } => crater_with_noise(
                &NoiseField::new(seed),
                size,
                ruggedness,
                curviness,
                granularity_multiplier,
            ),
            TerrainParams::Slope { size, angle_deg } => slope(size, angle_deg),
            TerrainParams::SlopeWithFlat {
                size_slope,
                size_flat,
                angle_deg,
            } => slope_with_flat(size_slope, size_flat, angle_deg),
        }
    }
}

impl FromStr for TerrainParams {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
