use tracing::debug;

use crate::error::{Result, ensure_non_negative};
use crate::grid::HeightGrid;

/// Max height reported when both weights are zero.
pub const FLAT_MAX_HEIGHT: f64 = 1.0;

/// Result of blending a rugged and a bowl grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Blend {
    pub heights: HeightGrid,
    /// Vertical scale for the heightmap. This is the sum of the weights, not
    /// the real maximum of `heights`.
    pub max_height: f64,
}

// Weighted average of the rugged and bowl grids:
// (ruggedness * rugged + curviness * bowl) / (ruggedness + curviness).
//
// Both weights zero gives an all-zero grid with max height 1.0 so the
// heightmap stays geometrically valid.
pub fn blend_heightmaps(
    rugged: &HeightGrid,
    bowl: &HeightGrid,
    ruggedness: f64,
    curviness: f64,
) -> Result<Blend> {
    ensure_non_negative("ruggedness", ruggedness)?;
    ensure_non_negative("curviness", curviness)?;

    rugged.ensure_same_dims(bowl)?;

    let total = ruggedness + curviness;
    let blend = if total == 0.0 {
        Blend {
            heights: HeightGrid::zeros(rugged.rows(), rugged.cols())?,
            max_height: FLAT_MAX_HEIGHT,
        }
    } else {
        Blend {
            heights: rugged.zip_map(bowl, |r, b| (ruggedness * r + curviness * b) / total)?,
            max_height: total,
        }
    };

    debug!(
        rows = rugged.rows(),
        cols = rugged.cols(),
        ruggedness,
        curviness,
        max_height = blend.max_height,
        "blended heightmaps"
    );
    Ok(blend)
}

#[cfg(test)]
mod tests {
    use super::blend_heightmaps;
    use crate::{HeightGrid, TerrainError};

    fn ramp(rows: usize, cols: usize) -> HeightGrid {
        HeightGrid::from_fn(rows, cols, |r, c| (r as f64 - c as f64) * 0.1).unwrap()
    }

    fn ones(rows: usize, cols: usize) -> HeightGrid {
        HeightGrid::from_fn(rows, cols, |_, _| 1.0).unwrap()
    }

    #[test]
    fn blend_zero_weights_is_flat() {
        let out = blend_heightmaps(&ramp(5, 7), &ones(5, 7), 0.0, 0.0).unwrap();
        assert_eq!(out.max_height, 1.0);
        assert_eq!(out.heights.dims(), (5, 7));
        assert!(out.heights.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn blend_rugged_only_is_identity() {
        let rugged = ramp(6, 4);
        let out = blend_heightmaps(&rugged, &ones(6, 4), 1.0, 0.0).unwrap();
        assert_eq!(out.heights, rugged);
        assert_eq!(out.max_height, 1.0);
    }

    #[test]
    fn blend_weighted_average() {
        let rugged = HeightGrid::from_rows(vec![vec![1.0, -1.0]]).unwrap();
        let bowl = HeightGrid::from_rows(vec![vec![0.0, 1.0]]).unwrap();
        let out = blend_heightmaps(&rugged, &bowl, 1.0, 3.0).unwrap();
        assert_eq!(out.heights.as_slice(), &[0.25, 0.5]);
        assert_eq!(out.max_height, 4.0);
    }

    #[test]
    fn blend_shape_mismatch() {
        for weights in [(0.5, 0.5), (0.0, 0.0)] {
            let err = blend_heightmaps(&ramp(4, 4), &ones(4, 5), weights.0, weights.1);
            assert_eq!(
                err,
                Err(TerrainError::DimensionMismatch {
                    expected: (4, 4),
                    found: (4, 5),
                })
            );
        }
    }

    #[test]
    fn blend_negative_weight_rejected() {
        let err = blend_heightmaps(&ramp(2, 2), &ones(2, 2), -1.0, 2.0);
        assert!(matches!(err, Err(TerrainError::InvalidArgument(_))));
    }
}
