use tracing::debug;

use crate::error::Result;
use crate::grid::HeightGrid;

// Bowl-shaped heightmap:
//
//     |         |
//      \       /
//       '.___.'
//
// Height is the squared distance from the grid center in normalized [-1, 1]
// coordinates: 0.0 at the center, 1.0 on the unit circle, and 0.0 outside it.
// No noise is involved, the output only depends on the resolution.
pub fn bowl_heightmap(rows: usize, cols: usize) -> Result<HeightGrid> {
    let grid = HeightGrid::from_fn(rows, cols, |r, c| {
        let u = c as f64 / cols as f64 * 2.0 - 1.0;
        let v = r as f64 / rows as f64 * 2.0 - 1.0;
        let d2 = u * u + v * v;
        if d2.sqrt() <= 1.0 { d2 } else { 0.0 }
    })?;
    debug!(rows, cols, "generated bowl heightmap");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::bowl_heightmap;

    #[test]
    fn bowl_center_is_zero() {
        for &(rows, cols) in &[(2, 2), (10, 10), (64, 32), (400, 400)] {
            let g = bowl_heightmap(rows, cols).unwrap();
            assert_eq!(g[(rows / 2, cols / 2)], 0.0);
        }
    }

    #[test]
    fn bowl_edge_is_one() {
        let g = bowl_heightmap(100, 100).unwrap();
        // u = -1, v = 0 and u = 0, v = -1
        assert_eq!(g[(50, 0)], 1.0);
        assert_eq!(g[(0, 50)], 1.0);
        // last column is one step inside the disk edge
        assert!((g[(50, 99)] - 0.98 * 0.98).abs() < 1e-12);
    }

    #[test]
    fn bowl_outside_disk_is_zero() {
        let (rows, cols) = (37, 53);
        let g = bowl_heightmap(rows, cols).unwrap();
        for r in 0..rows {
            for c in 0..cols {
                let u = c as f64 / cols as f64 * 2.0 - 1.0;
                let v = r as f64 / rows as f64 * 2.0 - 1.0;
                let v_at = g[(r, c)];
                if (u * u + v * v).sqrt() > 1.0 {
                    assert_eq!(v_at, 0.0);
                } else {
                    assert!((0.0..=1.0).contains(&v_at));
                }
            }
        }
        // corners are always outside
        assert_eq!(g[(0, 0)], 0.0);
    }

    #[test]
    fn bowl_rejects_empty_grid() {
        assert!(bowl_heightmap(0, 5).is_err());
    }
}
