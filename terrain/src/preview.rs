use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use tracing::info;

use crate::grid::HeightGrid;

// Light direction for the hillshade, both 45°
const AZIMUTH: f64 = std::f64::consts::FRAC_PI_4;
const ALTITUDE: f64 = std::f64::consts::FRAC_PI_4;

// Rescale every cell into [0, 1]. A flat grid maps to 0.5 everywhere.
pub fn normalized(grid: &HeightGrid) -> Vec<f64> {
    let (min, max) = grid.min_max();
    let range = max - min;
    grid.as_slice()
        .iter()
        .map(|&v| if range <= f64::EPSILON { 0.5 } else { (v - min) / range })
        .collect()
}

// Lambertian hillshade from central differences. Border cells stay 0.5 so a
// tiny grid still renders.
// `z_scale` adjusts vertical exaggeration.
pub fn hillshade(grid: &HeightGrid, z_scale: f64) -> Vec<f64> {
    let (rows, cols) = grid.dims();
    let mut shade = vec![0.5; rows * cols];
    let (sin_alt, cos_alt) = ALTITUDE.sin_cos();
    let light = (
        AZIMUTH.cos() * cos_alt,
        AZIMUTH.sin() * cos_alt,
        sin_alt,
    );

    for r in 1..rows.saturating_sub(1) {
        for c in 1..cols.saturating_sub(1) {
            let dzdx = (grid[(r, c + 1)] - grid[(r, c - 1)]) / 2.0 * z_scale;
            let dzdy = (grid[(r + 1, c)] - grid[(r - 1, c)]) / 2.0 * z_scale;
            let (nx, ny, nz) = (-dzdx, -dzdy, 1.0);
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            let dot = (nx * light.0 + ny * light.1 + nz * light.2) / len;
            shade[r * cols + c] = dot.max(0.0);
        }
    }
    shade
}

/// Render a heightmap as a shaded colour image, one pixel per cell.
///
/// Low cells are dark blue, high cells white. Image x runs along columns and
/// y along rows.
pub fn render_heightmap(grid: &HeightGrid) -> RgbImage {
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.05, 0.10, 0.35)), // floor
        (0.35, LinSrgb::new(0.45, 0.40, 0.30)), // dirt
        (0.65, LinSrgb::new(0.55, 0.55, 0.50)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),    // rim
    ]);
    let heights = normalized(grid);
    let shade = hillshade(grid, grid.cols() as f64);

    let (rows, cols) = grid.dims();
    let mut img = RgbImage::new(cols as u32, rows as u32);
    for r in 0..rows {
        for c in 0..cols {
            let i = r * cols + c;
            let col: LinSrgb = gradient.get(heights[i] as f32);
            let rgb = col.into_format::<u8>();
            let light = (shade[i] * 0.5 + 0.5).clamp(0.0, 1.0) as f32;
            img.put_pixel(
                c as u32,
                r as u32,
                Rgb([
                    (rgb.red as f32 * light) as u8,
                    (rgb.green as f32 * light) as u8,
                    (rgb.blue as f32 * light) as u8,
                ]),
            );
        }
    }
    img
}

// Render and write a PNG (format picked from the extension)
pub fn save_preview(grid: &HeightGrid, path: &Path) -> ImageResult<()> {
    render_heightmap(grid).save(path)?;
    info!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "saved heightmap preview");
    Ok(())
}
