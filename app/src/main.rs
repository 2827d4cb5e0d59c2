// terrain-preview: build a terrain from a JSON parameter document and write a
// shaded PNG for every heightmap it contains.
//
// usage: terrain-preview <params.json> [out_dir]

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use terrain::{Geometry, Terrain, TerrainParams, preview::save_preview};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn load_params(path: &Path) -> Result<TerrainParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let params = text
        .parse::<TerrainParams>()
        .with_context(|| format!("invalid terrain parameters in {}", path.display()))?;
    Ok(params)
}

// One log line per primitive, so the layout can be checked without a viewer
fn log_summary(terrain: &Terrain) {
    for (i, geometry) in terrain.iter().enumerate() {
        match geometry {
            Geometry::Plane(p) => info!(
                index = i,
                position = %p.position,
                orientation = %p.orientation,
                size = %p.size,
                "plane"
            ),
            Geometry::Heightmap(h) => {
                let (lo, hi) = h.heights.min_max();
                info!(
                    index = i,
                    rows = h.heights.rows(),
                    cols = h.heights.cols(),
                    size = %h.size,
                    base_thickness = h.base_thickness,
                    min = lo,
                    max = hi,
                    "heightmap"
                );
            }
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(params_path) = args.next().map(PathBuf::from) else {
        bail!("usage: terrain-preview <params.json> [out_dir]");
    };
    let out_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);

    let params = load_params(&params_path)?;
    let start = Instant::now();
    let terrain = params
        .build()
        .with_context(|| format!("failed to build {} terrain", params.shape_name()))?;
    info!(
        shape = params.shape_name(),
        primitives = terrain.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "terrain built"
    );
    log_summary(&terrain);

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    for (i, heightmap) in terrain.heightmaps().enumerate() {
        let path = out_dir.join(format!("{}_{i}.png", params.shape_name()));
        save_preview(&heightmap.heights, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
