// Generates and saves three crater previews:
// Rugged floor only
// Bowl only
// Even mix of both

use std::path::Path;

use terrain::{DVec2, crater, preview::save_preview};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .init();

    let size = DVec2::new(2.0, 2.0);
    for (name, ruggedness, curviness) in [
        ("crater_rugged.png", 1.0, 0.0),
        ("crater_bowl.png", 0.0, 1.0),
        ("crater_mixed.png", 0.5, 0.5),
    ] {
        let terrain = crater(size, ruggedness, curviness, 1.0).unwrap();
        let heightmap = terrain.heightmaps().next().unwrap();
        save_preview(&heightmap.heights, Path::new(name)).unwrap();
        println!("Saved {name} (max height {})", heightmap.size.z);
    }
}
