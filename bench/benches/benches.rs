use criterion::{Criterion, criterion_group, criterion_main};
use terrain::{
    DVec2, NoiseField, RuggedHeightmap, blend_heightmaps, bowl_heightmap, crater,
    preview::render_heightmap, slope_with_flat,
};

const EDGES: usize = 400;
const SIZE: f64 = 4.0;

fn bench_rugged(c: &mut Criterion) {
    let noise = NoiseField::default();
    c.bench_function("RuggedHeightmap 400x400, 10 octaves", |b| {
        b.iter(|| {
            RuggedHeightmap::new(&noise, DVec2::splat(SIZE))
                .with_density(1.5)
                .generate(EDGES, EDGES)
                .unwrap()
        })
    });
}

fn bench_bowl(c: &mut Criterion) {
    c.bench_function("bowl_heightmap 400x400", |b| {
        b.iter(|| bowl_heightmap(EDGES, EDGES).unwrap())
    });
}

fn bench_blend(c: &mut Criterion) {
    let noise = NoiseField::default();
    let rugged = RuggedHeightmap::new(&noise, DVec2::splat(SIZE))
        .generate(EDGES, EDGES)
        .unwrap();
    let bowl = bowl_heightmap(EDGES, EDGES).unwrap();
    c.bench_function("blend_heightmaps 400x400", |b| {
        b.iter(|| blend_heightmaps(&rugged, &bowl, 0.5, 0.5).unwrap())
    });
}

fn bench_crater(c: &mut Criterion) {
    c.bench_function("crater 4x4 m, granularity 1.0", |b| {
        b.iter(|| crater(DVec2::splat(SIZE), 0.5, 0.5, 1.0).unwrap())
    });
}

fn bench_crater_preview(c: &mut Criterion) {
    let terrain = crater(DVec2::splat(SIZE), 0.5, 0.5, 1.0).unwrap();
    let heights = &terrain.heightmaps().next().unwrap().heights;
    c.bench_function("render_heightmap 400x400", |b| {
        b.iter(|| render_heightmap(heights))
    });
}

fn bench_slope_with_flat(c: &mut Criterion) {
    c.bench_function("slope_with_flat", |b| {
        b.iter(|| slope_with_flat(DVec2::new(2.0, 10.0), DVec2::new(2.0, 5.0), 15.0).unwrap())
    });
}

criterion_group!(
    terrain_benchmarks,
    bench_rugged,
    bench_bowl,
    bench_blend,
    bench_crater,
    bench_crater_preview,
    bench_slope_with_flat
);
criterion_main!(terrain_benchmarks);
