use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cavegen_terrain::{Seed, SmoothingStrategy, TerrainConfig, generate_terrain};

fn config(smoothing: SmoothingStrategy) -> TerrainConfig {
    TerrainConfig {
        width: 256,
        seed: Seed::Fixed(42),
        smoothing,
        ..Default::default()
    }
}

fn bench_generate_full_pass(c: &mut Criterion) {
    let config = config(SmoothingStrategy::FullPass);
    c.bench_function("generate_full_pass_256", |b| {
        b.iter(|| generate_terrain(black_box(&config)))
    });
}

fn bench_generate_randomized(c: &mut Criterion) {
    let config = config(SmoothingStrategy::Randomized);
    c.bench_function("generate_randomized_256", |b| {
        b.iter(|| generate_terrain(black_box(&config)))
    });
}

criterion_group!(benches, bench_generate_full_pass, bench_generate_randomized);
criterion_main!(benches);
