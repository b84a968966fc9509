//! Benchmarks for CPU-side frame composition and tessellation.

use breath_visualizer::{compose, tessellate, FrameState, NoiseField, PerlinField};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("Frame Composition");

    let field = PerlinField::new(7);
    let mut state = FrameState::new(1920, 1080);
    for _ in 0..120 {
        state.advance();
    }

    group.bench_function("compose_1080p", |b| {
        b.iter(|| {
            black_box(compose(&state, &field));
        });
    });

    group.bench_function("compose_and_tessellate_1080p", |b| {
        b.iter(|| {
            black_box(tessellate(&compose(&state, &field)));
        });
    });

    group.finish();
}

fn bench_resolutions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resolution Scaling");

    let field = PerlinField::new(7);
    let resolutions = [
        (640u32, 360u32, "360p"),
        (1280, 720, "720p"),
        (1920, 1080, "1080p"),
    ];

    for (width, height, name) in resolutions {
        let state = FrameState::new(width, height);

        group.bench_with_input(BenchmarkId::new("compose", name), &state, |b, state| {
            b.iter(|| {
                black_box(compose(state, &field));
            });
        });
    }

    group.finish();
}

fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("Noise Field");

    let field = PerlinField::new(7);

    group.bench_function("perlin_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.003;
            black_box(field.sample(black_box(x), 0.0));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_resolutions, bench_noise);
criterion_main!(benches);
