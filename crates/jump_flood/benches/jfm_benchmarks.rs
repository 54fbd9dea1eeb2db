//! Benchmarks for jump flood map computation and expansion.
//!
//! Covers surface sizes and search distances for both seed modes, plus the
//! serial backend as a baseline for the rayon row split.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jump_flood::{CpuBackend, ExpandPaint, InitMode, Renderer, Rgba, RgbaSurface, AA_MARGIN};
use rand::prelude::*;

// ============================================================================
// Source Generators
// ============================================================================

/// Centered opaque disc.
fn disc_source(size: u32) -> RgbaSurface {
    let mut source = RgbaSurface::new(size, size);
    let center = size as f32 / 2.0;
    let radius = size as f32 / 4.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if dx.hypot(dy) <= radius {
                source.set(x, y, Rgba::WHITE);
            }
        }
    }
    source
}

/// Sparse random dots, the worst case for long propagation chains.
fn scattered_source(size: u32, count: usize, seed: u64) -> RgbaSurface {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut source = RgbaSurface::new(size, size);
    for _ in 0..count {
        let x = rng.gen_range(0..size);
        let y = rng.gen_range(0..size);
        source.set(x, y, Rgba::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), 255));
    }
    source
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("jfm_compute");

    for size in [64u32, 256, 1024] {
        let source = disc_source(size);
        let mut jfmap = RgbaSurface::new(size, size);
        let mut renderer = Renderer::new(CpuBackend::new());
        group.throughput(Throughput::Elements((size * size) as u64));

        for max_distance in [8, 64] {
            group.bench_with_input(
                BenchmarkId::new(format!("boundary_d{max_distance}"), size),
                &source,
                |b, source| {
                    b.iter(|| {
                        renderer
                            .jfm_compute(
                                &mut jfmap,
                                black_box(source),
                                InitMode::Boundary,
                                max_distance,
                                0.0,
                                1.0,
                            )
                            .unwrap();
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("jfm_backend");
    let size = 512;
    let source = scattered_source(size, 64, 42);
    let mut jfmap = RgbaSurface::new(size, size);
    group.throughput(Throughput::Elements((size * size) as u64));

    for parallel in [false, true] {
        let mut renderer = Renderer::new(CpuBackend::with_options(parallel, 2));
        let name = if parallel { "parallel" } else { "serial" };
        group.bench_function(name, |b| {
            b.iter(|| {
                renderer
                    .jfm_compute(&mut jfmap, black_box(&source), InitMode::Fill, 128, 0.5, 1.0)
                    .unwrap();
            })
        });
    }

    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("jfm_expand");
    let size = 256;
    let source = scattered_source(size, 32, 7);
    let mut renderer = Renderer::new(CpuBackend::new());
    let mut target = RgbaSurface::new(size, size);
    group.throughput(Throughput::Elements((size * size) as u64));

    let mut jfmap = RgbaSurface::new(size, size);
    renderer
        .jfm_compute(&mut jfmap, &source, InitMode::Fill, 16, 0.5, 1.0)
        .unwrap();

    group.bench_function("precomputed_map", |b| {
        b.iter(|| {
            renderer
                .jfm_expand(
                    &mut target,
                    black_box(&source),
                    Some(&jfmap),
                    (0, 0),
                    12.0,
                    AA_MARGIN,
                    ExpandPaint::SeedColor,
                )
                .unwrap();
        })
    });

    group.bench_function("implicit_map", |b| {
        b.iter(|| {
            renderer
                .jfm_expand(
                    &mut target,
                    black_box(&source),
                    None,
                    (0, 0),
                    12.0,
                    AA_MARGIN,
                    ExpandPaint::default(),
                )
                .unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compute, bench_backends, bench_expand);
criterion_main!(benches);
