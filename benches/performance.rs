// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use footprint::{DivisionScheme, Grid, Line, LoopAssembler, Polyline};
use nalgebra::Point3;

/// Boundary of a square with its lower-left corner at `(o, o)`, split into
/// `n` segments per side
fn square_segments(o: f64, size: f64, n: usize) -> Vec<Line> {
    let step = size / n as f64;
    let far = o + size;
    let mut segments = Vec::with_capacity(4 * n);
    for i in 0..n {
        let a = i as f64 * step;
        let b = (i + 1) as f64 * step;
        segments.push(Line::from_xy(o + a, o, o + b, o));
        segments.push(Line::from_xy(far, o + a, far, o + b));
        segments.push(Line::from_xy(far - a, far, far - b, far));
        segments.push(Line::from_xy(o, far - a, o, far - b));
    }
    segments
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    let bottom = Line::from_xy(0.0, 0.0, 27.0, 0.0);
    let top = Line::from_xy(0.0, 18.0, 27.0, 18.0);

    for count in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::new("counts", count), &count, |b, &count| {
            b.iter(|| Grid::with_counts(black_box(&bottom), black_box(&top), count, count).unwrap());
        });
    }

    group.bench_function("facade_spacing", |b| {
        b.iter(|| {
            Grid::new(
                black_box(&bottom),
                black_box(&top),
                &DivisionScheme::Spacing(1.35),
                &DivisionScheme::Distances(vec![5.0, 2.5, 5.0, 2.5, 3.0]),
            )
            .unwrap()
        });
    });

    let curved_bottom = Polyline::new(
        (0..=32)
            .map(|i| {
                let x = i as f64;
                Point3::new(x, (x / 4.0).sin(), 0.0)
            })
            .collect(),
    )
    .unwrap();
    let curved_top = Polyline::new(
        (0..=32)
            .map(|i| {
                let x = i as f64;
                Point3::new(x, 12.0 + (x / 4.0).sin(), 0.0)
            })
            .collect(),
    )
    .unwrap();
    group.bench_function("polyline_curves", |b| {
        b.iter(|| {
            Grid::with_counts(black_box(&curved_bottom), black_box(&curved_top), 64, 16).unwrap()
        });
    });

    group.finish();
}

fn bench_loops(c: &mut Criterion) {
    let mut group = c.benchmark_group("loops");
    let assembler = LoopAssembler::new();

    for n in [10, 100, 500] {
        let mut segments = square_segments(0.0, 100.0, n);
        segments.extend(square_segments(45.0, 10.0, n).into_iter().map(|l| l.reversed()));
        segments.reverse();
        group.bench_with_input(BenchmarkId::new("square_with_hole", n), &segments, |b, segments| {
            b.iter(|| assembler.assemble(black_box(segments.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid, bench_loops);
criterion_main!(benches);
