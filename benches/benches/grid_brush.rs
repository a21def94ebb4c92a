// Copyright 2026 the Timebrush Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build and query throughput for the grid index, against a brute-force
//! baseline that re-tests every segment of every timeline per brush frame.

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use timebrush_geom::segment_hits_rect;
use timebrush_grid::{GridIndex, QueryMode, Timeline};

const WIDTH: f64 = 1200.0;
const HEIGHT: f64 = 600.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Random-walk timelines spanning the domain left to right, the shape brush
/// queries see in practice: one x step per sample, bounded y wander.
fn gen_timelines(count: usize, points_per_line: usize) -> Vec<Timeline<usize>> {
    let mut rng = Rng::new(0x7E1E_B0C5_0000_5EED);
    let step = WIDTH / points_per_line as f64;
    (0..count)
        .map(|key| {
            let mut y = rng.next_f64() * HEIGHT;
            let points: Vec<Point> = (0..points_per_line)
                .map(|i| {
                    y = (y + (rng.next_f64() - 0.5) * 30.0).clamp(0.0, HEIGHT);
                    Point::new(i as f64 * step, y)
                })
                .collect();
            Timeline { key, points }
        })
        .collect()
}

/// A drag gesture: the brush's lower-right corner sweeping down-right.
fn drag_frames(frames: usize) -> Vec<Rect> {
    (0..frames)
        .map(|i| {
            let t = i as f64 / frames as f64;
            Rect::new(300.0, 100.0, 400.0 + t * 500.0, 150.0 + t * 300.0)
        })
        .collect()
}

fn brute_force_intersect(lines: &[Timeline<usize>], rect: Rect) -> Vec<usize> {
    let rect = rect.abs();
    lines
        .iter()
        .filter(|line| {
            line.points
                .windows(2)
                .any(|pair| segment_hits_rect(pair[0], pair[1], rect))
        })
        .map(|line| line.key)
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");
    for &(count, points) in &[(100, 200), (1000, 200), (1000, 1000)] {
        let lines = gen_timelines(count, points);
        group.throughput(Throughput::Elements((count * points) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{count}x{points}")),
            &lines,
            |b, lines| {
                b.iter(|| GridIndex::build(black_box(lines), WIDTH, HEIGHT, 12, 6).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_intersect_drag(c: &mut Criterion) {
    let lines = gen_timelines(1000, 200);
    let frames = drag_frames(60);

    let mut group = c.benchmark_group("intersect_drag");
    group.throughput(Throughput::Elements(frames.len() as u64));
    for &(px, py) in &[(6, 3), (12, 6), (24, 12)] {
        let index = GridIndex::build(&lines, WIDTH, HEIGHT, px, py).unwrap();
        group.bench_with_input(
            BenchmarkId::new("grid", format!("{px}x{py}")),
            &index,
            |b, index| {
                b.iter(|| {
                    for &rect in &frames {
                        black_box(index.intersect_rect(black_box(rect)));
                    }
                });
            },
        );
    }
    group.bench_function("brute_force", |b| {
        b.iter(|| {
            for &rect in &frames {
                black_box(brute_force_intersect(black_box(&lines), rect));
            }
        });
    });
    group.finish();
}

fn bench_contains_drag(c: &mut Criterion) {
    let lines = gen_timelines(1000, 200);
    let frames = drag_frames(60);
    let index = GridIndex::build(&lines, WIDTH, HEIGHT, 12, 6).unwrap();

    let mut group = c.benchmark_group("contains_drag");
    group.throughput(Throughput::Elements(frames.len() as u64));
    group.bench_function("grid", |b| {
        b.iter(|| {
            for &rect in &frames {
                black_box(index.query(black_box(rect), QueryMode::Contains));
            }
        });
    });
    group.finish();
}

fn bench_change_detection(c: &mut Criterion) {
    let lines = gen_timelines(1000, 200);
    let index = GridIndex::build(&lines, WIDTH, HEIGHT, 12, 6).unwrap();
    let a = index.intersect_rect(Rect::new(300.0, 100.0, 700.0, 400.0));
    let b = index.intersect_rect(Rect::new(301.0, 101.0, 701.0, 401.0));

    c.bench_function("same_keys", |bench| {
        bench.iter(|| black_box(a.same_keys(black_box(&b))));
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_intersect_drag,
    bench_contains_drag,
    bench_change_detection
);
criterion_main!(benches);
