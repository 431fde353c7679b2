// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_quadtree::{Boundary, Point, QuadTree, QuadTreeOptions};

const WORLD: f64 = 2000.0;
const CAPACITIES: [usize; 3] = [4, 8, 32];

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

fn world() -> Boundary<f64> {
    Boundary::from_xywh(0.0, 0.0, WORLD, WORLD).unwrap()
}

fn gen_uniform_points(n: usize) -> Vec<Point<f64>> {
    let mut rng = Rng::new(0x81FD_BEE7_94F0_AF1A);
    (0..n)
        .map(|_| Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * WORLD, rng.next_f64() * WORLD));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            let x = (cx + dx).clamp(0.0, WORLD - 1.0);
            let y = (cy + dy).clamp(0.0, WORLD - 1.0);
            out.push(Point::new(x, y));
        }
    }
    out
}

/// Square query windows of side `size`, fully inside the world.
fn gen_query_windows(count: usize, size: f64) -> Vec<Boundary<f64>> {
    let mut rng = Rng::new(0x3C6E_F35F_4750_2932);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * (WORLD - size);
            let y = rng.next_f64() * (WORLD - size);
            Boundary::from_xywh(x, y, size, size).unwrap()
        })
        .collect()
}

fn build(points: &[Point<f64>], capacity: usize) -> QuadTree<f64> {
    let mut tree = QuadTree::with_options(world(), QuadTreeOptions::new(capacity)).unwrap();
    tree.extend(points.iter().copied());
    tree
}

fn bench_insert(
    c: &mut Criterion,
    benchmark_group_name: &str,
    make_points: impl Fn(usize) -> Vec<Point<f64>>,
) {
    let mut group = c.benchmark_group(benchmark_group_name);
    for &n in &[1_000usize, 10_000] {
        let points = make_points(n);
        group.throughput(Throughput::Elements(points.len() as u64));
        for capacity in CAPACITIES {
            group.bench_function(BenchmarkId::new(format!("cap{capacity}"), n), |b| {
                b.iter_batched(
                    || QuadTree::new(world(), capacity).unwrap(),
                    |mut tree| {
                        tree.extend(points.iter().copied());
                        tree
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_insert_uniform(c: &mut Criterion) {
    bench_insert(c, "quadtree_insert_uniform", gen_uniform_points);
}

fn bench_insert_clustered(c: &mut Criterion) {
    bench_insert(c, "quadtree_insert_clustered", |n| {
        gen_clustered_points(n / 100, 100, 40.0)
    });
}

fn bench_visit_rect(c: &mut Criterion) {
    let points = gen_uniform_points(10_000);
    let windows = gen_query_windows(64, 100.0);
    let mut group = c.benchmark_group("quadtree_visit_rect_uniform");
    group.throughput(Throughput::Elements(windows.len() as u64));
    for capacity in CAPACITIES {
        let tree = build(&points, capacity);
        group.bench_function(BenchmarkId::new("cap", capacity), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for w in &windows {
                    tree.visit_rect(
                        w,
                        #[inline(always)]
                        |_| total += 1,
                    );
                }
                total
            });
        });
    }
    group.bench_function("brute_force", |b| {
        b.iter(|| {
            windows
                .iter()
                .map(|w| points.iter().filter(|p| w.contains(p)).count())
                .sum::<usize>()
        });
    });
    group.finish();
}

fn bench_has(c: &mut Criterion) {
    let points = gen_clustered_points(100, 100, 40.0);
    let probes = gen_uniform_points(1_000);
    let mut group = c.benchmark_group("quadtree_has_clustered");
    group.throughput(Throughput::Elements((points.len() / 10 + probes.len()) as u64));
    for capacity in CAPACITIES {
        let tree = build(&points, capacity);
        group.bench_function(BenchmarkId::new("cap", capacity), |b| {
            b.iter(|| {
                let hits = points.iter().step_by(10).filter(|p| tree.has(p)).count();
                let misses = probes.iter().filter(|p| !tree.has(p)).count();
                black_box((hits, misses))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_uniform,
    bench_insert_clustered,
    bench_visit_rect,
    bench_has,
);
criterion_main!(benches);
