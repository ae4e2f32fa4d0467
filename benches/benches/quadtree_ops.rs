// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_quadtree::{Aabb2D, QuadTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

const WORLD: Aabb2D<f64> = Aabb2D::new(0.0, 0.0, 2000.0, 2000.0);

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

fn gen_uniform_points(count: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(seed);
    for _ in 0..count {
        out.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push((cx + dx, cy + dy));
        }
    }
    out
}

fn build_tree(points: &[(f64, f64)]) -> QuadTree<f64, u32> {
    let mut tree = QuadTree::new(WORLD);
    tree.reserve(points.len());
    for (i, &(x, y)) in points.iter().enumerate() {
        let _ = tree.insert(x, y, i as u32).unwrap();
    }
    tree
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query");
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = gen_uniform_points(n, 0xCAFE_F00D_DEAD_BEEF);
        let query = Aabb2D::new(400.0, 400.0, 800.0, 800.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = build_tree(&points);
                    let hits: usize = tree.query_rect(query).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(32, 512, 40.0);
    group.bench_function("clustered_32x512", |b| {
        b.iter_batched(
            || points.clone(),
            |points| {
                let tree = build_tree(&points);
                let hits: usize = tree.query_rect(Aabb2D::new(0.0, 0.0, 1000.0, 1000.0)).count();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_only");
    for &n in &[10_000usize, 100_000] {
        let tree = build_tree(&gen_uniform_points(n, 0xFACE_FEED_CAFE_BABE));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("small_window_n{}", n), |b| {
            b.iter(|| {
                let hits: usize = tree
                    .query_rect(black_box(Aabb2D::new(900.0, 900.0, 1000.0, 1000.0)))
                    .count();
                black_box(hits);
            })
        });
        group.bench_function(format!("full_bounds_n{}", n), |b| {
            b.iter(|| {
                let hits: usize = tree.query_rect(black_box(tree.bounds())).count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_relocate_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("relocate_churn");
    for &n in &[1_000usize, 10_000] {
        let points = gen_uniform_points(n, 0xBADC_F00D_1234_5678);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("relocate_all_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut tree = QuadTree::new(WORLD);
                    let mut keys = Vec::with_capacity(n);
                    for (i, &(x, y)) in points.iter().enumerate() {
                        keys.push(tree.insert(x, y, i as u32).unwrap());
                    }
                    (tree, keys, Rng::new(0x5EED_5EED_5EED_5EED))
                },
                |(mut tree, keys, mut rng)| {
                    for key in keys {
                        tree.relocate(key, rng.next_f64() * 2000.0, rng.next_f64() * 2000.0)
                            .unwrap();
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_remove_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_all");
    let n = 10_000usize;
    let points = gen_uniform_points(n, 0x0123_4567_89AB_CDEF);
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("remove_all_n10000", |b| {
        b.iter_batched(
            || {
                let mut tree = QuadTree::new(WORLD);
                let mut keys = Vec::with_capacity(n);
                for (i, &(x, y)) in points.iter().enumerate() {
                    keys.push(tree.insert(x, y, i as u32).unwrap());
                }
                (tree, keys)
            },
            |(mut tree, keys)| {
                for key in keys {
                    tree.remove(key);
                }
                black_box(tree.is_empty());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_query,
    bench_query_only,
    bench_relocate_churn,
    bench_remove_all
);
criterion_main!(benches);
