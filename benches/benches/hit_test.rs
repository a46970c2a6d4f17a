// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-testing cost over wide, deep and rotated actor trees.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use proscenium_actor::{Actor, ActorId, ActorTree, Transform};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// `rows * cols` panels, each holding `per_panel` buttons.
fn build_grid(rows: u32, cols: u32, per_panel: u32, rotation: f64) -> (ActorTree, ActorId) {
    let mut tree = ActorTree::new();
    let root = tree.insert_group(Actor::default());
    for r in 0..rows {
        for c in 0..cols {
            let mut t = Transform::at(f64::from(c) * 100.0, f64::from(r) * 100.0, 100.0, 100.0);
            t.set_origin_center();
            t.rotation = rotation;
            let panel = tree.insert_group(Actor::with_transform(t));
            tree.add_child(root, panel).unwrap();
            for i in 0..per_panel {
                let x = f64::from(i % 4) * 25.0;
                let y = f64::from(i / 4) * 25.0;
                let button = tree.insert_leaf(Actor::with_transform(Transform::at(x, y, 20.0, 20.0)));
                tree.add_child(panel, button).unwrap();
            }
        }
    }
    (tree, root)
}

/// A single chain of `depth` nested groups with a leaf at the bottom.
fn build_chain(depth: u32) -> (ActorTree, ActorId) {
    let mut tree = ActorTree::new();
    let root = tree.insert_group(Actor::default());
    let mut parent = root;
    for _ in 0..depth {
        let g = tree.insert_group(Actor::with_transform(Transform::at(1.0, 1.0, 0.0, 0.0)));
        tree.add_child(parent, g).unwrap();
        parent = g;
    }
    let leaf = tree.insert_leaf(Actor::with_transform(Transform::at(0.0, 0.0, 10.0, 10.0)));
    tree.add_child(parent, leaf).unwrap();
    (tree, root)
}

fn probes(n: usize, extent: f64) -> Vec<Point> {
    let mut rng = Lcg(0x5eed);
    (0..n)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn bench_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");

    for &side in &[4_u32, 16, 32] {
        for (label, rotation) in [("axis_aligned", 0.0), ("rotated", 30.0)] {
            let (tree, root) = build_grid(side, side, 16, rotation);
            let pts = probes(256, f64::from(side) * 100.0);
            group.bench_with_input(
                BenchmarkId::new(format!("grid_{label}"), side * side * 16),
                &pts,
                |b, pts| {
                    b.iter(|| {
                        let hits = pts
                            .iter()
                            .filter(|&&p| tree.hit(root, p, true).is_some())
                            .count();
                        black_box(hits);
                    });
                },
            );
        }
    }

    for &depth in &[8_u32, 64, 256] {
        let (tree, root) = build_chain(depth);
        let p = Point::new(f64::from(depth) + 5.0, f64::from(depth) + 5.0);
        group.bench_with_input(BenchmarkId::new("chain", depth), &p, |b, &p| {
            b.iter(|| black_box(tree.hit(root, black_box(p), true)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hit);
criterion_main!(benches);
