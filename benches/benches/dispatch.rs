// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cost of routing a touch through a stage: hit, route build, listeners.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use proscenium_actor::{Actor, Transform};
use proscenium_stage::{InputEvent, Stage, StageConfig};

/// A stage with `depth` nested groups, each with `listeners` listeners.
fn build_stage(depth: u32, listeners: u32) -> (Stage, Point) {
    let mut stage = Stage::new(StageConfig::default());
    let mut parent = stage.root();
    for _ in 0..depth {
        let g = stage
            .tree_mut()
            .insert_group(Actor::with_transform(Transform::at(1.0, 1.0, 0.0, 0.0)));
        stage.tree_mut().add_child(parent, g).unwrap();
        for _ in 0..listeners {
            stage.add_listener(g, |ev: &mut InputEvent, _: &mut Stage| {
                black_box(ev.stage_position);
                false
            });
        }
        parent = g;
    }
    let leaf = stage
        .tree_mut()
        .insert_leaf(Actor::with_transform(Transform::at(0.0, 0.0, 10.0, 10.0)));
    stage.tree_mut().add_child(parent, leaf).unwrap();
    let inside = Point::new(f64::from(depth) + 5.0, f64::from(depth) + 5.0);
    let screen = stage.stage_to_screen(inside);
    (stage, screen)
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &depth in &[4_u32, 16, 64] {
        for &listeners in &[0_u32, 1, 4] {
            let (mut stage, screen) = build_stage(depth, listeners);
            group.bench_function(
                BenchmarkId::new(format!("touch_down_l{listeners}"), depth),
                |b| {
                    b.iter(|| black_box(stage.touch_down(screen.x, screen.y, 0, 0)));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
