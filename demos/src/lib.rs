// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Proscenium demos.
//!
//! Run a demo with, for example:
//! - `cargo run -p proscenium_demos --example stage_basics`
//!
//! Set `RUST_LOG=trace` to see hit results and dispatch routes.

use kurbo::Point;
use proscenium_actor::{Actor, ActorId, Batch, DrawItem, Transform};
use proscenium_stage::Stage;

/// Install `env_logger`, defaulting to `debug` when `RUST_LOG` is unset.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
}

/// A [`Batch`] that prints every draw item.
#[derive(Debug, Default)]
pub struct PrintBatch {
    /// Items seen so far.
    pub count: usize,
}

impl Batch for PrintBatch {
    fn draw(&mut self, item: &DrawItem) {
        self.count += 1;
        let [bl, _, tr, _] = item.quad;
        println!(
            "  {:indent$}{:?}  ({:.1}, {:.1})..({:.1}, {:.1})  alpha={:.2}",
            "",
            item.actor,
            bl.x,
            bl.y,
            tr.x,
            tr.y,
            item.color.components[3],
            indent = item.depth * 2,
        );
    }
}

/// The canonical scene: a group at (100, 100) holding a 20x20 button at
/// (10, 10).
#[derive(Clone, Copy, Debug)]
pub struct Scene {
    /// The group.
    pub group: ActorId,
    /// The button inside it.
    pub button: ActorId,
}

impl Scene {
    /// Build the scene on `stage`.
    pub fn build(stage: &mut Stage) -> Self {
        let tree = stage.tree_mut();
        let group = tree.insert_group(
            Actor::with_transform(Transform::at(100.0, 100.0, 0.0, 0.0)).named("group"),
        );
        let button = tree.insert_leaf(
            Actor::with_transform(Transform::at(10.0, 10.0, 20.0, 20.0)).named("button"),
        );
        if let Err(err) = tree.add_child(group, button) {
            log::warn!("scene: {err}");
        }
        if let Err(err) = stage.add_actor(group) {
            log::warn!("scene: {err}");
        }
        Self { group, button }
    }
}

/// Screen point of a stage point.
pub fn to_screen(stage: &Stage, x: f64, y: f64) -> Point {
    stage.stage_to_screen(Point::new(x, y))
}
