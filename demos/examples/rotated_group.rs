// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing through a rotated and scaled group.
//!
//! Run:
//! - `cargo run -p proscenium_demos --example rotated_group`

use kurbo::Point;
use proscenium_demos::{Scene, init_logging};
use proscenium_stage::Stage;

fn main() {
    init_logging();

    let mut stage = Stage::default();
    let scene = Scene::build(&mut stage);
    let probes = [Point::new(125.0, 125.0), Point::new(80.0, 120.0)];

    for (label, rotation, scale) in [("plain", 0.0, 1.0), ("rotated 90", 90.0, 1.0), ("scaled 2x", 0.0, 2.0)] {
        if let Some(group) = stage.tree_mut().actor_mut(scene.group) {
            group.transform.rotation = rotation;
            group.transform.set_scale(scale);
        }
        println!("== {label} ==");
        for probe in probes {
            let hit = stage.hit(probe, true);
            let local = stage.tree().world_to_local(scene.button, probe);
            println!("  {probe:?} -> {hit:?} (button-local {local:?})");
        }
        let corner = stage.tree().local_to_world(scene.button, Point::ZERO);
        println!("  button origin in stage space: {corner:?}");
    }
}
