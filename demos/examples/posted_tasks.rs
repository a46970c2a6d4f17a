// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feeding a stage from a worker thread, plus long-press timing.
//!
//! Run:
//! - `cargo run -p proscenium_demos --example posted_tasks`

use std::thread;
use std::time::Duration;

use kurbo::Vec2;
use proscenium_demos::{Scene, init_logging, to_screen};
use proscenium_stage::{EventKind, InputEvent, Stage};

fn main() {
    init_logging();

    let mut stage = Stage::default();
    let scene = Scene::build(&mut stage);
    stage.add_listener(scene.button, |ev: &mut InputEvent, stage: &mut Stage| {
        if ev.kind == EventKind::LongPress {
            println!("  long press at t={:.2}", stage.time());
        }
        true
    });

    let poster = stage.poster();
    let button = scene.button;
    let worker = thread::spawn(move || {
        for step in 0..5 {
            let posted = poster.post(move |stage: &mut Stage| {
                if let Some(actor) = stage.tree_mut().actor_mut(button) {
                    actor.transform.move_by(Vec2::new(1.0, 0.0));
                }
                println!("  task {step} ran");
            });
            if let Err(err) = posted {
                log::warn!("worker: {err}");
                return;
            }
            thread::sleep(Duration::from_millis(2));
        }
    });
    if worker.join().is_err() {
        log::warn!("worker panicked");
    }

    println!("== Frame 1 ==");
    let ran = stage.act(1.0 / 60.0);
    println!("  {ran} tasks");

    println!("== Hold the button ==");
    let p = to_screen(&stage, 130.0, 125.0);
    stage.touch_down(p.x, p.y, 0, 0);
    for _ in 0..90 {
        stage.act(1.0 / 60.0);
    }
    stage.touch_up(p.x, p.y, 0, 0);
}
