// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch, hover, keyboard focus and drawing on a small stage.
//!
//! Run:
//! - `cargo run -p proscenium_demos --example stage_basics`

use proscenium_demos::{PrintBatch, Scene, init_logging, to_screen};
use proscenium_stage::{ClickListener, EventKind, InputEvent, Stage, StageConfig};

fn main() {
    init_logging();

    let mut stage = Stage::new(StageConfig::default());
    let scene = Scene::build(&mut stage);
    let root = stage.root();

    for actor in [scene.button, scene.group, root] {
        stage.add_listener(actor, |ev: &mut InputEvent, stage: &mut Stage| {
            let name = stage
                .tree()
                .actor(ev.listener_actor())
                .and_then(|a| a.name.clone())
                .unwrap_or_else(|| "root".into());
            println!("  {:?} at {name} ({:?})", ev.kind, ev.phase());
            false
        });
    }
    stage.add_listener(
        scene.button,
        ClickListener::new(|_: &mut InputEvent, stage: &mut Stage, count: u32| {
            println!("  button clicked x{count} at t={:.2}", stage.time());
        }),
    );

    println!("== Touch on the button ==");
    let p = to_screen(&stage, 125.0, 125.0);
    let handled = stage.touch_down(p.x, p.y, 0, 0);
    stage.touch_up(p.x, p.y, 0, 0);
    println!("  handled: {handled}");

    println!("== Touch on empty space ==");
    let p = to_screen(&stage, 105.0, 105.0);
    println!("  handled: {}", stage.touch_down(p.x, p.y, 0, 0));

    println!("== Hover in and out ==");
    let p = to_screen(&stage, 120.0, 120.0);
    stage.mouse_moved(p.x, p.y);
    let p = to_screen(&stage, 400.0, 400.0);
    stage.mouse_moved(p.x, p.y);

    println!("== Keyboard focus ==");
    stage.set_keyboard_focus(Some(scene.button));
    stage.key_typed('p');
    stage.add_listener(scene.button, |ev: &mut InputEvent, _: &mut Stage| {
        if ev.kind == EventKind::FocusOut {
            println!("  button refuses to give up focus");
            ev.cancel();
        }
        false
    });
    let moved = stage.set_keyboard_focus(None);
    println!("  focus moved: {moved}, focus is {:?}", stage.keyboard_focus());

    println!("== Draw ==");
    let mut batch = PrintBatch::default();
    stage.draw(&mut batch);
    println!("  {} items", batch.count);
}
