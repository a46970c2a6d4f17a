// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proscenium Stage: input routing for actor trees.
//!
//! A [`Stage`] owns an [`ActorTree`](proscenium_actor::ActorTree) with one root
//! group, a [`Viewport`](proscenium_view::Viewport), focus state and the
//! listeners attached to actors. Screen input goes through four steps:
//!
//! 1) Unproject the screen point into stage coordinates.
//! 2) Hit-test from the root down to the deepest touchable actor.
//! 3) Build the route: capture root → target, the target, then bubble back
//!    up to the root.
//! 4) Run listeners along the route with one shared [`InputEvent`].
//!
//! Bubbling ends after the first actor whose listeners handled or stopped the
//! event. Capture listeners only end propagation by stopping it.
//!
//! ## Focus
//!
//! - A handled touch down makes its target the touch focus of that pointer;
//!   drags and the matching up go there even when the pointer leaves it.
//! - Key events go to the keyboard focus, scroll events to the scroll focus,
//!   and both fall back to the root.
//! - The mouse hover path produces non-bubbling enter/exit events.
//!
//! ## Threads
//!
//! The stage lives on one thread. Other threads queue closures through a
//! [`Poster`]; [`Stage::act`] runs them in post order.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use proscenium_actor::{Actor, Transform};
//! use proscenium_stage::{InputEvent, Stage, StageConfig};
//!
//! let mut stage = Stage::new(StageConfig::default());
//! let group = stage
//!     .tree_mut()
//!     .insert_group(Actor::with_transform(Transform::at(100.0, 100.0, 0.0, 0.0)));
//! let button = stage
//!     .tree_mut()
//!     .insert_leaf(Actor::with_transform(Transform::at(10.0, 10.0, 20.0, 20.0)));
//! stage.add_actor(group).unwrap();
//! stage.tree_mut().add_child(group, button).unwrap();
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! for actor in [button, group, stage.root()] {
//!     let log = log.clone();
//!     stage.add_listener(actor, move |ev: &mut InputEvent, _: &mut Stage| {
//!         log.borrow_mut().push(ev.listener_actor());
//!         false
//!     });
//! }
//!
//! // Stage (125, 125) is screen (125, 355) on the default 640x480 Y-up stage.
//! assert!(!stage.touch_down(125.0, 355.0, 0, 0));
//! assert_eq!(*log.borrow(), [button, group, stage.root()]);
//!
//! // Empty space: nothing is hit, nothing is dispatched.
//! log.borrow_mut().clear();
//! assert!(!stage.touch_down(105.0, 375.0, 0, 0));
//! assert!(log.borrow().is_empty());
//! ```

pub mod dispatch;
pub mod gesture;
pub mod hover;

mod config;
mod event;
mod handlers;
mod listener;
mod stage;
mod tasks;

pub use config::StageConfig;
pub use event::{EventKind, InputEvent, buttons};
pub use handlers::{ClickListener, DragListener};
pub use listener::{EventListener, ListenerId};
pub use stage::Stage;
pub use tasks::{PostError, Poster, Task};
