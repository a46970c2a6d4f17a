// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proscenium Actor: a Kurbo-native actor tree for 2D stages.
//!
//! - Represents a hierarchy of actors with local transforms (position, origin,
//!   scale, rotation), size, tint, visibility and touchability.
//! - Groups own an ordered child list; insertion order is paint order.
//! - Hit testing walks the hierarchy top-down, converting the query point into
//!   each child's local space, so rotated and scaled groups are honored exactly.
//! - A paint-order traversal hands world-space quads to a [`Batch`] sink.
//!
//! ## Not a renderer
//!
//! This crate never talks to a GPU. Rendering backends implement [`Batch`] and
//! receive one [`DrawItem`] per visible actor.
//!
//! ## API overview
//!
//! - [`ActorTree`]: arena holding actors and their parent/child links.
//! - [`Actor`]: per-actor data (transform, color, visibility, touchability, name).
//! - [`Transform`]: local placement and the point mappings it induces.
//! - [`ActorId`]: generational handle of an actor.
//! - [`Touchable`]: hit-test eligibility.
//! - [`TreeError`]: structural edits that cannot be applied.
//!
//! Key operations:
//! - [`ActorTree::insert_leaf`] / [`ActorTree::insert_group`] → [`ActorId`]
//! - [`ActorTree::add_child`] / [`ActorTree::remove_child`] / [`ActorTree::destroy`]
//! - [`ActorTree::hit`] for the deepest actor under a point.
//! - [`ActorTree::local_to_world`] / [`ActorTree::world_to_local`] for coordinate composition.
//! - [`ActorTree::draw`] for the paint-order traversal.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use proscenium_actor::{Actor, ActorTree, Transform};
//!
//! let mut tree = ActorTree::new();
//! let root = tree.insert_group(Actor::default());
//! let group = tree.insert_group(Actor::with_transform(Transform::at(100.0, 100.0, 0.0, 0.0)));
//! let button = tree.insert_leaf(Actor::with_transform(Transform::at(10.0, 10.0, 20.0, 20.0)));
//! tree.add_child(root, group).unwrap();
//! tree.add_child(group, button).unwrap();
//!
//! assert_eq!(tree.hit(root, Point::new(125.0, 125.0), true), Some(button));
//! assert_eq!(tree.hit(root, Point::new(105.0, 105.0), true), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod draw;
mod error;
mod transform;
mod tree;
mod types;

pub use draw::{Batch, DrawItem};
pub use error::TreeError;
pub use transform::Transform;
pub use tree::ActorTree;
pub use types::{Actor, ActorId, ActorKind, Touchable};
